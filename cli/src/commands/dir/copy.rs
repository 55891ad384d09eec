//! # lemonutils Directory Copy Command
//!
//! File: cli/src/commands/dir/copy.rs
//!
//! Implements `lemon dir copy <SOURCE> <DEST_PARENT>`: the tree is recreated
//! as `DEST_PARENT/<name of SOURCE>`, which must not exist yet.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// Directory tree to copy.
    source: String,
    /// Directory to copy it into (created if missing).
    destination_parent: String,
}

pub fn handle_copy(args: CopyArgs, helper: &FileHelper) -> Result<()> {
    let source = expand_path(&args.source);
    let destination_parent = expand_path(&args.destination_parent);
    let summary = helper
        .copy_directory_tree(&source, &destination_parent)
        .with_context(|| {
            format!(
                "Failed to copy '{}' into '{}'",
                source.display(),
                destination_parent.display()
            )
        })?;
    println!(
        "Copied {} -> {} ({} files, {} directories, {} bytes)",
        source.display(),
        summary.root.display(),
        summary.files,
        summary.directories,
        summary.bytes
    );
    Ok(())
}
