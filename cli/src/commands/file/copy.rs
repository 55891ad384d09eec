//! # lemonutils File Copy Command
//!
//! File: cli/src/commands/file/copy.rs
//!
//! Implements `lemon file copy <SOURCE> <DEST_FILE>`. Missing parent
//! directories of the destination are created; an existing destination aborts.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// File to copy.
    source: String,
    /// Destination file path (not a directory).
    destination: String,
}

pub fn handle_copy(args: CopyArgs, helper: &FileHelper) -> Result<()> {
    let source = expand_path(&args.source);
    let destination = expand_path(&args.destination);
    let bytes = helper.copy_file(&source, &destination).with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            source.display(),
            destination.display()
        )
    })?;
    println!(
        "Copied {} -> {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes
    );
    Ok(())
}
