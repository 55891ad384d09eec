//! # lemonutils Directory Move & Rename Commands
//!
//! File: cli/src/commands/dir/mv.rs
//!
//! ## Overview
//!
//! Implements `lemon dir mv <SOURCE> <DEST_PARENT>` and
//! `lemon dir rename <SOURCE> <NEW_NAME>`. Both validate their preconditions
//! first (source usable, destination free) and wait for the rename to finish,
//! so the exit status reflects the actual outcome.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct MvArgs {
    /// Directory to move.
    source: String,
    /// Existing directory to move it into.
    destination_parent: String,
}

#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Directory to rename.
    source: String,
    /// New name, without any path separators.
    new_name: String,
}

pub async fn handle_mv(args: MvArgs, helper: &FileHelper) -> Result<()> {
    let source = expand_path(&args.source);
    let destination_parent = expand_path(&args.destination_parent);
    let moved_to = helper
        .move_directory(&source, &destination_parent)
        .await
        .with_context(|| {
            format!(
                "Failed to move '{}' into '{}'",
                source.display(),
                destination_parent.display()
            )
        })?;
    println!("Moved {} -> {}", source.display(), moved_to.display());
    Ok(())
}

pub async fn handle_rename(args: RenameArgs, helper: &FileHelper) -> Result<()> {
    let source = expand_path(&args.source);
    let renamed_to = helper
        .rename_directory(&source, &args.new_name)
        .await
        .with_context(|| {
            format!(
                "Failed to rename '{}' to '{}'",
                source.display(),
                args.new_name
            )
        })?;
    println!("Renamed {} -> {}", source.display(), renamed_to.display());
    Ok(())
}
