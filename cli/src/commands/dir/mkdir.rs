//! # lemonutils Directory Create Command
//!
//! File: cli/src/commands/dir/mkdir.rs
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct MkdirArgs {
    /// Directory to create. Its parent must already exist.
    path: String,
}

pub fn handle_mkdir(args: MkdirArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    helper
        .create_directory(&path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
