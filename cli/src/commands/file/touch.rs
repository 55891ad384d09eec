//! # lemonutils File Touch Command
//!
//! File: cli/src/commands/file/touch.rs
//!
//! Implements `lemon file touch <PATH>`. Unlike the shell utility, an existing
//! file is an error rather than a timestamp update.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct TouchArgs {
    /// Path of the empty file to create.
    path: String,
}

pub fn handle_touch(args: TouchArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    helper
        .create_file(&path)
        .with_context(|| format!("Failed to create file '{}'", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
