//! # lemonutils Directory Delete Command
//!
//! File: cli/src/commands/dir/rm.rs
//!
//! Implements `lemon dir rm <PATH>`, a recursive delete. A missing directory
//! is an error, so typos do not pass silently.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;
use tracing::warn;

#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Directory to delete, with everything inside it.
    path: String,
}

pub fn handle_rm(args: RmArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    warn!("Recursively deleting {:?}", path);
    helper
        .delete_directory(&path)
        .with_context(|| format!("Failed to delete directory '{}'", path.display()))?;
    println!("Deleted {}", path.display());
    Ok(())
}
