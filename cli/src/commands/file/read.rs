//! # lemonutils File Read Command
//!
//! File: cli/src/commands/file/read.rs
//!
//! Implements `lemon file read <PATH>`: prints the file's text to stdout.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to read.
    path: String,
}

pub fn handle_read(args: ReadArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    let content = helper
        .read(&path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    // Print verbatim; the file decides whether it ends with a newline.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
