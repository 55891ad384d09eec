//! # lemonutils File Check Command
//!
//! File: cli/src/commands/file/check.rs
//!
//! Implements `lemon file check <PATH>`. Always succeeds; the answer is in
//! the output:
//!
//! ```text
//! exists: true
//! accessible: false
//! ```
//!
use crate::commands::expand_path;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to inspect (file or directory).
    path: String,
}

pub fn handle_check(args: CheckArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    println!("exists: {}", helper.path_exists(&path));
    println!("accessible: {}", helper.path_is_accessible(&path));
    Ok(())
}
