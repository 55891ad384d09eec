//! # lemonutils File Command Group
//!
//! File: cli/src/commands/file/mod.rs
//!
//! ## Overview
//!
//! Defines and routes the subcommands of `lemon file`, which operate on
//! single files.
//!
//! ## Examples
//!
//! ```bash
//! lemon file read notes.txt
//! lemon file write notes.txt "new content"
//! lemon file touch empty.txt
//! lemon file copy notes.txt backup/notes.txt
//! lemon file check notes.txt
//! ```
//!
use clap::{Parser, Subcommand};
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

mod check;
mod copy;
mod read;
mod touch;
mod write;

/// Top-level arguments for the 'file' command group.
#[derive(Parser, Debug)]
pub struct FileArgs {
    #[command(subcommand)]
    command: FileCommand,
}

/// Enum defining all subcommands under 'lemon file'.
#[derive(Subcommand, Debug)]
enum FileCommand {
    /// Print a file's contents
    Read(read::ReadArgs),
    /// Write text to a file
    Write(write::WriteArgs),
    /// Create an empty file
    Touch(touch::TouchArgs),
    /// Copy a file to a new path (never overwrites)
    #[command(alias = "cp")]
    Copy(copy::CopyArgs),
    /// Report whether a path exists and is accessible
    Check(check::CheckArgs),
}

/// Main handler function for the 'file' command group.
pub async fn handle_file(args: FileArgs, helper: &FileHelper) -> Result<()> {
    match args.command {
        FileCommand::Read(args) => read::handle_read(args, helper)?,
        FileCommand::Write(args) => write::handle_write(args, helper)?,
        FileCommand::Touch(args) => touch::handle_touch(args, helper)?,
        FileCommand::Copy(args) => copy::handle_copy(args, helper)?,
        FileCommand::Check(args) => check::handle_check(args, helper)?,
    }
    Ok(())
}
