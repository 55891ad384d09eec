//! # lemonutils Directory Command Group
//!
//! File: cli/src/commands/dir/mod.rs
//!
//! ## Overview
//!
//! Defines and routes the subcommands of `lemon dir`, which operate on
//! whole directories.
//!
//! ## Examples
//!
//! ```bash
//! lemon dir ls ./logs --ext log
//! lemon dir subdirs ~/projects
//! lemon dir mkdir ./build
//! lemon dir copy ./templates/rust ./scratch
//! lemon dir mv ./scratch/rust ./archive
//! lemon dir rename ./archive/rust rust-2024
//! lemon dir size ./archive --human
//! lemon dir rm ./scratch
//! ```
//!
use clap::{Parser, Subcommand};
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

mod copy;
mod list;
mod mkdir;
mod mv;
mod rm;
mod size;

/// Top-level arguments for the 'dir' command group.
#[derive(Parser, Debug)]
pub struct DirArgs {
    #[command(subcommand)]
    command: DirCommand,
}

/// Enum defining all subcommands under 'lemon dir'.
#[derive(Subcommand, Debug)]
enum DirCommand {
    /// List the files directly inside a directory
    Ls(list::LsArgs),
    /// List the directories directly inside a directory
    Subdirs(list::SubdirsArgs),
    /// Create one empty directory (parents must exist)
    Mkdir(mkdir::MkdirArgs),
    /// Delete a directory and everything in it
    Rm(rm::RmArgs),
    /// Move a directory into another directory, keeping its name
    Mv(mv::MvArgs),
    /// Rename a directory in place
    Rename(mv::RenameArgs),
    /// Copy a directory tree into another directory (never overwrites)
    #[command(alias = "cp")]
    Copy(copy::CopyArgs),
    /// Print the total size of a file or directory tree
    Size(size::SizeArgs),
}

/// Main handler function for the 'dir' command group.
pub async fn handle_dir(args: DirArgs, helper: &FileHelper) -> Result<()> {
    match args.command {
        DirCommand::Ls(args) => list::handle_ls(args, helper)?,
        DirCommand::Subdirs(args) => list::handle_subdirs(args, helper)?,
        DirCommand::Mkdir(args) => mkdir::handle_mkdir(args, helper)?,
        DirCommand::Rm(args) => rm::handle_rm(args, helper)?,
        DirCommand::Mv(args) => mv::handle_mv(args, helper).await?,
        DirCommand::Rename(args) => mv::handle_rename(args, helper).await?,
        DirCommand::Copy(args) => copy::handle_copy(args, helper)?,
        DirCommand::Size(args) => size::handle_size(args, helper)?,
    }
    Ok(())
}
