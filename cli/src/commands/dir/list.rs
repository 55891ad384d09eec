//! # lemonutils Directory Listing Commands
//!
//! File: cli/src/commands/dir/list.rs
//!
//! Implements `lemon dir ls` and `lemon dir subdirs`. Names are printed one
//! per line, sorted so the output is stable regardless of host listing order.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;

#[derive(Parser, Debug)]
pub struct LsArgs {
    /// Directory to list.
    directory: String,
    /// Only list files with exactly this extension (e.g. `txt`).
    #[arg(long, short)]
    ext: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SubdirsArgs {
    /// Directory to list.
    directory: String,
}

pub fn handle_ls(args: LsArgs, helper: &FileHelper) -> Result<()> {
    let directory = expand_path(&args.directory);
    let names = helper
        .list_files(&directory, args.ext.as_deref())
        .with_context(|| format!("Failed to list files in '{}'", directory.display()))?;
    print_sorted(names);
    Ok(())
}

pub fn handle_subdirs(args: SubdirsArgs, helper: &FileHelper) -> Result<()> {
    let directory = expand_path(&args.directory);
    let names = helper
        .list_subdirectories(&directory)
        .with_context(|| format!("Failed to list subdirectories of '{}'", directory.display()))?;
    print_sorted(names);
    Ok(())
}

fn print_sorted(names: impl Iterator<Item = String>) {
    let mut names: Vec<String> = names.collect();
    names.sort();
    for name in names {
        println!("{name}");
    }
}
