//! # lemonutils File Write Command
//!
//! File: cli/src/commands/file/write.rs
//!
//! Implements `lemon file write <PATH> <CONTENT>`. Whether a missing file may
//! be created is decided by the `[write] allow_create` setting.
//!
use crate::commands::expand_path;
use anyhow::Context;
use clap::Parser;
use lemonutils::common::fs::FileHelper;
use lemonutils::core::error::Result;
use tracing::info;

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write.
    path: String,
    /// Text to store in the file, replacing its previous content.
    content: String,
}

pub fn handle_write(args: WriteArgs, helper: &FileHelper) -> Result<()> {
    let path = expand_path(&args.path);
    info!(
        "Handling file write (path: {:?}, policy: {:?})",
        path,
        helper.write_policy()
    );
    helper
        .write(&path, &args.content)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    println!("Wrote {} bytes to {}", args.content.len(), path.display());
    Ok(())
}
