//! # lemonutils Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the command groups of the `lemon` binary:
//!
//! - `file`: single-file operations (`read`, `write`, `touch`, `copy`, `check`)
//! - `dir`: directory operations (`ls`, `subdirs`, `mkdir`, `rm`, `mv`, `rename`, `copy`, `size`)
//!
//! Each group defines its own arguments structure and a handler that receives
//! the configured `FileHelper`, so every failure is reported on the diagnostic
//! channel before it is returned to `main`.
//!
use std::path::PathBuf;

/// Command group for directory operations.
pub mod dir;
/// Command group for single-file operations.
pub mod file;

/// Expands a leading `~` in a path given on the command line.
pub(crate) fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_path("~/notes.txt"), home.join("notes.txt"));
        assert_eq!(expand_path("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_path("relative/x"), PathBuf::from("relative/x"));
    }
}
