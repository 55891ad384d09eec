//! # lemonutils Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and pulls in what it needs.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Returns a `Command` for the compiled `lemon` binary.
///
/// The command runs inside `cwd` with `RUST_LOG` cleared, so stderr only
/// carries what the binary itself decides to log.
pub fn lemon_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lemon").expect("Failed to find lemon binary for testing");
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, content).expect("write fixture file");
}
