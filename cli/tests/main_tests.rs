//! # lemonutils CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! Top-level behavior of the `lemon` binary: standard flags, unknown
//! commands and configuration handling.
//!
mod common;

use common::{lemon_cmd, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    lemon_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file"))
        .stdout(predicate::str::contains("dir"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    lemon_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_subcommand_help() {
    let dir = tempdir().unwrap();
    lemon_cmd(dir.path())
        .args(["dir", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_unknown_command_fails() {
    let dir = tempdir().unwrap();
    lemon_cmd(dir.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "bad.toml", "[diagnostics]\ncomponent = \"has space\"\n");
    lemon_cmd(dir.path())
        .args(["--config", "bad.toml", "file", "check", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_can_forbid_creating_files() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "strict.toml", "[write]\nallow_create = false\n");
    lemon_cmd(dir.path())
        .args(["--config", "strict.toml", "file", "write", "new.txt", "data"])
        .assert()
        .code(1);
    assert!(!dir.path().join("new.txt").exists());
}

#[test]
fn test_project_config_is_discovered() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    write_file(dir.path(), ".lemon.toml", "[write]\nallow_create = false\n");
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    lemon_cmd(&dir.path().join("nested"))
        .args(["file", "write", "new.txt", "data"])
        .assert()
        .code(1);
    assert!(!dir.path().join("nested/new.txt").exists());
}
