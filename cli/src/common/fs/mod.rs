//! # lemonutils Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!

//! ## Overview
//!
//! Thin, self-contained wrappers over single host filesystem calls: reading and
//! writing text, creating/moving/renaming/deleting directories, copying files
//! and trees, probing existence and access, and measuring sizes. There is no
//! shared state between calls.
//!
//! ## Architecture
//!
//! - **`access`**: `path_exists`, `path_is_accessible` and the `require_accessible` precondition check.
//! - **`io`**: `read_file`, `write_file` (with a `WritePolicy`), `create_file`, `ensure_dir_exists`.
//! - **`listing`**: `list_files` / `list_subdirectories`, returning lazy single-pass iterators.
//! - **`directory`**: `create_directory`, `delete_directory`, and the awaitable `move_directory` / `rename_directory`.
//! - **`copy`**: `copy_file` and `copy_directory_tree`, neither of which ever overwrites.
//! - **`size`**: `calculate_size` for files and directory trees.
//! - **`report`**: the diagnostic channel failures are reported on.
//! - **`helper`**: `FileHelper`, which runs the operations above and reports failures, and its `Lenient` view.
//!
//! The free functions return `FsResult` and log only progress. Use
//! `FileHelper` when failures should also be reported.
//!

/// Existence and access probes.
pub mod access;
/// Recursive copies of files and directory trees.
pub mod copy;
/// Whole-directory create, delete, move and rename.
pub mod directory;
/// Reporting facade over every operation.
pub mod helper;
/// Text I/O and file creation.
pub mod io;
/// Immediate-children listings.
pub mod listing;
/// Diagnostic channel.
pub mod report;
/// File and directory sizes.
pub mod size;

pub use helper::{FileHelper, Lenient};
pub use io::WritePolicy;
pub use report::{Diagnostics, Operation};
