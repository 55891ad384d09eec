//! # lemonutils Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Single-file text I/O and creation helpers:
//!
//! - **`read_file`**: reads a whole file as UTF-8 text.
//! - **`write_file`**: writes text to a file, subject to a [`WritePolicy`].
//! - **`create_file`**: creates a new empty file, refusing to clobber an existing entry.
//! - **`ensure_dir_exists`**: `mkdir -p` that also rejects a non-directory at the path.
//!
//! ## Write policy
//!
//! An existing target must be accessible. A missing target is created only when
//! the policy allows creation and its parent is an existing directory; whether
//! that directory is writable is left to the host, which classifies a refusal
//! as `NotAccessible`. Parent directories are never created by `write_file`.
//!
use crate::common::fs::access::{path_exists, require_accessible};
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Controls whether [`write_file`] may create a file that does not exist yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Create the file when missing, provided its parent directory is accessible.
    #[default]
    AllowCreate,
    /// Only overwrite files that already exist and are accessible.
    ExistingOnly,
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// `NotFound` / `NotAccessible` when the file is missing or unreadable, `Io`
/// for anything else (including content that is not valid UTF-8).
pub fn read_file(path: impl AsRef<Path>) -> FsResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
}

/// Writes `content` to `path`, replacing any previous content.
///
/// # Errors
///
/// - `NotAccessible` if the target exists but cannot be used.
/// - `NotFound` if the target is missing and either the policy forbids
///   creation or the parent directory is missing.
/// - `NotAccessible` if the parent directory does not permit creating the file.
/// - `Io` for other write failures.
pub fn write_file(path: impl AsRef<Path>, content: &str, policy: WritePolicy) -> FsResult<()> {
    let path = path.as_ref();
    if path_exists(path) {
        require_accessible(path)?;
    } else {
        match policy {
            WritePolicy::ExistingOnly => return Err(FsError::not_found(path)),
            WritePolicy::AllowCreate => {
                let parent = parent_or_cwd(path);
                let metadata = fs::metadata(parent).map_err(|e| FsError::from_io(parent, e))?;
                if !metadata.is_dir() {
                    return Err(FsError::not_found(path));
                }
            }
        }
        debug!("Creating new file through write: {:?}", path);
    }
    fs::write(path, content).map_err(|e| FsError::from_io(path, e))?;
    info!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Creates an empty file at `path`.
///
/// # Errors
///
/// `Conflict` if anything already exists at `path`, `NotFound` if the parent
/// directory is missing.
pub fn create_file(path: impl AsRef<Path>) -> FsResult<()> {
    let path = path.as_ref();
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FsError::from_io(path, e))?;
    info!("Created empty file: {:?}", path);
    Ok(())
}

/// Ensures that a directory exists at the specified path, creating it and any
/// missing parents.
///
/// # Errors
///
/// `Conflict` if the path exists but is not a directory; creation failures
/// are classified from the underlying I/O error.
pub fn ensure_dir_exists(path: &Path) -> FsResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(FsError::conflict(path));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

// `Path::new("file.txt").parent()` is `Some("")`, which means the working directory.
fn parent_or_cwd(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
