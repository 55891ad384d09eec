//! # lemonutils Path Existence & Access Checks
//!
//! File: cli/src/common/fs/access.rs
//!
//! ## Overview
//!
//! Boolean probes used on their own and as preconditions by the mutating
//! helpers (`copy`, `directory`, `io`):
//!
//! - **`path_exists`**: an entry is present, regardless of permissions. A
//!   dangling symlink counts as present, since it still occupies the name.
//! - **`path_is_accessible`**: the entry exists *and* this process can use it:
//!   a file can be opened for reading, a directory can be listed.
//!
//! `require_accessible` turns the second probe into an `FsResult` so callers
//! can bail out with the right error kind before touching anything.
//!
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::path::Path;

/// Returns `true` iff an entry exists at `path`.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::symlink_metadata(path.as_ref()).is_ok()
}

/// Returns `true` iff `path` exists and the current process may access it.
pub fn path_is_accessible(path: impl AsRef<Path>) -> bool {
    require_accessible(path.as_ref()).is_ok()
}

/// Checks that `path` exists and is usable, returning the matching error kind
/// otherwise.
///
/// Directories are probed by opening them for listing, regular files by
/// opening them for reading. Other entry types only need to be stat-able.
pub fn require_accessible(path: &Path) -> FsResult<()> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
    let probe = if metadata.is_dir() {
        fs::read_dir(path).map(|_| ())
    } else if metadata.is_file() {
        fs::File::open(path).map(|_| ())
    } else {
        Ok(())
    };
    probe.map_err(|e| match FsError::from_io(path, e) {
        // It was there a moment ago; an open failing now means we cannot use it.
        FsError::NotFound { .. } => FsError::not_accessible(path),
        other => other,
    })
}
