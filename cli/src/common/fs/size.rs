//! # lemonutils Size Calculation
//!
//! File: cli/src/common/fs/size.rs
//!
//! Computes the byte size of a file, or the recursive total of every regular
//! file below a directory. Only the root must be readable: nested entries that
//! cannot be inspected (including symlink cycles, which `walkdir` detects)
//! are logged and count as zero.
//!
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Returns the size of `path` in bytes.
///
/// - Regular file: its length.
/// - Directory: the sum of all regular files beneath it, following symlinks.
/// - Anything else (sockets, devices, fifos): 0.
///
/// # Errors
///
/// Fails only when `path` itself cannot be stat'ed.
pub fn calculate_size(path: impl AsRef<Path>) -> FsResult<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;

    if metadata.is_file() {
        return Ok(metadata.len());
    }
    if !metadata.is_dir() {
        debug!("{:?} is neither a file nor a directory, size 0", path);
        return Ok(0);
    }

    let mut total = 0u64;
    for entry in WalkDir::new(path).follow_links(true).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", path, e);
                continue;
            }
        };
        match entry.metadata() {
            Ok(meta) if meta.is_file() => total += meta.len(),
            Ok(_) => {}
            Err(e) => warn!("Cannot stat {:?}: {}", entry.path(), e),
        }
    }
    debug!("Total size of {:?}: {} bytes", path, total);
    Ok(total)
}
