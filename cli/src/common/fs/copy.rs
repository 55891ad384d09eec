//! # lemonutils Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Copying single files and whole directory trees without ever overwriting.
//!
//! ## Architecture
//!
//! - **`copy_file`**: copies one file to an explicit destination file path.
//!   The destination's parent directories are created on demand; an existing
//!   destination is a `Conflict`. The byte copy goes through
//!   `fs_extra::file::copy` with overwriting disabled.
//! - **`copy_directory_tree`**: mirrors `source` as
//!   `destination_parent/<name of source>`. The destination root must not exist
//!   yet and must not lie inside `source`. Children are visited depth-first in
//!   the order the host lists them; files go through `copy_file`, directories
//!   recurse. Symlinks are followed, except a link back to a directory that is
//!   already being copied. Anything that is neither a file nor a directory is
//!   skipped.
//!
//! A failure part-way through a tree copy stops the copy and leaves the
//! partially written destination in place; there is no rollback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lemonutils::common::fs::copy;
//!
//! # fn run_example() -> lemonutils::core::error::FsResult<()> {
//! let summary = copy::copy_directory_tree("/tmp/src", "/tmp/dst")?;
//! println!("{} files copied into {}", summary.files, summary.root.display());
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::access::{path_exists, require_accessible};
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Totals for a completed [`copy_directory_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySummary {
    /// The newly created destination root.
    pub root: PathBuf,
    /// Regular files copied.
    pub files: u64,
    /// Directories created, the root included.
    pub directories: u64,
    /// Bytes copied across all files.
    pub bytes: u64,
}

/// Copies `source` to the file path `destination`, returning the bytes copied.
///
/// # Errors
///
/// - `NotFound` / `NotAccessible` if `source` cannot be read.
/// - `Io` if `source` is not a regular file; nothing is created in that case.
/// - `Conflict` if `destination` already exists, or its parent exists as a file.
/// - `Io` for failures during the copy.
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> FsResult<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    require_accessible(source)?;
    let metadata = fs::metadata(source).map_err(|e| FsError::from_io(source, e))?;
    if !metadata.is_file() {
        return Err(FsError::invalid_input(source, "source is not a regular file"));
    }
    if path_exists(destination) {
        return Err(FsError::conflict(destination));
    }
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }

    let options = fs_extra::file::CopyOptions::new();
    let bytes = fs_extra::file::copy(source, destination, &options)
        .map_err(|e| FsError::from_fs_extra(source, e))?;
    debug!("Copied {:?} -> {:?} ({} bytes)", source, destination, bytes);
    Ok(bytes)
}

/// Recursively copies the directory `source` into `destination_parent`.
///
/// `destination_parent` (and its ancestors) are created if needed.
///
/// # Errors
///
/// - `NotFound` / `NotAccessible` if `source` cannot be listed.
/// - `Conflict` if `destination_parent/<name of source>` already exists.
/// - `Io` if `destination_parent` is `source` or lies below it; nothing is
///   created in that case.
/// - Any error from copying an individual entry, which aborts the remaining copy.
pub fn copy_directory_tree(
    source: impl AsRef<Path>,
    destination_parent: impl AsRef<Path>,
) -> FsResult<CopySummary> {
    let source = source.as_ref();
    let destination_parent = destination_parent.as_ref();

    require_accessible(source)?;
    if !source.is_dir() {
        return Err(FsError::invalid_input(source, "source is not a directory"));
    }
    let name = source
        .file_name()
        .ok_or_else(|| FsError::invalid_input(source, "source has no directory name"))?;
    let root = destination_parent.join(name);
    if path_exists(&root) {
        return Err(FsError::conflict(&root));
    }
    let resolved_source = source
        .canonicalize()
        .map_err(|e| FsError::from_io(source, e))?;
    if resolve_for_comparison(destination_parent)?.starts_with(&resolved_source) {
        return Err(FsError::invalid_input(
            &root,
            "destination lies inside the source directory",
        ));
    }

    info!("Starting recursive copy from {:?} to {:?}", source, root);
    ensure_dir_exists(destination_parent)?;
    let mut summary = CopySummary {
        root: root.clone(),
        files: 0,
        directories: 0,
        bytes: 0,
    };
    let mut visiting = Vec::new();
    mirror_directory(source, &root, &mut summary, &mut visiting)?;
    info!(
        "Finished recursive copy from {:?} to {:?}: {} files, {} directories, {} bytes",
        source, root, summary.files, summary.directories, summary.bytes
    );
    Ok(summary)
}

/// Canonical form of `path`, which may not exist yet: the deepest existing
/// ancestor is resolved and the missing components are appended to it.
fn resolve_for_comparison(path: &Path) -> FsResult<PathBuf> {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        let candidate = if current.as_os_str().is_empty() {
            Path::new(".")
        } else {
            current
        };
        match candidate.canonicalize() {
            Ok(resolved) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(resolved, |acc: PathBuf, part| acc.join(part)));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (current.parent(), current.file_name()) else {
                    return Err(FsError::from_io(path, e));
                };
                missing.push(name.to_os_string());
                current = parent;
            }
            Err(e) => return Err(FsError::from_io(path, e)),
        }
    }
}

// `visiting` holds the canonical paths of the directories currently being
// copied, so a symlink back to one of them is not followed again.
fn mirror_directory(
    source: &Path,
    target: &Path,
    summary: &mut CopySummary,
    visiting: &mut Vec<PathBuf>,
) -> FsResult<()> {
    let resolved = source
        .canonicalize()
        .map_err(|e| FsError::from_io(source, e))?;
    if visiting.contains(&resolved) {
        warn!("Skipping symlink cycle during copy: {:?}", source);
        return Ok(());
    }
    fs::create_dir(target).map_err(|e| FsError::from_io(target, e))?;
    summary.directories += 1;
    visiting.push(resolved);

    let entries = fs::read_dir(source).map_err(|e| FsError::from_io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(source, e))?;
        let child_source = entry.path();
        let child_target = target.join(entry.file_name());
        let metadata =
            fs::metadata(&child_source).map_err(|e| FsError::from_io(&child_source, e))?;

        if metadata.is_dir() {
            mirror_directory(&child_source, &child_target, summary, visiting)?;
        } else if metadata.is_file() {
            summary.bytes += copy_file(&child_source, &child_target)?;
            summary.files += 1;
        } else {
            debug!("Skipping special entry during copy: {:?}", child_source);
        }
    }
    visiting.pop();
    Ok(())
}
