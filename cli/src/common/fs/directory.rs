//! # lemonutils Directory Operations
//!
//! File: cli/src/common/fs/directory.rs
//!
//! ## Overview
//!
//! Create, delete, move and rename whole directories.
//!
//! `move_directory` and `rename_directory` validate every precondition before
//! touching the filesystem, so a rejected call leaves everything as it was.
//! The rename itself runs on `tokio::fs` and the returned future resolves only
//! once the host has completed it, so its outcome always reaches the caller.
//!
//! Nothing here locks. Two processes renaming into the same target can both
//! pass the conflict check; the host's rename semantics decide the winner.
//! `delete_directory` is not atomic: an interrupted removal leaves a partial tree.
//!
use crate::common::fs::access::{path_exists, require_accessible};
use crate::core::error::{FsError, FsResult};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Creates a single empty directory. Parents are not created.
///
/// # Errors
///
/// `NotFound` if the parent is missing, `Conflict` if something already
/// exists at `path`.
pub fn create_directory(path: impl AsRef<Path>) -> FsResult<()> {
    let path = path.as_ref();
    fs::create_dir(path).map_err(|e| FsError::from_io(path, e))?;
    info!("Created directory: {:?}", path);
    Ok(())
}

/// Recursively removes the directory at `path` and everything below it.
pub fn delete_directory(path: impl AsRef<Path>) -> FsResult<()> {
    let path = path.as_ref();
    fs::remove_dir_all(path).map_err(|e| FsError::from_io(path, e))?;
    info!("Deleted directory tree: {:?}", path);
    Ok(())
}

/// Moves `source` into `destination_parent`, keeping its name.
///
/// Returns the new location, `destination_parent/<name of source>`.
///
/// # Errors
///
/// - `NotFound` / `NotAccessible` if `source` or `destination_parent` cannot be used.
/// - `Conflict` if an entry with the source's name already exists in `destination_parent`.
/// - `Io` if `source` has no final name component or the rename fails.
pub async fn move_directory(
    source: impl AsRef<Path>,
    destination_parent: impl AsRef<Path>,
) -> FsResult<PathBuf> {
    let source = source.as_ref();
    let destination_parent = destination_parent.as_ref();

    require_accessible(source)?;
    require_accessible(destination_parent)?;
    let name = source
        .file_name()
        .ok_or_else(|| FsError::invalid_input(source, "source has no directory name"))?;
    let target = destination_parent.join(name);
    if path_exists(&target) {
        return Err(FsError::conflict(&target));
    }

    debug!("Moving {:?} to {:?}", source, target);
    rename(source, &target).await?;
    info!("Moved directory {:?} to {:?}", source, target);
    Ok(target)
}

/// Renames `source` in place to `new_name`, which must be a single path
/// component. Returns the new path.
///
/// # Errors
///
/// - `NotFound` / `NotAccessible` if `source` cannot be used.
/// - `Conflict` if an entry named `new_name` already exists next to `source`.
/// - `Io` if `new_name` is not a plain name or the rename fails.
pub async fn rename_directory(source: impl AsRef<Path>, new_name: &str) -> FsResult<PathBuf> {
    let source = source.as_ref();

    require_accessible(source)?;
    if !is_plain_name(new_name) {
        return Err(FsError::invalid_input(
            source,
            "new directory name must be a single path component",
        ));
    }
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    let target = parent.join(new_name);
    if path_exists(&target) {
        return Err(FsError::conflict(&target));
    }

    debug!("Renaming {:?} to {:?}", source, target);
    rename(source, &target).await?;
    info!("Renamed directory {:?} to {:?}", source, target);
    Ok(target)
}

async fn rename(from: &Path, to: &Path) -> FsResult<()> {
    tokio::fs::rename(from, to)
        .await
        .map_err(|e| FsError::from_io(from, e))
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
