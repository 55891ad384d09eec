//! # lemonutils Directory Listing
//!
//! File: cli/src/common/fs/listing.rs
//!
//! ## Overview
//!
//! Lists the immediate children of a directory, filtered by entry type.
//! Both entry points return a [`Listing`]: a lazy iterator over the entry
//! names that is consumed as it goes and cannot be restarted. The order is
//! whatever the host returns for the directory.
//!
//! Entry types are resolved by following symlinks, so a link to a file is
//! listed as a file. An entry that vanishes or cannot be inspected while the
//! listing is in progress is skipped with a warning.
//!
use crate::core::error::{FsError, FsResult};
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
enum Filter {
    Files { extension: Option<String> },
    Directories,
}

/// Lazy, single-pass sequence of entry names inside one directory.
#[derive(Debug)]
pub struct Listing {
    directory: PathBuf,
    entries: ReadDir,
    filter: Filter,
}

/// Lists the regular files directly inside `directory`.
///
/// With `extension` set (with or without the leading dot), only files whose
/// extension is exactly that string are returned; the comparison is
/// case-sensitive. `None` or an empty extension returns every file.
pub fn list_files(directory: impl AsRef<Path>, extension: Option<&str>) -> FsResult<Listing> {
    let extension = extension
        .map(|ext| ext.trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_string);
    Listing::open(directory.as_ref(), Filter::Files { extension })
}

/// Lists the directories directly inside `directory`.
pub fn list_subdirectories(directory: impl AsRef<Path>) -> FsResult<Listing> {
    Listing::open(directory.as_ref(), Filter::Directories)
}

impl Listing {
    fn open(directory: &Path, filter: Filter) -> FsResult<Self> {
        let entries = fs::read_dir(directory).map_err(|e| FsError::from_io(directory, e))?;
        debug!("Listing {:?} with filter {:?}", directory, filter);
        Ok(Self {
            directory: directory.to_path_buf(),
            entries,
            filter,
        })
    }

    /// The directory being listed.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn accepts(&self, path: &Path) -> bool {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping {:?} while listing {:?}: {}", path, self.directory, e);
                return false;
            }
        };
        match &self.filter {
            Filter::Directories => metadata.is_dir(),
            Filter::Files { extension } => {
                metadata.is_file()
                    && extension.as_deref().map_or(true, |wanted| {
                        path.extension().and_then(|ext| ext.to_str()) == Some(wanted)
                    })
            }
        }
    }
}

impl Iterator for Listing {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read an entry in {:?}: {}", self.directory, e);
                    continue;
                }
            };
            if self.accepts(&entry.path()) {
                return Some(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{FsErrorKind, Result};
    use tempfile::tempdir;

    fn sorted(listing: Listing) -> Vec<String> {
        let mut names: Vec<String> = listing.collect();
        names.sort();
        names
    }

    #[test]
    fn test_list_files_by_extension() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "a")?;
        fs::write(dir.path().join("b.log"), "b")?;
        fs::create_dir(dir.path().join("sub"))?;

        assert_eq!(sorted(list_files(dir.path(), Some("txt"))?), vec!["a.txt"]);
        assert_eq!(sorted(list_files(dir.path(), Some(".log"))?), vec!["b.log"]);
        assert_eq!(
            sorted(list_files(dir.path(), None)?),
            vec!["a.txt", "b.log"]
        );
        assert_eq!(
            sorted(list_files(dir.path(), Some(""))?),
            vec!["a.txt", "b.log"]
        );
        Ok(())
    }

    #[test]
    fn test_extension_match_is_exact_and_case_sensitive() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("upper.TXT"), "")?;
        fs::write(dir.path().join("archive.txt.gz"), "")?;
        fs::write(dir.path().join(".txt"), "")?;
        fs::write(dir.path().join("plain.txt"), "")?;

        assert_eq!(sorted(list_files(dir.path(), Some("txt"))?), vec!["plain.txt"]);
        Ok(())
    }

    #[test]
    fn test_list_subdirectories() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("one"))?;
        fs::create_dir_all(dir.path().join("two/nested"))?;
        fs::write(dir.path().join("file.txt"), "")?;

        assert_eq!(sorted(list_subdirectories(dir.path())?), vec!["one", "two"]);
        Ok(())
    }

    #[test]
    fn test_listing_is_single_pass() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("only.txt"), "")?;

        let mut listing = list_files(dir.path(), None)?;
        assert_eq!(listing.next().as_deref(), Some("only.txt"));
        assert_eq!(listing.next(), None);
        assert_eq!(listing.next(), None);
        Ok(())
    }

    #[test]
    fn test_missing_directory() -> Result<()> {
        let dir = tempdir()?;
        let err = list_files(dir.path().join("absent"), None).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("real.txt"), "")?;
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("broken.txt"))?;

        assert_eq!(sorted(list_files(dir.path(), Some("txt"))?), vec!["real.txt"]);
        Ok(())
    }
}
