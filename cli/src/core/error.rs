//! # lemonutils Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout lemonutils. Every
//! filesystem helper returns an [`FsResult`], whose error side is an [`FsError`]
//! carrying the path involved and one of four kinds:
//!
//! - **Not found**: the path does not exist.
//! - **Not accessible**: the path exists but permissions or state prevent the operation.
//! - **Conflict**: the destination already exists where overwriting is disallowed.
//! - **I/O**: any other host failure (disk full, invalid name, ...), with the source attached.
//!
//! ## Architecture
//!
//! - `FsError`: a `thiserror` enum returned by the helper functions in `common::fs`.
//! - `FsErrorKind`: a plain, comparable discriminant for callers that only care about the category.
//! - `Result<T>`: an alias for `anyhow::Result<T>` used by configuration loading and command handlers.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use lemonutils::common::fs::copy;
//! use lemonutils::core::error::FsErrorKind;
//!
//! match copy::copy_file("notes.txt", "backup/notes.txt") {
//!     Ok(bytes) => println!("copied {bytes} bytes"),
//!     Err(e) if e.kind() == FsErrorKind::Conflict => println!("backup already present"),
//!     Err(e) => eprintln!("copy failed: {e}"),
//! }
//! ```
//!
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned by every filesystem helper operation.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("Path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not accessible: {}", path.display())]
    NotAccessible { path: PathBuf },

    #[error("An entry already exists at {}", path.display())]
    Conflict { path: PathBuf },

    #[error("I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Category of an [`FsError`], without the attached path or source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    NotAccessible,
    Conflict,
    Io,
}

impl FsError {
    /// Classifies a raw `std::io::Error` raised while operating on `path`.
    ///
    /// `NotFound`, `PermissionDenied` and `AlreadyExists` become the matching
    /// dedicated variants; every other kind is kept as [`FsError::Io`] with the
    /// original error as its source.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::PermissionDenied => FsError::NotAccessible { path },
            io::ErrorKind::AlreadyExists => FsError::Conflict { path },
            _ => FsError::Io { path, source: err },
        }
    }

    /// Classifies an error raised by `fs_extra`.
    pub fn from_fs_extra(path: impl Into<PathBuf>, err: fs_extra::error::Error) -> Self {
        use fs_extra::error::ErrorKind;

        let path = path.into();
        let message = err.to_string();
        match err.kind {
            ErrorKind::NotFound => FsError::NotFound { path },
            ErrorKind::PermissionDenied => FsError::NotAccessible { path },
            ErrorKind::AlreadyExists => FsError::Conflict { path },
            ErrorKind::Io(source) => FsError::from_io(path, source),
            _ => FsError::Io {
                path,
                source: io::Error::other(message),
            },
        }
    }

    /// Builds an `Io` error for an argument the host would reject (e.g. a
    /// path with no final component).
    pub fn invalid_input(path: impl Into<PathBuf>, message: &str) -> Self {
        FsError::Io {
            path: path.into(),
            source: io::Error::new(io::ErrorKind::InvalidInput, message.to_string()),
        }
    }

    pub fn not_found(path: &Path) -> Self {
        FsError::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn not_accessible(path: &Path) -> Self {
        FsError::NotAccessible {
            path: path.to_path_buf(),
        }
    }

    pub fn conflict(path: &Path) -> Self {
        FsError::Conflict {
            path: path.to_path_buf(),
        }
    }

    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::NotFound { .. } => FsErrorKind::NotFound,
            FsError::NotAccessible { .. } => FsErrorKind::NotAccessible,
            FsError::Conflict { .. } => FsErrorKind::Conflict,
            FsError::Io { .. } => FsErrorKind::Io,
        }
    }

    /// The path the failing operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::NotAccessible { path }
            | FsError::Conflict { path }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Result type of the filesystem helper operations.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Type alias for Result using anyhow::Error, used by configuration loading
/// and the command handlers where context matters more than the error kind.
pub type Result<T> = anyhow::Result<T>;
