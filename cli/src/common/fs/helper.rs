//! # lemonutils File Helper Facade
//!
//! File: cli/src/common/fs/helper.rs
//!
//! ## Overview
//!
//! [`FileHelper`] bundles every filesystem helper behind one value that knows
//! how to report failures and which [`WritePolicy`] to apply. Each method runs
//! the corresponding free function from the sibling modules, reports an error
//! on the diagnostic channel if one occurred, and returns the result unchanged.
//!
//! [`Lenient`] (from [`FileHelper::lenient`]) offers the same operations for
//! callers that never want to handle errors: failures are still reported, but
//! come back as `None`, `false` or an empty list.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lemonutils::common::fs::FileHelper;
//!
//! # async fn run_example() -> lemonutils::core::error::FsResult<()> {
//! let helper = FileHelper::new();
//! helper.write("notes.txt", "remember the milk")?;
//! let archived = helper.move_directory("old-project", "archive").await?;
//!
//! // Fire-and-report style: failures are logged, never returned.
//! if let Some(text) = helper.lenient().read("maybe-missing.txt") {
//!     println!("{text}");
//! }
//! # let _ = archived;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::copy::{self, CopySummary};
use crate::common::fs::io::{self, WritePolicy};
use crate::common::fs::listing::{self, Listing};
use crate::common::fs::report::{Diagnostics, Operation};
use crate::common::fs::{access, directory, size};
use crate::core::config::Config;
use crate::core::error::FsResult;
use std::path::{Path, PathBuf};

/// Reporting front end over the filesystem helpers.
#[derive(Debug, Clone, Default)]
pub struct FileHelper {
    diagnostics: Diagnostics,
    write_policy: WritePolicy,
}

impl FileHelper {
    /// Default helper: reporting on, `write` may create new files.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let write_policy = if config.write.allows_create() {
            WritePolicy::AllowCreate
        } else {
            WritePolicy::ExistingOnly
        };
        Self {
            diagnostics: Diagnostics::from_config(&config.diagnostics),
            write_policy,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// Swallow-and-report view of this helper.
    pub fn lenient(&self) -> Lenient<'_> {
        Lenient { helper: self }
    }

    fn observe<T>(&self, operation: Operation, result: FsResult<T>) -> FsResult<T> {
        if let Err(err) = &result {
            self.diagnostics.report(operation, err);
        }
        result
    }

    pub fn read(&self, path: impl AsRef<Path>) -> FsResult<String> {
        self.observe(Operation::Read, io::read_file(path))
    }

    pub fn write(&self, path: impl AsRef<Path>, content: &str) -> FsResult<()> {
        self.observe(
            Operation::Write,
            io::write_file(path, content, self.write_policy),
        )
    }

    pub fn path_is_accessible(&self, path: impl AsRef<Path>) -> bool {
        access::path_is_accessible(path)
    }

    pub fn path_exists(&self, path: impl AsRef<Path>) -> bool {
        access::path_exists(path)
    }

    pub fn list_files(
        &self,
        directory: impl AsRef<Path>,
        extension: Option<&str>,
    ) -> FsResult<Listing> {
        self.observe(
            Operation::ListFiles,
            listing::list_files(directory, extension),
        )
    }

    pub fn list_subdirectories(&self, directory: impl AsRef<Path>) -> FsResult<Listing> {
        self.observe(
            Operation::ListSubdirectories,
            listing::list_subdirectories(directory),
        )
    }

    /// Moves `source` into `destination_parent`; resolves once the rename is done.
    pub async fn move_directory(
        &self,
        source: impl AsRef<Path>,
        destination_parent: impl AsRef<Path>,
    ) -> FsResult<PathBuf> {
        let result = directory::move_directory(source, destination_parent).await;
        self.observe(Operation::MoveDirectory, result)
    }

    /// Renames `source` to `new_name` next to it; resolves once the rename is done.
    pub async fn rename_directory(
        &self,
        source: impl AsRef<Path>,
        new_name: &str,
    ) -> FsResult<PathBuf> {
        let result = directory::rename_directory(source, new_name).await;
        self.observe(Operation::RenameDirectory, result)
    }

    pub fn delete_directory(&self, path: impl AsRef<Path>) -> FsResult<()> {
        self.observe(
            Operation::DeleteDirectory,
            directory::delete_directory(path),
        )
    }

    pub fn create_file(&self, path: impl AsRef<Path>) -> FsResult<()> {
        self.observe(Operation::CreateFile, io::create_file(path))
    }

    pub fn create_directory(&self, path: impl AsRef<Path>) -> FsResult<()> {
        self.observe(
            Operation::CreateDirectory,
            directory::create_directory(path),
        )
    }

    pub fn copy_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> FsResult<u64> {
        self.observe(Operation::CopyFile, copy::copy_file(source, destination))
    }

    pub fn copy_directory_tree(
        &self,
        source: impl AsRef<Path>,
        destination_parent: impl AsRef<Path>,
    ) -> FsResult<CopySummary> {
        self.observe(
            Operation::CopyDirectory,
            copy::copy_directory_tree(source, destination_parent),
        )
    }

    pub fn calculate_size(&self, path: impl AsRef<Path>) -> FsResult<u64> {
        self.observe(Operation::CalculateSize, size::calculate_size(path))
    }
}

/// [`FileHelper`] operations that report failures and then discard them.
#[derive(Debug, Clone, Copy)]
pub struct Lenient<'a> {
    helper: &'a FileHelper,
}

impl Lenient<'_> {
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.helper.read(path).ok()
    }

    /// `true` if the content was written.
    pub fn write(&self, path: impl AsRef<Path>, content: &str) -> bool {
        self.helper.write(path, content).is_ok()
    }

    /// Matching file names, or an empty list if the directory cannot be read.
    pub fn list_files(&self, directory: impl AsRef<Path>, extension: Option<&str>) -> Vec<String> {
        self.helper
            .list_files(directory, extension)
            .map(Iterator::collect)
            .unwrap_or_default()
    }

    pub fn list_subdirectories(&self, directory: impl AsRef<Path>) -> Vec<String> {
        self.helper
            .list_subdirectories(directory)
            .map(Iterator::collect)
            .unwrap_or_default()
    }

    pub async fn move_directory(
        &self,
        source: impl AsRef<Path>,
        destination_parent: impl AsRef<Path>,
    ) -> Option<PathBuf> {
        self.helper
            .move_directory(source, destination_parent)
            .await
            .ok()
    }

    pub async fn rename_directory(
        &self,
        source: impl AsRef<Path>,
        new_name: &str,
    ) -> Option<PathBuf> {
        self.helper.rename_directory(source, new_name).await.ok()
    }

    pub fn delete_directory(&self, path: impl AsRef<Path>) -> bool {
        self.helper.delete_directory(path).is_ok()
    }

    pub fn create_file(&self, path: impl AsRef<Path>) -> bool {
        self.helper.create_file(path).is_ok()
    }

    pub fn create_directory(&self, path: impl AsRef<Path>) -> bool {
        self.helper.create_directory(path).is_ok()
    }

    pub fn copy_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Option<u64> {
        self.helper.copy_file(source, destination).ok()
    }

    pub fn copy_directory_tree(
        &self,
        source: impl AsRef<Path>,
        destination_parent: impl AsRef<Path>,
    ) -> Option<CopySummary> {
        self.helper
            .copy_directory_tree(source, destination_parent)
            .ok()
    }

    pub fn calculate_size(&self, path: impl AsRef<Path>) -> Option<u64> {
        self.helper.calculate_size(path).ok()
    }
}
