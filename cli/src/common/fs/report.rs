//! # lemonutils Diagnostic Channel
//!
//! File: cli/src/common/fs/report.rs
//!
//! Failed helper operations are reported here before the error is handed back
//! to the caller. A report is a single `tracing` error event carrying the
//! component name, the operation and the underlying error, e.g.
//!
//! ```text
//! ERROR component=lemonutils operation=copy directory: Cannot copy directory: An entry already exists at /tmp/dst/src
//! ```
//!
//! Reporting can be switched off entirely; the error is returned either way.
//!
use crate::core::config::{default_component, DiagnosticsConfig};
use crate::core::error::FsError;
use std::fmt;
use tracing::error;

/// The helper entry point a report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
    CreateFile,
    CreateDirectory,
    DeleteDirectory,
    MoveDirectory,
    RenameDirectory,
    ListFiles,
    ListSubdirectories,
    CopyFile,
    CopyDirectory,
    CalculateSize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::Read => "read file",
            Operation::Write => "write to file",
            Operation::CreateFile => "create file",
            Operation::CreateDirectory => "create directory",
            Operation::DeleteDirectory => "delete directory",
            Operation::MoveDirectory => "move directory",
            Operation::RenameDirectory => "rename directory",
            Operation::ListFiles => "list files",
            Operation::ListSubdirectories => "list subdirectories",
            Operation::CopyFile => "copy file",
            Operation::CopyDirectory => "copy directory",
            Operation::CalculateSize => "calculate file or directory size",
        };
        f.write_str(text)
    }
}

/// Where and whether failures are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    enabled: bool,
    component: String,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            enabled: true,
            component: default_component(),
        }
    }
}

impl Diagnostics {
    /// Reporting enabled, tagged with `component`.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            enabled: true,
            component: component.into(),
        }
    }

    /// Reporting disabled.
    pub fn silent() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        Self {
            enabled: config.is_enabled(),
            component: config.component.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Emits one error event for a failed `operation`, unless disabled.
    pub fn report(&self, operation: Operation, err: &FsError) {
        if !self.enabled {
            return;
        }
        error!(
            component = %self.component,
            operation = %operation,
            "Cannot {}: {}",
            operation,
            err
        );
    }
}

#[cfg(test)]
pub(crate) mod capture {
    //! Collects formatted `tracing` output so tests can assert on reports.
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that writes into the returned buffer.
    pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, captured.contents())
    }
}
