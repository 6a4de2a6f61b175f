//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while classifying a tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The path could not be read (vanished mid-walk or access denied).
    /// Parents treat this as "skip this child".
    #[error("Path unavailable: {path}: {source}")]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scan root does not exist or is not a directory.
    #[error("Scan root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Scan was cancelled.
    #[error("Scan interrupted")]
    Interrupted,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    ///
    /// Vanished paths and permission failures become [`ScanError::PathUnavailable`]
    /// so aggregating callers can skip that single child.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                Self::PathUnavailable { path, source }
            }
            _ => Self::Io { path, source },
        }
    }

    /// Whether a parent directory fold should skip this child and continue.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::PathUnavailable { .. })
    }
}
