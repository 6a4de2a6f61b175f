//! Error type for the reporting pipeline.

use std::path::PathBuf;

use thiserror::Error;

use coldsweep_core::ScanError;

/// Errors raised while producing or consuming report files.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A classification failure that could not be skipped.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// I/O failure reading or writing a report file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan file's header line is missing or unparseable.
    #[error("Invalid report header in {path}")]
    InvalidHeader { path: PathBuf },

    /// A record line failed to parse. The whole rollup fails rather than
    /// aggregating over corrupt input.
    #[error("Malformed record at {path}:{line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// Attach path context to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
