//! Error types for the quarantine workflow.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a sweep.
///
/// Per-path move failures are not errors at this level; they are collected
/// in the sweep summary so one immovable entry cannot strand the batch.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The holding area could not be created or locked down. Nothing has
    /// been moved when this is returned.
    #[error("Failed to create holding area under {base}: {source}")]
    HoldingArea {
        base: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The holding area could not be removed after the moves.
    #[error("Failed to remove holding area {path}: {source}")]
    Purge {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
