//! Batch quarantine of expired paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SweepError;
use crate::holding::{collision_free_destination, create_holding_area, purge_holding_area};

/// A path that could not be quarantined.
#[derive(Debug)]
pub struct SweepFailure {
    /// The path that failed to move.
    pub path: PathBuf,
    /// What went wrong.
    pub message: String,
}

impl SweepFailure {
    fn new(path: PathBuf, err: &std::io::Error) -> Self {
        Self {
            path,
            message: err.to_string(),
        }
    }
}

/// What a sweep did.
#[derive(Debug)]
pub struct SweepSummary {
    /// The holding area the batch moved through.
    pub holding_area: PathBuf,
    /// Entries moved into the holding area.
    pub moved: usize,
    /// Entries that could not be moved and were left in place.
    pub failures: Vec<SweepFailure>,
}

impl SweepSummary {
    /// Whether every entry made it into the holding area.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Move each path into the holding area with collision-safe renaming.
///
/// A failed move leaves that entry where it was and is reported in the
/// returned failures; it never stops the rest of the batch.
pub fn quarantine_paths(paths: &[PathBuf], holding: &Path) -> (usize, Vec<SweepFailure>) {
    let mut moved = 0usize;
    let mut failures = Vec::new();

    for source in paths {
        let destination = collision_free_destination(holding, source);
        match fs::rename(source, &destination) {
            Ok(()) => {
                tracing::debug!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "quarantined"
                );
                moved += 1;
            }
            Err(err) => {
                tracing::warn!(path = %source.display(), error = %err, "could not quarantine");
                failures.push(SweepFailure::new(source.clone(), &err));
            }
        }
    }

    (moved, failures)
}

/// Quarantine-and-delete: create a holding area under `base`, move the given
/// paths into it, then remove the holding area.
///
/// If the holding area cannot be created the sweep aborts before anything
/// has moved.
pub fn sweep(paths: &[PathBuf], base: &Path) -> Result<SweepSummary, SweepError> {
    let holding_area = create_holding_area(base)?;
    let (moved, failures) = quarantine_paths(paths, &holding_area);
    purge_holding_area(&holding_area)?;

    tracing::info!(moved, failed = failures.len(), "sweep complete");
    Ok(SweepSummary {
        holding_area,
        moved,
        failures,
    })
}
