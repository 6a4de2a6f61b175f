//! Persisted record shapes for both report files.

use std::path::{Path, PathBuf};

use chrono::DateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use coldsweep_core::{ExpiryResult, FileTimes, Identity};

/// First line of every report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHeader {
    /// Unix seconds at the start of the scrape.
    pub scrape_time: i64,
    /// Same instant, human-readable.
    pub scrape_time_datetime: String,
}

impl SessionHeader {
    /// Header for a scrape that started at `scrape_time`.
    pub fn new(scrape_time: i64) -> Self {
        Self {
            scrape_time,
            scrape_time_datetime: format_datetime(scrape_time),
        }
    }
}

/// Second line of the scan file: wall-clock cost of the walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTiming {
    pub scrape_duration_secs: f64,
}

/// One line per top-level entry of the scanned root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub path: PathBuf,
    pub creators: Vec<Identity>,
    pub expired: bool,
    #[serde(flatten)]
    pub times: FileTimes,
}

impl ScanRecord {
    /// Build a record from a classified path.
    ///
    /// Creators are ordered by uid so an unchanged tree always serializes
    /// to the same bytes.
    pub fn new(path: PathBuf, result: ExpiryResult) -> Self {
        let mut creators: Vec<Identity> = result.creators.into_iter().collect();
        creators.sort_by_key(|c| c.uid);
        Self {
            path,
            creators,
            expired: result.expired,
            times: result.times,
        }
    }
}

/// One line per owner in the rollup file: every expired path attributed to
/// them, with the timestamps the scan observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorAggregate {
    pub username: String,
    pub uid: u32,
    pub gid: u32,
    pub paths: IndexMap<String, FileTimes>,
}

impl CreatorAggregate {
    /// Start an aggregate for one owner.
    pub fn new(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            uid: identity.uid,
            gid: identity.gid,
            paths: IndexMap::new(),
        }
    }

    /// Attribute one expired path to this owner.
    pub fn record_path(&mut self, path: &Path, times: FileTimes) {
        self.paths
            .insert(path.to_string_lossy().into_owned(), times);
    }
}

/// Render unix seconds for headers and log lines.
pub(crate) fn format_datetime(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Timestamp fragment used in default report filenames.
pub(crate) fn filename_stamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d_%H%M%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}
