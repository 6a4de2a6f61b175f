//! Phase 1: scan a root and persist one record per top-level entry.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;

use coldsweep_core::{CancelToken, ExpiryConfig, ScanError};
use coldsweep_scan::Classifier;

use crate::error::ReportError;
use crate::jsonl::write_line;
use crate::records::{ScanRecord, SessionHeader, SessionTiming, filename_stamp};

/// What a scan produced: the file it wrote plus the records themselves,
/// so callers (rollup, sweep) don't have to re-read the file.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Where the scan file was written.
    pub report_path: PathBuf,
    /// One record per top-level entry, in directory-listing order.
    pub records: Vec<ScanRecord>,
    /// Unix seconds at the start of the scrape.
    pub scrape_time: i64,
    /// Top-level entries skipped because their metadata could not be read.
    pub skipped: usize,
}

impl ScanOutcome {
    /// Paths of every expired top-level entry.
    pub fn expired_paths(&self) -> Vec<PathBuf> {
        self.records
            .iter()
            .filter(|r| r.expired)
            .map(|r| r.path.clone())
            .collect()
    }
}

/// Classify every immediate child of the configured root and write the scan
/// file: header line, timing line, then one JSON record per child.
///
/// The root itself is not classified. A missing or non-directory root fails
/// fast with no file written. Children whose metadata cannot be read are
/// skipped and logged; cancellation aborts the scan with no file written.
pub fn collect_file_information(
    config: &ExpiryConfig,
    save_file: Option<&Path>,
    cancel: CancelToken,
) -> Result<ScanOutcome, ReportError> {
    let start = Instant::now();
    let scrape_time = Utc::now().timestamp();

    let root_metadata =
        fs::metadata(&config.root).map_err(|e| ScanError::io(&config.root, e))?;
    if !root_metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: config.root.clone(),
        }
        .into());
    }

    let threshold = config.threshold_at(scrape_time);
    let mut classifier = Classifier::with_cancel(config, cancel.clone());
    let mut records = Vec::new();
    let mut skipped = 0usize;

    let entries = fs::read_dir(&config.root).map_err(|e| ScanError::io(&config.root, e))?;
    for entry in entries {
        if cancel.is_cancelled() {
            return Err(ScanError::Interrupted.into());
        }
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %config.root.display(), error = %err, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };
        let path = entry.path();

        match classifier.classify(&path, threshold) {
            Ok(result) => records.push(ScanRecord::new(path, result)),
            Err(ScanError::Interrupted) => return Err(ScanError::Interrupted.into()),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping top-level entry");
                skipped += 1;
            }
        }
    }

    let report_path = save_file.map_or_else(
        || PathBuf::from(format!("file_information_{}.jsonl", filename_stamp(scrape_time))),
        Path::to_path_buf,
    );

    let file = File::create(&report_path).map_err(|e| ReportError::io(&report_path, e))?;
    let mut writer = BufWriter::new(file);
    let write_err = |e| ReportError::io(&report_path, e);

    write_line(&mut writer, &SessionHeader::new(scrape_time)).map_err(write_err)?;
    write_line(
        &mut writer,
        &SessionTiming {
            scrape_duration_secs: start.elapsed().as_secs_f64(),
        },
    )
    .map_err(write_err)?;
    for record in &records {
        write_line(&mut writer, record).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    tracing::info!(
        report = %report_path.display(),
        entries = records.len(),
        expired = records.iter().filter(|r| r.expired).count(),
        skipped,
        "scan complete"
    );

    Ok(ScanOutcome {
        report_path,
        records,
        scrape_time,
        skipped,
    })
}
