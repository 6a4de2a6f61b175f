//! Phase 2: regroup expired scan records by owner.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use indexmap::IndexMap;

use crate::error::ReportError;
use crate::jsonl::write_line;
use crate::records::{CreatorAggregate, ScanRecord, SessionHeader, filename_stamp};

/// Header lines at the top of a scan file (session header + timing).
pub const SCAN_HEADER_LINES: usize = 2;

/// What the rollup produced.
#[derive(Debug)]
pub struct OwnersOutcome {
    /// Where the rollup file was written.
    pub report_path: PathBuf,
    /// Aggregates keyed by uid, in first-seen order.
    pub owners: IndexMap<u32, CreatorAggregate>,
}

/// Read a phase-1 scan file and write the per-owner rollup: a header line,
/// then one aggregate per owner with at least one expired path.
///
/// Non-expired records contribute nothing. Any unparseable record line fails
/// the whole rollup; nothing is written over corrupt input.
pub fn collect_creator_information(
    scan_file: &Path,
    save_file: Option<&Path>,
) -> Result<OwnersOutcome, ReportError> {
    let scrape_time = Utc::now().timestamp();

    let contents = fs::read_to_string(scan_file).map_err(|e| ReportError::io(scan_file, e))?;
    let mut lines = contents.lines().enumerate();

    // line 1 must be a session header; the timing line is skipped unparsed
    match lines.next() {
        Some((_, line)) if serde_json::from_str::<SessionHeader>(line).is_ok() => {}
        _ => {
            return Err(ReportError::InvalidHeader {
                path: scan_file.to_path_buf(),
            });
        }
    }
    for _ in 1..SCAN_HEADER_LINES {
        lines.next();
    }

    let mut owners: IndexMap<u32, CreatorAggregate> = IndexMap::new();
    for (index, line) in lines {
        let record: ScanRecord =
            serde_json::from_str(line).map_err(|e| ReportError::MalformedRecord {
                path: scan_file.to_path_buf(),
                line: index + 1,
                source: e,
            })?;

        if !record.expired {
            continue;
        }
        for creator in &record.creators {
            owners
                .entry(creator.uid)
                .or_insert_with(|| CreatorAggregate::new(creator))
                .record_path(&record.path, record.times);
        }
    }

    let report_path = save_file.map_or_else(
        || PathBuf::from(format!("creator_information_{}.jsonl", filename_stamp(scrape_time))),
        Path::to_path_buf,
    );

    let file = File::create(&report_path).map_err(|e| ReportError::io(&report_path, e))?;
    let mut writer = BufWriter::new(file);
    let write_err = |e| ReportError::io(&report_path, e);

    write_line(&mut writer, &SessionHeader::new(scrape_time)).map_err(write_err)?;
    for aggregate in owners.values() {
        write_line(&mut writer, aggregate).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    tracing::info!(
        report = %report_path.display(),
        owners = owners.len(),
        "owner rollup complete"
    );

    Ok(OwnersOutcome {
        report_path,
        owners,
    })
}
