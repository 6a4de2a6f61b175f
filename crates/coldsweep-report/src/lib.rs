//! Persisted reports for coldsweep.
//!
//! Two line-delimited JSON files, produced in two phases:
//!
//! 1. [`collect_file_information`] walks the configured root and writes the
//!    scan file: a session header line, a timing line, then one
//!    [`ScanRecord`] per top-level entry.
//! 2. [`collect_creator_information`] reads a scan file back and writes the
//!    rollup: one [`CreatorAggregate`] per owner with at least one expired
//!    path.
//!
//! # Example
//!
//! ```rust,no_run
//! use coldsweep_core::{CancelToken, ExpiryConfig};
//! use coldsweep_report::{collect_creator_information, collect_file_information};
//!
//! let config = ExpiryConfig::new("/srv/share");
//! let scan = collect_file_information(&config, None, CancelToken::new()).unwrap();
//! let rollup = collect_creator_information(&scan.report_path, None).unwrap();
//!
//! println!("{} owners hold expired data", rollup.owners.len());
//! ```

mod error;
mod jsonl;
mod owners;
mod records;
mod session;

pub use error::ReportError;
pub use owners::{OwnersOutcome, SCAN_HEADER_LINES, collect_creator_information};
pub use records::{CreatorAggregate, ScanRecord, SessionHeader, SessionTiming};
pub use session::{ScanOutcome, collect_file_information};

// Re-export core types for convenience
pub use coldsweep_core::{CancelToken, ExpiryConfig, FileTimes, Identity, ScanError};
