//! Quarantine workflow for expired paths.
//!
//! Deletion on a shared filesystem goes through a holding area rather than
//! straight to `unlink`: expired entries are moved into a uniquely named,
//! creator-only directory, then the directory is removed as a unit. A move
//! that fails leaves the entry untouched in place.
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! let expired = vec![PathBuf::from("/srv/share/scratch")];
//! let summary = coldsweep_ops::sweep(&expired, "/srv/share".as_ref()).unwrap();
//! println!("removed {} entries", summary.moved);
//! ```

mod error;
mod holding;
mod sweep;

pub use error::SweepError;
pub use holding::{collision_free_destination, create_holding_area, purge_holding_area};
pub use sweep::{SweepFailure, SweepSummary, quarantine_paths, sweep};
