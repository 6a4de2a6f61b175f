//! Core types for coldsweep.
//!
//! This crate provides the fundamental data structures used throughout
//! the coldsweep ecosystem: owner identities, timestamp triples, expiry
//! results and the fold that aggregates them, and scan configuration.

mod cancel;
mod config;
mod error;
mod identity;
mod result;
mod times;

pub use cancel::CancelToken;
pub use config::{ExpiryConfig, ExpiryConfigBuilder, FoldPolicy, KnownDirs, SECS_PER_DAY};
pub use error::ScanError;
pub use identity::Identity;
pub use result::ExpiryResult;
pub use times::FileTimes;
