//! Expiry classification engine for coldsweep.
//!
//! This crate decides whether filesystem entries are expired (cold long
//! enough to be deletion candidates) and attributes them to their owners.
//!
//! # Overview
//!
//! [`Classifier`] walks a tree depth-first and produces one
//! [`ExpiryResult`] per path:
//!
//! - a leaf is expired when all three of its access, change, and
//!   modification timestamps fall strictly before the cutoff;
//! - a directory is expired when its own timestamps are expired **and**
//!   every visited child is; its timestamps and owner set fold upward from
//!   the whole subtree;
//! - configured generated trees (`lib/python3.10` and friends) are never
//!   descended into.
//!
//! # Example
//!
//! ```rust,no_run
//! use coldsweep_core::ExpiryConfig;
//! use coldsweep_scan::Classifier;
//!
//! let config = ExpiryConfig::new("/srv/share");
//! let threshold = config.threshold_at(1_700_000_000);
//!
//! let mut classifier = Classifier::new(&config);
//! let result = classifier.classify("/srv/share/scratch".as_ref(), threshold).unwrap();
//!
//! println!("expired: {}, owners: {}", result.expired, result.creators.len());
//! ```

mod classify;
mod owner;

pub use classify::Classifier;
pub use owner::OwnerResolver;

// Re-export core types for convenience
pub use coldsweep_core::{
    CancelToken, ExpiryConfig, ExpiryResult, FileTimes, FoldPolicy, Identity, KnownDirs,
    ScanError,
};
