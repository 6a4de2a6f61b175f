//! Access/change/modification timestamp triple.

use serde::{Deserialize, Serialize};

/// The three stat timestamps of a filesystem entry, as unix seconds.
///
/// For a directory these are folded upward: the triple reports the most
/// recent activity anywhere under the subtree that was actually visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTimes {
    /// Last access.
    pub atime: i64,
    /// Last metadata change.
    pub ctime: i64,
    /// Last content modification.
    pub mtime: i64,
}

impl FileTimes {
    /// Create a timestamp triple.
    pub fn new(atime: i64, ctime: i64, mtime: i64) -> Self {
        Self {
            atime,
            ctime,
            mtime,
        }
    }

    /// Read the triple from lstat metadata (the entry's own timestamps,
    /// never the symlink target's).
    #[cfg(unix)]
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        Self {
            atime: metadata.atime(),
            ctime: metadata.ctime(),
            mtime: metadata.mtime(),
        }
    }

    /// True when all three timestamps are strictly earlier than `threshold`.
    ///
    /// All three must agree: atime is unreliable on relatime/noatime mounts,
    /// so ctime and mtime act as corroborating signals, and a fresh ctime
    /// (permission fix, rename) keeps a path alive on its own.
    pub fn all_before(&self, threshold: i64) -> bool {
        self.atime < threshold && self.ctime < threshold && self.mtime < threshold
    }

    /// Element-wise maximum of two triples.
    pub fn max(self, other: Self) -> Self {
        Self {
            atime: self.atime.max(other.atime),
            ctime: self.ctime.max(other.ctime),
            mtime: self.mtime.max(other.mtime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_before_is_strict() {
        let times = FileTimes::new(100, 100, 100);
        assert!(times.all_before(101));
        assert!(!times.all_before(100));
        assert!(!times.all_before(99));
    }

    #[test]
    fn test_one_fresh_timestamp_blocks_expiry() {
        // cold content, recently read
        assert!(!FileTimes::new(500, 10, 10).all_before(100));
        // cold content, fresh metadata
        assert!(!FileTimes::new(10, 500, 10).all_before(100));
        // recently modified
        assert!(!FileTimes::new(10, 10, 500).all_before(100));
    }

    #[test]
    fn test_max_is_element_wise() {
        let a = FileTimes::new(1, 20, 3);
        let b = FileTimes::new(10, 2, 30);
        assert_eq!(a.max(b), FileTimes::new(10, 20, 30));
    }
}
