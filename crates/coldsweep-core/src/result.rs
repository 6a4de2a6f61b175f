//! Per-path classification result and the fold that aggregates it.

use std::collections::HashSet;

use crate::identity::Identity;
use crate::times::FileTimes;

/// The outcome of classifying one path.
///
/// For a leaf the timestamps are the node's own stat values. For a directory
/// they are the element-wise maximum over the directory itself and every
/// visited descendant, and `creators` is the union of every owner seen
/// regardless of whether individual descendants were expired.
#[derive(Debug, Clone)]
pub struct ExpiryResult {
    /// Whole-subtree expiry flag. For a directory: the directory's own
    /// timestamps are expired AND every visited child reported expired.
    pub expired: bool,
    /// Every owner seen in the subtree.
    pub creators: HashSet<Identity>,
    /// Most recent activity anywhere in the visited subtree.
    pub times: FileTimes,
}

impl ExpiryResult {
    /// Result for a single node with one owner.
    pub fn leaf(expired: bool, owner: Identity, times: FileTimes) -> Self {
        let mut creators = HashSet::with_capacity(1);
        creators.insert(owner);
        Self {
            expired,
            creators,
            times,
        }
    }

    /// Merge a child's result into this one.
    ///
    /// Commutative and associative over children: AND the flag, union the
    /// owners, take element-wise max of the timestamps. Children produce
    /// immutable results that are merged here rather than threading a shared
    /// accumulator through the recursion.
    pub fn fold_child(&mut self, child: ExpiryResult) {
        self.expired = self.expired && child.expired;
        self.creators.extend(child.creators);
        self.times = self.times.max(child.times);
    }
}
