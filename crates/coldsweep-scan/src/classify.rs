//! Hierarchical expiry classification.

use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use coldsweep_core::{
    CancelToken, ExpiryConfig, ExpiryResult, FileTimes, FoldPolicy, ScanError,
};

use crate::owner::OwnerResolver;

/// Classifies paths as expired or not, folding directory results upward.
///
/// One classifier drives one scan: it carries the injected ignore table and
/// fold policy from the config, a per-scan owner cache, and a cancellation
/// token checked between child visits. The walk is a synchronous depth-first
/// recursion; children produce immutable results merged at the parent, so
/// sibling subtrees could be fanned out in parallel without changing any
/// fold outcome.
pub struct Classifier<'a> {
    config: &'a ExpiryConfig,
    resolver: OwnerResolver,
    cancel: CancelToken,
}

impl<'a> Classifier<'a> {
    /// Create a classifier for one scan.
    pub fn new(config: &'a ExpiryConfig) -> Self {
        Self::with_cancel(config, CancelToken::new())
    }

    /// Create a classifier that honors an externally held cancellation token.
    pub fn with_cancel(config: &'a ExpiryConfig, cancel: CancelToken) -> Self {
        Self {
            config,
            resolver: OwnerResolver::new(),
            cancel,
        }
    }

    /// Classify one path against an absolute cutoff timestamp.
    ///
    /// Dispatches on the path's own file-type bits (lstat, so a symlink is
    /// seen as a symlink, and ownership is the link's, not the target's):
    ///
    /// - regular files, character and block devices, FIFOs, and sockets are
    ///   evaluated as leaves;
    /// - directories recurse through [`Classifier::classify`] for each child
    ///   and fold the results;
    /// - symlinks are evaluated over their own lstat timestamps and never
    ///   dereferenced, which keeps cyclic and self-referential links from
    ///   recursing;
    /// - anything else is treated as a non-expired leaf.
    ///
    /// A failed metadata read returns [`ScanError::PathUnavailable`]; parent
    /// folds skip that child rather than aborting the walk.
    pub fn classify(&mut self, path: &Path, threshold: i64) -> Result<ExpiryResult, ScanError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ScanError::io(path, e))?;
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            return self.evaluate_directory(path, &metadata, threshold);
        }

        let times = FileTimes::from_metadata(&metadata);
        let owner = self.resolver.resolve(metadata.uid(), metadata.gid());

        if file_type.is_file() || file_type.is_symlink() || is_special(&file_type) {
            return Ok(ExpiryResult::leaf(times.all_before(threshold), owner, times));
        }

        // Unknown file-type bits: recoverable, counts as a non-expired leaf.
        tracing::debug!(path = %path.display(), "unknown file type, treating as non-expired");
        Ok(ExpiryResult::leaf(false, owner, times))
    }

    /// Classify a directory by folding its children into its own result.
    fn evaluate_directory(
        &mut self,
        path: &Path,
        metadata: &fs::Metadata,
        threshold: i64,
    ) -> Result<ExpiryResult, ScanError> {
        let times = FileTimes::from_metadata(metadata);
        let owner = self.resolver.resolve(metadata.uid(), metadata.gid());
        let mut result = ExpiryResult::leaf(times.all_before(threshold), owner, times);

        // Large generated trees are judged by their own timestamps alone.
        if self.config.known_dirs.matches(path) {
            tracing::debug!(path = %path.display(), "known directory, not descending");
            return Ok(result);
        }

        let short_circuit = self.config.fold_policy == FoldPolicy::ShortCircuit;
        if short_circuit && !result.expired {
            return Ok(result);
        }

        let entries = fs::read_dir(path).map_err(|e| ScanError::io(path, e))?;

        for entry in entries {
            if self.cancel.is_cancelled() {
                return Err(ScanError::Interrupted);
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            let child_path = entry.path();

            // Symlinks inside a listing are skipped entirely: they contribute
            // neither expiry flag, creators, nor timestamps.
            match entry.file_type() {
                Ok(file_type) if file_type.is_symlink() => continue,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(path = %child_path.display(), error = %err, "child vanished mid-walk, skipping");
                    continue;
                }
            }

            match self.classify(&child_path, threshold) {
                Ok(child) => {
                    result.fold_child(child);
                    if short_circuit && !result.expired {
                        return Ok(result);
                    }
                }
                Err(ScanError::Interrupted) => return Err(ScanError::Interrupted),
                Err(err) => {
                    tracing::warn!(path = %child_path.display(), error = %err, "skipping child");
                }
            }
        }

        Ok(result)
    }
}

/// Character/block devices, FIFOs, and sockets evaluate as leaves.
#[cfg(unix)]
fn is_special(file_type: &fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_char_device()
        || file_type.is_block_device()
        || file_type.is_fifo()
        || file_type.is_socket()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_unavailable() {
        let config = ExpiryConfig::new("/nonexistent");
        let mut classifier = Classifier::new(&config);

        let err = classifier
            .classify(Path::new("/nonexistent/definitely/not/here"), 0)
            .unwrap_err();
        assert!(matches!(err, ScanError::PathUnavailable { .. }));
    }

    #[test]
    fn test_cancelled_walk_is_interrupted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let config = ExpiryConfig::new(dir.path());
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut classifier = Classifier::with_cancel(&config, cancel);

        let err = classifier.classify(dir.path(), 0).unwrap_err();
        assert!(matches!(err, ScanError::Interrupted));
    }
}
