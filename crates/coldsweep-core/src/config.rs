//! Scan configuration types.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Seconds in a day, for converting the expiry window.
pub const SECS_PER_DAY: i64 = 86_400;

/// What a directory fold does once one fresh child has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FoldPolicy {
    /// Keep visiting the remaining children so the result carries the
    /// complete creator set and true most-recent-activity timestamps.
    #[default]
    Exhaustive,
    /// Return as soon as the expiry flag flips to false. Creators and
    /// timestamps then only cover the children visited up to that point.
    ShortCircuit,
}

/// Directories that are skipped rather than descended into.
///
/// Matches on `parent_basename/basename`, e.g. `lib/python3.10`. These are
/// large generated or vendored trees assumed never meaningfully used by a
/// human after creation; their contents are judged by the directory's own
/// timestamps alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownDirs(HashSet<String>);

impl KnownDirs {
    /// Build from explicit `parent/base` entries.
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(entries.into_iter().map(Into::into).collect())
    }

    /// An empty table (descend everywhere).
    pub fn none() -> Self {
        Self(HashSet::new())
    }

    /// Whether `path` matches the table.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(base) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        else {
            return false;
        };
        self.0.contains(&format!("{parent}/{base}"))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KnownDirs {
    fn default() -> Self {
        Self::new([
            "ros/humble",
            "lib/python3.10",
            "lib/python3.9",
            "lib/python3.8",
            "lib/python3.7",
            "lib64/python3.10",
            "lib64/python3.9",
            "lib64/python3.8",
            "lib64/python3.7",
        ])
    }
}

/// Configuration for an expiry scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ExpiryConfig {
    /// Root directory whose immediate children are scanned.
    pub root: PathBuf,

    /// Days without activity before an entry counts as expired.
    #[builder(default = "30")]
    #[serde(default = "default_days")]
    pub days_for_expiry: u32,

    /// Directories that are never descended into.
    #[builder(default)]
    #[serde(default)]
    pub known_dirs: KnownDirs,

    /// Behavior once a fresh child has been seen in a directory fold.
    #[builder(default)]
    #[serde(default)]
    pub fold_policy: FoldPolicy,
}

fn default_days() -> u32 {
    30
}

impl ExpiryConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.root {
            Some(root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl ExpiryConfig {
    /// Create a new config builder.
    pub fn builder() -> ExpiryConfigBuilder {
        ExpiryConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            days_for_expiry: 30,
            known_dirs: KnownDirs::default(),
            fold_policy: FoldPolicy::default(),
        }
    }

    /// Absolute cutoff for a scan that started at `scrape_time` (unix
    /// seconds). Computed once per scan so every comparison uses the same
    /// stable threshold.
    pub fn threshold_at(&self, scrape_time: i64) -> i64 {
        scrape_time - i64::from(self.days_for_expiry) * SECS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ExpiryConfig::builder()
            .root("/srv/share")
            .days_for_expiry(10u32)
            .fold_policy(FoldPolicy::ShortCircuit)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/srv/share"));
        assert_eq!(config.days_for_expiry, 10);
        assert_eq!(config.fold_policy, FoldPolicy::ShortCircuit);
    }

    #[test]
    fn test_builder_rejects_missing_root() {
        assert!(ExpiryConfig::builder().build().is_err());
        assert!(ExpiryConfig::builder().root("").build().is_err());
    }

    #[test]
    fn test_threshold_at() {
        let config = ExpiryConfig::builder()
            .root("/srv/share")
            .days_for_expiry(10u32)
            .build()
            .unwrap();
        assert_eq!(config.threshold_at(1_000_000), 1_000_000 - 10 * SECS_PER_DAY);
    }

    #[test]
    fn test_known_dirs_matches_parent_and_base() {
        let dirs = KnownDirs::default();
        assert!(dirs.matches(Path::new("/opt/ros/humble")));
        assert!(dirs.matches(Path::new("/home/a/.venv/lib/python3.10")));
        assert!(!dirs.matches(Path::new("/home/a/python3.10")));
        assert!(!dirs.matches(Path::new("/opt/ros/noetic")));
    }

    #[test]
    fn test_known_dirs_substitutable() {
        let dirs = KnownDirs::new(["cache/artifacts"]);
        assert!(dirs.matches(Path::new("/data/cache/artifacts")));
        assert!(!dirs.matches(Path::new("/opt/ros/humble")));
        assert!(KnownDirs::none().is_empty());
    }
}
