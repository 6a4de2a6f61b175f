//! Holding-area lifecycle and collision-safe naming.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::SweepError;

/// Create a uniquely named, permission-restricted holding area under `base`.
///
/// The name is the current timestamp, with a numeric suffix appended until
/// it is free. The directory is restricted to its creator (mode 0o700); if
/// that restriction cannot be applied the directory is removed again and
/// the sweep aborts before anything has moved.
pub fn create_holding_area(base: &Path) -> Result<PathBuf, SweepError> {
    let holding_err = |source| SweepError::HoldingArea {
        base: base.to_path_buf(),
        source,
    };

    let stamp = Local::now().format("%Y-%m-%d_%H%M%S").to_string();
    let mut candidate = base.join(&stamp);
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = base.join(format!("{stamp}_{counter}"));
        counter += 1;
    }

    fs::create_dir_all(&candidate).map_err(holding_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(&candidate, fs::Permissions::from_mode(0o700)) {
            let _ = fs::remove_dir(&candidate);
            return Err(holding_err(err));
        }
    }

    tracing::debug!(holding = %candidate.display(), "holding area created");
    Ok(candidate)
}

/// Remove a holding area and everything quarantined into it.
pub fn purge_holding_area(path: &Path) -> Result<(), SweepError> {
    fs::remove_dir_all(path).map_err(|source| SweepError::Purge {
        path: path.to_path_buf(),
        source,
    })
}

/// Destination for `source` inside the holding area, renamed if its
/// basename is already taken.
pub fn collision_free_destination(holding: &Path, source: &Path) -> PathBuf {
    let name = source.file_name().unwrap_or("unnamed".as_ref());
    let destination = holding.join(name);
    if !destination.exists() {
        return destination;
    }
    auto_rename_path(&destination)
}

/// Find a free ` (n)` variant of `path`, falling back to a timestamp suffix.
fn auto_rename_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new(""));
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let extension = path.extension().and_then(|e| e.to_str());

    for i in 1..1000 {
        let new_name = if let Some(ext) = extension {
            format!("{} ({}).{}", stem, i, ext)
        } else {
            format!("{} ({})", stem, i)
        };

        let new_path = parent.join(&new_name);
        if !new_path.exists() {
            return new_path;
        }
    }

    // Fallback: use timestamp
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let new_name = if let Some(ext) = extension {
        format!("{}_{}.{}", stem, timestamp, ext)
    } else {
        format!("{}_{}", stem, timestamp)
    };

    parent.join(&new_name)
}
