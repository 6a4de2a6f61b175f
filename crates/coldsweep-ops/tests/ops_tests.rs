use std::fs;
use std::path::PathBuf;

use coldsweep_ops::{create_holding_area, purge_holding_area, quarantine_paths, sweep};
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_holding_area_is_creator_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let holding = create_holding_area(temp.path()).unwrap();

    assert!(holding.is_dir());
    let mode = fs::metadata(&holding).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn test_holding_areas_never_collide() {
    let temp = TempDir::new().unwrap();
    let first = create_holding_area(temp.path()).unwrap();
    let second = create_holding_area(temp.path()).unwrap();

    assert_ne!(first, second);
    assert!(first.is_dir());
    assert!(second.is_dir());
}

#[test]
fn test_quarantine_renames_on_basename_collision() {
    let temp = TempDir::new().unwrap();
    let src_a = temp.path().join("a");
    let src_b = temp.path().join("b");
    fs::create_dir_all(&src_a).unwrap();
    fs::create_dir_all(&src_b).unwrap();
    fs::write(src_a.join("run.log"), b"a").unwrap();
    fs::write(src_b.join("run.log"), b"b").unwrap();

    let holding = create_holding_area(temp.path()).unwrap();
    let paths = vec![src_a.join("run.log"), src_b.join("run.log")];
    let (moved, failures) = quarantine_paths(&paths, &holding);

    assert_eq!(moved, 2);
    assert!(failures.is_empty());
    assert!(holding.join("run.log").exists());
    assert!(holding.join("run (1).log").exists());

    purge_holding_area(&holding).unwrap();
    assert!(!holding.exists());
}

#[test]
fn test_missing_source_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let present = temp.path().join("present.txt");
    fs::write(&present, b"x").unwrap();

    let holding = create_holding_area(temp.path()).unwrap();
    let paths = vec![temp.path().join("ghost.txt"), present.clone()];
    let (moved, failures) = quarantine_paths(&paths, &holding);

    assert_eq!(moved, 1);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, temp.path().join("ghost.txt"));
    assert!(!present.exists());
}

#[test]
fn test_sweep_removes_expired_entries() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("share");
    fs::create_dir(&base).unwrap();

    let stale_dir = base.join("scratch");
    fs::create_dir(&stale_dir).unwrap();
    fs::write(stale_dir.join("data.bin"), b"old").unwrap();
    let stale_file = base.join("core.dump");
    fs::write(&stale_file, b"old").unwrap();

    let expired = vec![stale_dir.clone(), stale_file.clone()];
    let summary = sweep(&expired, &base).unwrap();

    assert_eq!(summary.moved, 2);
    assert!(summary.is_clean());
    assert!(!stale_dir.exists());
    assert!(!stale_file.exists());
    assert!(!summary.holding_area.exists());
}

#[test]
fn test_sweep_aborts_when_holding_area_fails() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("not-a-dir");
    fs::write(&base, b"file in the way").unwrap();

    let victim = temp.path().join("victim.txt");
    fs::write(&victim, b"keep me").unwrap();

    let expired = vec![victim.clone()];
    let result = sweep(&expired, &base);

    assert!(result.is_err());
    // nothing moved
    assert!(victim.exists());
}

#[test]
fn test_quarantine_of_empty_batch() {
    let temp = TempDir::new().unwrap();
    let summary = sweep(&Vec::<PathBuf>::new(), temp.path()).unwrap();
    assert_eq!(summary.moved, 0);
    assert!(summary.is_clean());
    assert!(!summary.holding_area.exists());
}
