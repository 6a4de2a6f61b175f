use std::collections::HashSet;
use std::path::Path;

use coldsweep_core::{
    ExpiryConfig, ExpiryResult, FileTimes, FoldPolicy, Identity, KnownDirs, SECS_PER_DAY,
};

#[test]
fn test_identity_set_semantics() {
    let mut creators: HashSet<Identity> = HashSet::new();
    creators.insert(Identity::new("alice", 1000, 1000));
    creators.insert(Identity::new("alice", 1000, 4000)); // same uid, other gid
    creators.insert(Identity::new("bob", 1001, 1000));
    creators.insert(Identity::unresolved(4242, 4242));

    assert_eq!(creators.len(), 3);
    assert!(creators.contains(&Identity::new("", 4242, 0)));
}

#[test]
fn test_identity_serialization_shape() {
    let id = Identity::unresolved(4242, 100);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#"{"username":"user4242","uid":4242,"gid":100}"#);

    let back: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(back.username, "user4242");
    assert_eq!(back.gid, 100);
}

#[test]
fn test_leaf_expiry_boundary() {
    // a leaf whose three timestamps all equal t is expired iff t < threshold
    let t = 500_000;
    let times = FileTimes::new(t, t, t);
    assert!(times.all_before(t + 1));
    assert!(!times.all_before(t));
}

#[test]
fn test_directory_fold_scenario() {
    // dir with children {A: expired, B: not expired} -> not expired,
    // creators = union + own owner, times = max over self, A, B
    let mut dir = ExpiryResult::leaf(true, Identity::new("root", 0, 0), FileTimes::new(5, 5, 5));
    let a = ExpiryResult::leaf(true, Identity::new("alice", 1000, 1000), FileTimes::new(1, 9, 1));
    let b = ExpiryResult::leaf(false, Identity::new("bob", 1001, 1001), FileTimes::new(8, 1, 2));

    dir.fold_child(a);
    dir.fold_child(b);

    assert!(!dir.expired);
    assert_eq!(dir.creators.len(), 3);
    assert_eq!(dir.times, FileTimes::new(8, 9, 5));
}

#[test]
fn test_fresh_directory_with_stale_children_is_not_expired() {
    // the directory's own flag participates in the AND
    let mut dir = ExpiryResult::leaf(false, Identity::new("root", 0, 0), FileTimes::new(900, 900, 900));
    dir.fold_child(ExpiryResult::leaf(
        true,
        Identity::new("alice", 1000, 1000),
        FileTimes::new(1, 1, 1),
    ));
    assert!(!dir.expired);
}

#[test]
fn test_config_threshold_window() {
    let config = ExpiryConfig::builder()
        .root("/srv/share")
        .days_for_expiry(30u32)
        .build()
        .unwrap();

    let scrape_time = 1_700_000_000;
    let threshold = config.threshold_at(scrape_time);
    assert_eq!(scrape_time - threshold, 30 * SECS_PER_DAY);

    // 40 days stale is past the cutoff, 2 days stale is not
    assert!(FileTimes::new(
        scrape_time - 40 * SECS_PER_DAY,
        scrape_time - 40 * SECS_PER_DAY,
        scrape_time - 40 * SECS_PER_DAY
    )
    .all_before(threshold));
    assert!(!FileTimes::new(
        scrape_time - 2 * SECS_PER_DAY,
        scrape_time - 2 * SECS_PER_DAY,
        scrape_time - 2 * SECS_PER_DAY
    )
    .all_before(threshold));
}

#[test]
fn test_default_known_dirs_cover_runtime_caches() {
    let dirs = KnownDirs::default();
    assert_eq!(dirs.len(), 9);
    for path in [
        "/opt/ros/humble",
        "/usr/lib/python3.7",
        "/usr/lib64/python3.10",
    ] {
        assert!(dirs.matches(Path::new(path)), "{path} should be known");
    }
    assert!(!dirs.matches(Path::new("/usr/lib/python3.12")));
}

#[test]
fn test_fold_policy_default_is_exhaustive() {
    assert_eq!(FoldPolicy::default(), FoldPolicy::Exhaustive);
    let config = ExpiryConfig::new("/srv/share");
    assert_eq!(config.fold_policy, FoldPolicy::Exhaustive);
}
