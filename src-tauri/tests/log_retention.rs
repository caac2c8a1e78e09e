//! Integration tests for rotated log pruning through the public logging API.

use std::fs;

use purchasync_lib::logging::{prune_rotated_logs, LogConfig};

#[test]
fn test_default_retention_prunes_a_month_of_logs() {
    let config = LogConfig::default();
    let dir = tempfile::tempdir().unwrap();
    for day in 1..=30 {
        fs::write(dir.path().join(format!("{}.2024-01-{day:02}", config.file_name)), b"x").unwrap();
    }
    fs::write(dir.path().join("unrelated.txt"), b"keep me").unwrap();

    let removed = prune_rotated_logs(dir.path(), config.file_name, config.retention);

    assert_eq!(removed, 30 - config.retention);
    let mut left: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    left.sort();
    assert_eq!(left.len(), config.retention + 1);
    assert!(left.contains(&"unrelated.txt".to_string()));
    assert!(left.contains(&format!("{}.2024-01-30", config.file_name)));
    assert!(!left.contains(&format!("{}.2024-01-01", config.file_name)));
}

#[test]
fn test_second_prune_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    for day in 1..=4 {
        fs::write(dir.path().join(format!("purchasync.log.2024-02-0{day}")), b"x").unwrap();
    }

    assert_eq!(prune_rotated_logs(dir.path(), "purchasync.log", 2), 2);
    assert_eq!(prune_rotated_logs(dir.path(), "purchasync.log", 2), 0);
}
