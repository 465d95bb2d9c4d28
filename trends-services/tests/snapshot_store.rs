//! Snapshot persistence tests
//!
//! Run with: cargo test -p trends-services --test snapshot_store

use std::fs;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;
use trends_services::{sample_items, EngineConfig, MetricsEngine, SnapshotStore};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 27, 6, 30, 0).unwrap()
}

fn sample_snapshot() -> trends_core::MetricsSnapshot {
    let engine = MetricsEngine::new(EngineConfig::default()).unwrap();
    engine.compute(&sample_items(now().date_naive(), 30), now())
}

#[test]
fn test_save_writes_latest_and_archive() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path().join("stats"));
    let snapshot = sample_snapshot();

    let saved = store.save(&snapshot).unwrap();

    assert!(saved.latest.ends_with("trends.json"));
    let archive = saved.archive.expect("archive should be written");
    assert!(archive.ends_with("trends-2025-01-27.json"));

    let latest_body = fs::read_to_string(&saved.latest).unwrap();
    let archive_body = fs::read_to_string(&archive).unwrap();
    assert_eq!(latest_body, archive_body);
    assert!(latest_body.ends_with('\n'));

    assert_eq!(store.load_latest().unwrap(), snapshot);
}

#[test]
fn test_archive_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());
    let archive_path = store.archive_path(NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());

    store.save(&sample_snapshot()).unwrap();
    let original = fs::read_to_string(&archive_path).unwrap();

    let engine = MetricsEngine::new(EngineConfig::default()).unwrap();
    let empty = engine.compute(&[], now());
    let saved = store.save(&empty).unwrap();

    assert!(saved.archive.is_none());
    assert_eq!(fs::read_to_string(&archive_path).unwrap(), original);
    assert!(store.load_latest().unwrap().is_empty());
}

#[test]
fn test_save_is_byte_identical_for_same_input() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let first = SnapshotStore::new(first_dir.path()).save(&sample_snapshot()).unwrap();
    let second = SnapshotStore::new(second_dir.path()).save(&sample_snapshot()).unwrap();

    assert_eq!(
        fs::read(&first.latest).unwrap(),
        fs::read(&second.latest).unwrap()
    );
}

#[test]
fn test_save_sample_uses_sample_file() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());

    let path = store.save_sample(&sample_snapshot()).unwrap();

    assert!(path.ends_with("sample-trends.json"));
    assert!(!store.latest_path().exists());
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());
    store.save(&sample_snapshot()).unwrap();
    store.save(&sample_snapshot()).unwrap();

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, vec!["trends-2025-01-27.json", "trends.json"]);
}

#[test]
fn test_load_latest_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());
    assert!(matches!(
        store.load_latest(),
        Err(trends_core::TrendsError::Io { .. })
    ));
}
