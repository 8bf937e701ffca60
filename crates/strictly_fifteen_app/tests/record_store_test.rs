//! Tests for the leaderboard over durable storage.

use tempfile::TempDir;

use strictly_fifteen_app::{FileStorage, KeyValueStorage, RECORDS_STORAGE_KEY, Record, RecordStore};

/// Creates a temporary storage directory, returns the directory handle
/// (must stay in scope to keep it alive) and a store over it.
fn setup_store() -> (TempDir, RecordStore<FileStorage>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::open(dir.path()).expect("Failed to open storage");
    (dir, RecordStore::open(storage))
}

fn reopen(dir: &TempDir) -> RecordStore<FileStorage> {
    let storage = FileStorage::open(dir.path()).expect("Failed to reopen storage");
    RecordStore::open(storage)
}

#[test]
fn test_fresh_store_is_empty() {
    let (_dir, store) = setup_store();
    assert!(store.is_empty());
    assert!(store.ranking_lines().is_empty());
}

#[test]
fn test_records_survive_reopen() {
    let (dir, mut store) = setup_store();
    store.append("Alice", 42).expect("Append failed");
    store.append("Bob", 7).expect("Append failed");
    drop(store);

    let store = reopen(&dir);
    assert_eq!(
        store.records(),
        &[
            Record::new("Alice", 42).unwrap(),
            Record::new("Bob", 7).unwrap()
        ]
    );
    assert_eq!(
        store.ranking_lines(),
        vec!["NO.1. Alice: 42s".to_string(), "NO.2. Bob: 7s".to_string()]
    );
}

#[test]
fn test_clear_survives_reopen() {
    let (dir, mut store) = setup_store();
    store.append("Alice", 42).expect("Append failed");
    store.clear().expect("Clear failed");
    drop(store);

    assert!(reopen(&dir).is_empty());
}

#[test]
fn test_corrupt_file_loads_empty_and_recovers() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(format!("{}.json", RECORDS_STORAGE_KEY)),
        "{\"name\": truncated",
    )
    .expect("Failed to write fixture");

    let mut store = reopen(&dir);
    assert!(store.is_empty());

    store.append("Carol", 12).expect("Append failed");
    assert_eq!(reopen(&dir).len(), 1);
}

#[test]
fn test_persisted_format() {
    let (dir, mut store) = setup_store();
    store.append("Bob", 3).expect("Append failed");

    let storage = FileStorage::open(dir.path()).expect("Failed to reopen storage");
    assert_eq!(
        storage.get(RECORDS_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"[{"name":"Bob","time":3}]"#)
    );
}

#[test]
fn test_custom_key_is_isolated() {
    let (dir, mut store) = setup_store();
    store.append("Alice", 1).expect("Append failed");

    let storage = FileStorage::open(dir.path()).expect("Failed to reopen storage");
    let other = RecordStore::with_key(storage, "practice_records");
    assert!(other.is_empty());
    assert_eq!(other.key(), "practice_records");
}

#[test]
fn test_load_sees_writes_from_another_store() {
    let (dir, mut first) = setup_store();
    let mut second = reopen(&dir);

    second.append("Dana", 99).expect("Append failed");
    assert!(first.records().is_empty());
    assert_eq!(first.load().len(), 1);
}

#[test]
fn test_blank_names_on_disk_load_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(format!("{}.json", RECORDS_STORAGE_KEY)),
        r#"[{"name":"","time":5},{"name":"   ","time":1}]"#,
    )
    .expect("Failed to write fixture");

    assert!(reopen(&dir).is_empty());
}
