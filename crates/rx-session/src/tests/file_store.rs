use crate::{FileStore, KeyValueStore, StoreError};

use googletest::assert_that;
use googletest::prelude::{eq, none, ok, some};
use tempfile::TempDir;

fn open_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path().join("session")).unwrap();
    (temp_dir, store)
}

#[test]
fn given_missing_dir_when_opened_then_creates_it() {
    // Given
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested").join("session");

    // When
    let store = FileStore::open(&dir).unwrap();

    // Then
    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn given_written_value_when_read_then_returns_it() {
    // Given
    let (_temp_dir, store) = open_store();

    // When
    store.set("customer_token", "tok-123").unwrap();

    // Then
    assert_that!(
        store.get("customer_token").unwrap(),
        some(eq(&"tok-123".to_string()))
    );
}

#[test]
fn given_missing_key_when_read_then_returns_none() {
    let (_temp_dir, store) = open_store();

    assert_that!(store.get("admin_token").unwrap(), none());
}

#[test]
fn given_missing_key_when_removed_then_succeeds() {
    let (_temp_dir, store) = open_store();

    assert_that!(store.remove("admin_token"), ok(eq(&())));
}

#[test]
fn given_value_when_overwritten_then_last_write_wins() {
    // Given
    let (_temp_dir, store) = open_store();
    store.set("customer_token", "first").unwrap();

    // When
    store.set("customer_token", "second").unwrap();

    // Then
    assert_that!(
        store.get("customer_token").unwrap(),
        some(eq(&"second".to_string()))
    );
}

#[test]
fn given_store_reopened_when_read_then_value_survives() {
    // Given
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("session");
    FileStore::open(&dir)
        .unwrap()
        .set("admin_token", "persisted")
        .unwrap();

    // When
    let reopened = FileStore::open(&dir).unwrap();

    // Then
    assert_that!(
        reopened.get("admin_token").unwrap(),
        some(eq(&"persisted".to_string()))
    );
}

#[test]
fn given_corrupted_file_when_read_then_returns_none_and_keeps_backup() {
    // Given
    let (_temp_dir, store) = open_store();
    std::fs::write(store.dir().join("customer_token.json"), "{not json").unwrap();

    // When
    let value = store.get("customer_token").unwrap();

    // Then
    assert_that!(value, none());
    let backups = std::fs::read_dir(store.dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".corrupted."))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn given_key_with_path_separator_when_written_then_rejects_key() {
    let (_temp_dir, store) = open_store();

    let result = store.set("../escape", "value");

    assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
}

#[test]
fn given_matching_value_when_remove_if_then_removes() {
    // Given
    let (_temp_dir, store) = open_store();
    store.set("customer_token", "tok-a").unwrap();

    // When
    let removed = store.remove_if("customer_token", "tok-a").unwrap();

    // Then
    assert!(removed);
    assert_that!(store.get("customer_token").unwrap(), none());
}

#[test]
fn given_replaced_value_when_remove_if_then_keeps_it() {
    // Given
    let (_temp_dir, store) = open_store();
    store.set("customer_token", "tok-b").unwrap();

    // When
    let removed = store.remove_if("customer_token", "tok-a").unwrap();

    // Then
    assert!(!removed);
    assert_that!(
        store.get("customer_token").unwrap(),
        some(eq(&"tok-b".to_string()))
    );
}

#[test]
fn given_successful_write_when_listing_dir_then_no_temp_files_remain() {
    // Given
    let (_temp_dir, store) = open_store();

    // When
    store.set("admin_token", "tok").unwrap();
    store.set("admin_token", "tok-2").unwrap();

    // Then
    let leftovers = std::fs::read_dir(store.dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
        .count();
    assert_eq!(leftovers, 0);
}
