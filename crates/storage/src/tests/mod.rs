//! Test utilities and module declarations for storage tests.

use crate::Storage;
use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;
use zenlog_core::{Entry, Thought};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(offset_secs)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_thought(storage: &Storage, owner: &str) -> Thought {
    let thought = Thought::new(owner.to_owned(), Some(format!("{owner}'s thought")), base_time());
    storage.save_thought(&thought).unwrap();
    thought
}

pub fn create_test_entry(thought: &Thought, text: &str, offset_secs: i64) -> Entry {
    Entry::new(
        Some(thought.id.clone()),
        Some(thought.owner_id.clone()),
        text.to_owned(),
        at(offset_secs),
    )
}

mod entry_tests;

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn test_reopen_keeps_data_and_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    let (thought_id, entry_id) = {
        let storage = Storage::new(&db_path).unwrap();
        let thought = create_test_thought(&storage, "owner-1");
        let entry = create_test_entry(&thought, "kept", 0);
        storage.append_entry(&entry).unwrap();
        (thought.id, entry.id)
    };

    let storage = Storage::new(&db_path).unwrap();
    assert!(storage.get_thought(&thought_id).unwrap().is_some());
    let entry = storage.get_entry(&entry_id).unwrap().unwrap();
    assert_eq!(entry.author_id.as_deref(), Some("owner-1"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap();
    assert_eq!(version, crate::migrations::SCHEMA_VERSION);
}
