#![expect(clippy::unwrap_used, reason = "test code")]

use super::{at, create_test_entry, create_test_storage, create_test_thought};
use zenlog_core::{Entry, EntryAnnotation};

#[test]
fn test_append_and_read_back_exact_text() {
    let (storage, _temp_dir) = create_test_storage();
    let thought = create_test_thought(&storage, "owner-1");
    let entry = create_test_entry(&thought, "T", 0);

    storage.append_entry(&entry).unwrap();

    let entries = storage.get_session_entries(&thought.id).unwrap();
    assert_eq!(entries.iter().filter(|e| e.text == "T").count(), 1);
    assert_eq!(storage.get_entry(&entry.id).unwrap().unwrap(), entry);
}

#[test]
fn test_session_entries_ascending() {
    let (storage, _temp_dir) = create_test_storage();
    let thought = create_test_thought(&storage, "owner-1");
    // inserted out of order on purpose
    for (text, offset) in [("second", 10), ("first", 0), ("third", 20)] {
        storage.append_entry(&create_test_entry(&thought, text, offset)).unwrap();
    }

    let texts: Vec<String> =
        storage.get_session_entries(&thought.id).unwrap().into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn test_same_timestamp_keeps_insertion_order() {
    let (storage, _temp_dir) = create_test_storage();
    let thought = create_test_thought(&storage, "owner-1");
    for text in ["a", "b", "c"] {
        storage.append_entry(&create_test_entry(&thought, text, 5)).unwrap();
    }
    let texts: Vec<String> =
        storage.get_session_entries(&thought.id).unwrap().into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_entry_for_unknown_thought_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    let entry = Entry::new(Some("ghost".to_owned()), None, "hello".to_owned(), at(0));
    let err = storage.append_entry(&entry).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_entry_without_thought_allowed() {
    let (storage, _temp_dir) = create_test_storage();
    let entry = Entry::new(None, None, "loose".to_owned(), at(0));
    storage.append_entry(&entry).unwrap();
    assert!(storage.get_entry(&entry.id).unwrap().is_some());
}

#[test]
fn test_recent_entry_texts_window() {
    let (storage, _temp_dir) = create_test_storage();
    let thought = create_test_thought(&storage, "owner-1");
    for i in 0..25 {
        storage.append_entry(&create_test_entry(&thought, &format!("e{i}"), i)).unwrap();
    }

    let texts = storage.recent_entry_texts(&thought.id, 20).unwrap();
    assert_eq!(texts.len(), 20);
    assert_eq!(texts.first().map(String::as_str), Some("e5"));
    assert_eq!(texts.last().map(String::as_str), Some("e24"));
}

#[test]
fn test_annotation_is_written_once() {
    let (storage, _temp_dir) = create_test_storage();
    let thought = create_test_thought(&storage, "owner-1");
    let entry = create_test_entry(&thought, "tired but hopeful", 0);
    storage.append_entry(&entry).unwrap();

    let first = EntryAnnotation {
        inner_thought: "There is strength in admitting fatigue.".to_owned(),
        summary: "Tired yet hopeful.".to_owned(),
        tags: "fatigue, hope".to_owned(),
    };
    assert!(storage.annotate_entry(&entry.id, &first).unwrap());

    let second = EntryAnnotation { inner_thought: "overwrite".to_owned(), ..first.clone() };
    assert!(!storage.annotate_entry(&entry.id, &second).unwrap());

    let loaded = storage.get_entry(&entry.id).unwrap().unwrap();
    assert_eq!(loaded.inner_thought.as_deref(), Some(first.inner_thought.as_str()));
    assert_eq!(loaded.tags.as_deref(), Some("fatigue, hope"));
}

#[test]
fn test_annotate_missing_entry() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(!storage.annotate_entry("missing", &EntryAnnotation::default()).unwrap());
}
