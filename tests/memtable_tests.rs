//! MemTable Tests
//!
//! Tests verify:
//! - Basic put/get operations
//! - Distinct-key counting
//! - Tombstone entries
//! - Clear functionality
//! - Construction from a replayed mapping

use std::collections::BTreeMap;

use tidekv::memtable::{Entry, MemTable};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_memtable_is_empty() {
    let memtable = MemTable::new();
    assert_eq!(memtable.len(), 0);
    assert!(memtable.is_empty());
}

#[test]
fn test_put_and_get() {
    let mut memtable = MemTable::new();

    memtable.put("key1".to_owned(), Entry::Value("value1".to_owned()));

    let result = memtable.get("key1");
    assert_eq!(result, Some(&Entry::Value("value1".to_owned())));
}

#[test]
fn test_get_nonexistent_key() {
    let memtable = MemTable::new();

    assert_eq!(memtable.get("nonexistent"), None);
}

#[test]
fn test_put_overwrites_existing() {
    let mut memtable = MemTable::new();

    memtable.put("key1".to_owned(), Entry::Value("value1".to_owned()));
    memtable.put("key1".to_owned(), Entry::Value("value2".to_owned()));

    assert_eq!(memtable.len(), 1);
    assert_eq!(memtable.get("key1"), Some(&Entry::Value("value2".to_owned())));
}

#[test]
fn test_len_counts_distinct_keys() {
    let mut memtable = MemTable::new();

    memtable.put("key1".to_owned(), Entry::Value("a".to_owned()));
    memtable.put("key2".to_owned(), Entry::Value("b".to_owned()));
    memtable.put("key2".to_owned(), Entry::Value("c".to_owned()));
    memtable.put("key3".to_owned(), Entry::Tombstone);

    assert_eq!(memtable.len(), 3);
}

// =============================================================================
// Tombstone Tests
// =============================================================================

#[test]
fn test_tombstone_entry() {
    let mut memtable = MemTable::new();

    memtable.put("key1".to_owned(), Entry::Value("value1".to_owned()));
    memtable.put("key1".to_owned(), Entry::Tombstone);

    let entry = memtable.get("key1").unwrap();
    assert!(entry.is_tombstone());
    assert_eq!(entry.as_value(), None);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_empties_table() {
    let mut memtable = MemTable::new();

    memtable.put("key1".to_owned(), Entry::Value("value1".to_owned()));
    memtable.put("key2".to_owned(), Entry::Value("value2".to_owned()));
    assert_eq!(memtable.len(), 2);

    memtable.clear();

    assert!(memtable.is_empty());
    assert_eq!(memtable.get("key1"), None);
}

// =============================================================================
// Replay Construction Tests
// =============================================================================

#[test]
fn test_from_replayed_mapping() {
    let mut entries = BTreeMap::new();
    entries.insert("key1".to_owned(), Entry::Value("value1".to_owned()));
    entries.insert("key2".to_owned(), Entry::Tombstone);

    let memtable = MemTable::from(entries);

    assert_eq!(memtable.len(), 2);
    assert_eq!(memtable.get("key1"), Some(&Entry::Value("value1".to_owned())));
    assert!(memtable.get("key2").unwrap().is_tombstone());
}

#[test]
fn test_iter_in_key_order() {
    let mut memtable = MemTable::new();
    memtable.put("b".to_owned(), Entry::Value("2".to_owned()));
    memtable.put("a".to_owned(), Entry::Value("1".to_owned()));
    memtable.put("c".to_owned(), Entry::Value("3".to_owned()));

    let keys: Vec<&str> = memtable.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}
