//! MemTable Module
//!
//! In-memory data structure for recent writes.
//!
//! ## Responsibilities
//! - Fast reads and writes in memory
//! - Track distinct-key count for flush triggers
//! - Hand its contents to the engine during a flush overlay
//!
//! ## Data Structure Choice
//! Using BTreeMap for V1:
//! - Simple and correct first, optimize later
//! - Deterministic key order keeps segment files stable across rewrites

mod table;

pub use table::MemTable;

use serde::{Deserialize, Serialize};

/// Entry stored in any tier (memtable, WAL segment, base segment).
///
/// A tombstone marks logical deletion until the key is physically removed at
/// merge time. On disk it serializes as JSON `null`, which no legitimate
/// string value can collide with. Callers never write a tombstone directly;
/// only `Engine::delete` does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Entry {
    /// A live value
    Value(String),

    /// A tombstone (deleted key)
    Tombstone,
}

impl Entry {
    /// Whether this entry marks a deletion
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }

    /// The live value, if any
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Tombstone => None,
        }
    }
}

impl From<Option<String>> for Entry {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Entry::Value(v),
            None => Entry::Tombstone,
        }
    }
}

impl From<Entry> for Option<String> {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Value(v) => Some(v),
            Entry::Tombstone => None,
        }
    }
}
