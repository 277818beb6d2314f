//! Journal record definitions
//!
//! Defines the structure of individual journal records and their line
//! encoding.

use std::collections::BTreeMap;

use crate::error::{Result, TideError};
use crate::memtable::Entry;

/// A single journal record: one key paired with the entry written for it
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: String,
    pub entry: Entry,
}

impl Record {
    pub fn new(key: impl Into<String>, entry: Entry) -> Self {
        Self {
            key: key.into(),
            entry,
        }
    }

    /// Encode as one self-contained line: a JSON object holding exactly this
    /// record's key/value pair
    pub fn encode(&self) -> Result<String> {
        let mut pair = BTreeMap::new();
        pair.insert(&self.key, &self.entry);
        serde_json::to_string(&pair).map_err(|e| TideError::Serialization(e.to_string()))
    }

    /// Decode a journal line back into a record
    ///
    /// A line that is not a JSON object with exactly one key/value pair is
    /// corrupt.
    pub fn decode(line: &str) -> Result<Self> {
        let pairs: BTreeMap<String, Entry> = serde_json::from_str(line)
            .map_err(|e| TideError::JournalCorruption(e.to_string()))?;

        if pairs.len() != 1 {
            return Err(TideError::JournalCorruption(format!(
                "expected exactly one key/value pair per record, got {}",
                pairs.len()
            )));
        }

        let (key, entry) = pairs.into_iter().next().expect("length checked above");
        Ok(Self { key, entry })
    }
}
