//! Journal Recovery
//!
//! Rebuilds memtable state after abnormal termination by replaying the
//! journal.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TideError};
use crate::memtable::Entry;

use super::Record;

/// Handles journal replay at startup
pub struct JournalRecovery;

/// Result of a replay operation
#[derive(Debug)]
pub struct ReplayReport {
    /// Number of records read from the journal
    pub records_replayed: usize,

    /// Number of distinct keys after folding
    pub distinct_keys: usize,
}

impl JournalRecovery {
    /// Replay all records in file order, folding them into a single mapping
    ///
    /// Later records overwrite earlier ones for the same key. A missing or
    /// empty journal replays to an empty mapping. A record that fails to
    /// parse aborts the replay with a corruption error naming the line.
    pub fn replay(path: &Path) -> Result<(BTreeMap<String, Entry>, ReplayReport)> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut table = BTreeMap::new();
        let mut records_replayed = 0;

        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = match Record::decode(line) {
                Ok(r) => r,
                Err(TideError::JournalCorruption(msg)) => {
                    return Err(TideError::JournalCorruption(format!(
                        "line {}: {}",
                        number + 1,
                        msg
                    )));
                }
                Err(e) => return Err(e),
            };

            table.insert(record.key, record.entry);
            records_replayed += 1;
        }

        let report = ReplayReport {
            records_replayed,
            distinct_keys: table.len(),
        };
        Ok((table, report))
    }
}
