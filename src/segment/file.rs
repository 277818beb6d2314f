//! Segment file implementation
//!
//! Shared load/save primitive used for both the WAL segment and the base
//! segment.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TideError};
use crate::memtable::Entry;

/// One on-disk tier, stored as a single serialized mapping at a fixed path
pub struct Segment {
    path: PathBuf,
}

impl Segment {
    /// Open or create a segment file
    pub fn open(path: &Path) -> Result<Self> {
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load the full mapping from disk
    ///
    /// A missing or empty file is a legitimate state (a tier that has never
    /// been written, or a WAL segment cleared by a merge) and loads as an
    /// empty mapping. Content that fails to parse is reported as corruption,
    /// not swallowed.
    pub fn load(&self) -> Result<BTreeMap<String, Entry>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            TideError::SegmentCorruption(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Serialize the mapping and overwrite the file's entire content
    pub fn save(&self, entries: &BTreeMap<String, Entry>) -> Result<()> {
        let encoded =
            serde_json::to_string(entries).map_err(|e| TideError::Serialization(e.to_string()))?;

        let mut file = File::create(&self.path)?;
        file.write_all(encoded.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }

    /// Truncate the segment to the empty mapping
    pub fn clear(&self) -> Result<()> {
        self.save(&BTreeMap::new())
    }

    /// Path of the underlying segment file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
