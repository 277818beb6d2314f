//! Journal Writer
//!
//! Handles appending records to the journal file and rotating it.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

use super::Record;

/// Appends records to the journal file
///
/// The file is reopened per operation: rotation rewrites it in place after
/// every append, invalidating any long-lived handle. Each append costs
/// O(journal size), bounded by rotation.
pub struct Journal {
    path: PathBuf,
    line_limit: usize,
}

impl Journal {
    /// Open or create a journal file
    pub fn open(path: &Path, line_limit: usize) -> Result<Self> {
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            line_limit,
        })
    }

    /// Append a record to the journal
    ///
    /// The record is on stable storage when this returns; the caller may then
    /// treat the corresponding memtable mutation as committed. Every append
    /// is followed by a rotation check.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let line = record.encode()?;

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;

        self.rotate()
    }

    /// Rotate the journal if it has grown past its retention window
    ///
    /// Keeps the newest `line_limit` records and discards the rest; the
    /// crash-recovery window is the last `line_limit` writes. Rotation is
    /// lossy: a dropped record is recoverable only if it already reached a
    /// segment.
    pub fn rotate(&mut self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();

        if records.len() <= self.line_limit {
            return Ok(());
        }

        let retained = &records[records.len() - self.line_limit..];
        debug!(
            dropped = records.len() - retained.len(),
            retained = retained.len(),
            "rotating journal"
        );

        let mut file = File::create(&self.path)?;
        for line in retained {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.sync_all()?;

        Ok(())
    }

    /// Path of the underlying journal file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
