//! Engine Module
//!
//! The core storage engine that coordinates all components.
//!
//! ## Responsibilities
//! - Coordinate journal, memtable, and the two on-disk tiers
//! - Trigger flushes when the memtable is full
//! - Trigger merges when the WAL segment is full
//! - Drive startup replay and shutdown persistence

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::journal::{Journal, JournalRecovery, Record};
use crate::memtable::{Entry, MemTable};
use crate::segment::Segment;

/// The main storage engine
///
/// ## Execution Model: Single-Threaded, Synchronous
///
/// Every operation runs to completion on the calling thread, performing
/// blocking file I/O inline. Write operations take `&mut self`, so exclusive
/// access is enforced by the compiler rather than by locks. A caller sharing
/// an engine across threads must supply a single external guard covering the
/// journal, memtable, and both segments for the lifetime of the process.
///
/// Flush and merge execute inside the write path that triggered them
/// (upsert → flush → merge can chain within one call), so write latency
/// spikes in proportion to total segment size whenever a threshold is
/// crossed. A caller requiring bounded write latency should move flush/merge
/// onto its own task signaled by watermark crossing, with at most one merge
/// in flight.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Durability journal, written before every memtable mutation
    journal: Journal,

    /// In-memory buffer for the most recent writes
    memtable: MemTable,

    /// First on-disk tier: flushed but not yet merged
    wal: Segment,

    /// Second on-disk tier: fully merged, never contains tombstones
    base: Segment,
}

impl Engine {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const JOURNAL_FILENAME: &'static str = "journal.log";
    const WAL_FILENAME: &'static str = "wal.seg";
    const BASE_FILENAME: &'static str = "base.seg";

    /// Open or create an engine with the given config
    ///
    /// Creates the data directory and the journal, WAL-segment, and
    /// base-segment files if absent. Does not replay the journal; call
    /// [`startup`](Self::startup) to recover unflushed writes.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let journal = Journal::open(
            &config.data_dir.join(Self::JOURNAL_FILENAME),
            config.journal_line_limit,
        )?;
        let wal = Segment::open(&config.data_dir.join(Self::WAL_FILENAME))?;
        let base = Segment::open(&config.data_dir.join(Self::BASE_FILENAME))?;

        Ok(Self {
            config,
            journal,
            memtable: MemTable::new(),
            wal,
            base,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_dir = path.to_path_buf();
        Self::open(config)
    }

    /// Recover memtable state by replaying the journal
    ///
    /// This is the sole recovery mechanism; the segments are assumed already
    /// durable and are not read here. Replay aborts on a corrupt record.
    pub fn startup(&mut self) -> Result<()> {
        let (entries, report) = JournalRecovery::replay(self.journal.path())?;
        info!(
            records = report.records_replayed,
            keys = report.distinct_keys,
            "journal replay complete"
        );
        self.memtable = MemTable::from(entries);
        Ok(())
    }

    /// Insert or overwrite a key-value pair
    ///
    /// The journal append must complete before the value becomes visible in
    /// the memtable. May trigger a flush (and transitively a merge) inline.
    pub fn upsert(&mut self, key: &str, value: &str) -> Result<()> {
        self.write(key, Entry::Value(value.to_owned()))
    }

    /// Delete a key
    ///
    /// Deletion is logical: a tombstone travels the same write path as any
    /// value and masks the key until the next merge physically removes it.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        self.write(key, Entry::Tombstone)
    }

    /// Shared write path for upsert and delete
    fn write(&mut self, key: &str, entry: Entry) -> Result<()> {
        // Step 1: journal first (durability guarantee)
        self.journal.append(&Record::new(key, entry.clone()))?;

        // Step 2: apply to the memtable
        self.memtable.put(key.to_owned(), entry);

        // Step 3: flush if the memtable reached its limit
        if self.memtable.len() >= self.config.memtable_obj_limit {
            self.flush()?;
        }

        Ok(())
    }

    /// Get a value by key
    ///
    /// Search order: memtable, then WAL segment, then base segment; first
    /// hit wins. A tombstone hit resolves to `None` regardless of the tier
    /// that produced it.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = match self.memtable.get(key) {
            Some(e) => Some(e.clone()),
            None => {
                let wal = self.wal.load()?;
                match wal.get(key) {
                    Some(e) => Some(e.clone()),
                    None => self.base.load()?.get(key).cloned(),
                }
            }
        };

        Ok(match entry {
            Some(Entry::Value(v)) => Some(v),
            Some(Entry::Tombstone) | None => None,
        })
    }

    /// Flush the memtable into the WAL segment
    ///
    /// Overlays the memtable onto the current WAL segment contents (memtable
    /// wins on key conflict), rewrites the segment, and clears the memtable.
    /// If the resulting segment reached `wal_obj_limit`, a merge runs
    /// immediately. Runs even when the memtable is empty; the resulting-size
    /// check applies to every flush.
    pub fn flush(&mut self) -> Result<()> {
        let mut merged = self.wal.load()?;
        for (key, entry) in self.memtable.iter() {
            merged.insert(key.clone(), entry.clone());
        }

        self.wal.save(&merged)?;
        debug!(
            flushed = self.memtable.len(),
            wal_entries = merged.len(),
            "flushed memtable to wal segment"
        );
        self.memtable.clear();

        if merged.len() >= self.config.wal_obj_limit {
            self.merge()?;
        }

        Ok(())
    }

    /// Merge the WAL segment into the base segment
    ///
    /// Overlays the WAL segment onto the base (WAL wins on key conflict),
    /// drops every tombstone, rewrites the base segment, and empties the WAL
    /// segment. The base segment never contains a tombstone.
    pub fn merge(&mut self) -> Result<()> {
        let wal = self.wal.load()?;
        let mut merged = self.base.load()?;
        merged.extend(wal);
        merged.retain(|_, entry| !entry.is_tombstone());

        self.base.save(&merged)?;
        self.wal.clear()?;
        debug!(base_entries = merged.len(), "merged wal segment into base segment");

        Ok(())
    }

    /// Shut the engine down gracefully
    ///
    /// Flushes buffered writes, merges them into the base segment, and trims
    /// the journal, in that order, so all durable state reaches the base
    /// tier before the process exits.
    pub fn shutdown(&mut self) -> Result<()> {
        info!("shutting down");
        self.flush()?;
        self.merge()?;
        self.journal.rotate()?;
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the journal file path
    pub fn journal_path(&self) -> &Path {
        self.journal.path()
    }

    /// Get the WAL segment file path
    pub fn wal_path(&self) -> &Path {
        self.wal.path()
    }

    /// Get the base segment file path
    pub fn base_path(&self) -> &Path {
        self.base.path()
    }

    /// Get the number of distinct keys in the memtable
    pub fn memtable_len(&self) -> usize {
        self.memtable.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
