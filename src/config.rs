//! Configuration for tidekv
//!
//! Centralized configuration with sensible defaults. A `Config` is passed
//! explicitly at engine construction; there is no process-wide default path.

use std::path::PathBuf;

/// Main configuration for a tidekv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── journal.log      (append-only durability journal)
    ///     ├── wal.seg          (flushed-but-unmerged tier)
    ///     └── base.seg         (fully merged, tombstone-free tier)
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Threshold Configuration
    // -------------------------------------------------------------------------
    /// Max number of distinct keys in the memtable before a flush is triggered
    pub memtable_obj_limit: usize,

    /// Max number of entries in the WAL segment before a merge is triggered
    pub wal_obj_limit: usize,

    /// Max number of retained journal records; rotation trims the file down
    /// to the newest `journal_line_limit` records
    pub journal_line_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./tidekv_data"),
            memtable_obj_limit: 5,
            wal_obj_limit: 5,
            journal_line_limit: 5,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the memtable flush threshold (number of distinct keys)
    pub fn memtable_obj_limit(mut self, limit: usize) -> Self {
        self.config.memtable_obj_limit = limit;
        self
    }

    /// Set the WAL segment merge threshold (number of entries)
    pub fn wal_obj_limit(mut self, limit: usize) -> Self {
        self.config.wal_obj_limit = limit;
        self
    }

    /// Set the journal retention window (number of records)
    pub fn journal_line_limit(mut self, limit: usize) -> Self {
        self.config.journal_line_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
