//! # tidekv
//!
//! A minimal log-structured-merge key-value engine with:
//! - A durability journal written before every memtable mutation
//! - An in-memory memtable for the most recent writes
//! - Two on-disk tiers: a recently-flushed WAL segment and a fully-merged
//!   base segment
//! - Tombstone-based deletion, purged at merge time
//!
//! ## Architecture Overview
//!
//! ```text
//!                    write                         read
//!                      │                             │
//!        ┌─────────────▼─────────────┐  ┌────────────▼────────────┐
//!        │           Engine          │  │          Engine         │
//!        └─────┬───────────────┬─────┘  └────────────┬────────────┘
//!              │ 1. append     │ 2. put              │ first hit wins
//!        ┌─────▼─────┐   ┌─────▼─────┐         ┌─────▼─────┐
//!        │  Journal  │   │ MemTable  │         │ MemTable  │
//!        │ (replay on│   └─────┬─────┘         ├───────────┤
//!        │  startup) │         │ flush         │  WAL seg  │
//!        └───────────┘   ┌─────▼─────┐         ├───────────┤
//!                        │  WAL seg  │         │ Base seg  │
//!                        └─────┬─────┘         └───────────┘
//!                              │ merge
//!                        ┌─────▼─────┐
//!                        │ Base seg  │
//!                        └───────────┘
//! ```
//!
//! Single-threaded and synchronous: flush and merge run inline on the write
//! path that triggered them.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod journal;
pub mod memtable;
pub mod segment;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, TideError};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tidekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
