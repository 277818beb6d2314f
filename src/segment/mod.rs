//! Segment Module
//!
//! Persistent storage for the two on-disk tiers.
//!
//! ## Responsibilities
//! - Load a tier's full mapping from disk
//! - Save a tier by rewriting its file wholesale
//! - Distinguish absence from corruption from I/O failure on load
//!
//! ## File Format
//! Each tier is exactly one JSON object holding the entire mapping, with
//! tombstones encoded as `null`:
//! ```text
//! {"user:1":"alice","user:2":null,"user:3":"carol"}
//! ```
//! Every save rewrites the whole file, so each flush or merge costs
//! O(total segment size). Acceptable at this engine's scale; incremental
//! sorted-segment merging is out of scope.

mod file;

pub use file::Segment;
