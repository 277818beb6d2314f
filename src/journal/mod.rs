//! Journal Module
//!
//! Append-only durability log for the write path.
//!
//! ## Responsibilities
//! - Record every write to stable storage before it becomes visible in the
//!   memtable
//! - Bound the file with size-limited rotation after every append
//! - Reconstruct unflushed memtable state at startup via replay
//!
//! ## File Format
//! One self-describing JSON object per line, exactly one key/value pair per
//! record. Tombstones are encoded as `null`:
//! ```text
//! {"user:1":"alice"}
//! {"user:2":"bob"}
//! {"user:1":null}
//! ```

mod record;
mod recovery;
mod writer;

pub use record::Record;
pub use recovery::{JournalRecovery, ReplayReport};
pub use writer::Journal;
