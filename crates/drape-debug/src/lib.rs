//! # drape-debug
//!
//! State snapshots for debugging simulation runs. A snapshot captures
//! every particle's current and previous position plus its pin flag,
//! serialized with `bincode`, so a run can be resumed or inspected
//! offline.

pub mod snapshot;

pub use snapshot::{SnapshotSummary, StateSnapshot};
