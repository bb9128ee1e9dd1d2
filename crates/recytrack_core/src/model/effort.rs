//! Effort log entries.
//!
//! # Responsibility
//! - Define the append-only log row recorded by `log_effort`.
//!
//! # Invariants
//! - An entry owns a snapshot of the record as it looked at log time, not a
//!   reference into the store. Deleting the record later leaves the entry
//!   intact and unchanged.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};

/// One effort-log row: the record snapshot plus when it was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortEntry {
    /// Copy of the record at log time.
    pub record: Record,
    /// Wall-clock log time in Unix epoch milliseconds.
    pub logged_at_epoch_ms: i64,
}

impl EffortEntry {
    /// Creates an entry from a record snapshot and a timestamp.
    pub fn new(record: Record, logged_at_epoch_ms: i64) -> Self {
        Self {
            record,
            logged_at_epoch_ms,
        }
    }
}
