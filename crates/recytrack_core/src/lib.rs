//! Core domain logic for the campus recycling tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::effort::EffortEntry;
pub use model::record::{Record, RecordId, RecordValidationError};
pub use service::tracker_service::TrackerService;
pub use store::record_store::{
    MemoryRecordStore, RecordStore, RecordUpdate, RecyclingReport, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
