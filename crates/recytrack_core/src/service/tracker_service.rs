//! Tracker use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD/log/report entry points for front ends.
//! - Stamp wall-clock timestamps for effort-log writes.
//! - Emit metadata-only diagnostic events for mutating operations.
//!
//! # Invariants
//! - Service APIs never bypass store validation contracts.
//! - The service layer remains storage-agnostic.

use crate::model::effort::EffortEntry;
use crate::model::record::{Record, RecordId};
use crate::store::record_store::{RecordStore, RecordUpdate, RecyclingReport, StoreResult};
use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};

/// Use-case facade over any `RecordStore` implementation.
pub struct TrackerService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TrackerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a record from raw field values.
    ///
    /// Constructs and validates the record, then inserts it; validation and
    /// duplicate-id failures are returned unchanged.
    pub fn create_record(
        &mut self,
        id: impl Into<RecordId>,
        item: impl Into<String>,
        quantity: i64,
        date: impl Into<String>,
    ) -> StoreResult<()> {
        let record = Record::new(id, item, quantity, date)?;
        let record_id = record.id.clone();
        match self.store.create_record(record) {
            Ok(()) => {
                info!("event=record_create module=service status=ok id={record_id}");
                Ok(())
            }
            Err(err) => {
                debug!("event=record_create module=service status=error id={record_id} error={err}");
                Err(err)
            }
        }
    }

    /// Returns a snapshot of one record, or `None` when absent.
    pub fn read_record(&self, id: &str) -> Option<Record> {
        self.store.get_record(id)
    }

    /// Applies a partial update to an existing record.
    pub fn update_record(&mut self, id: &str, update: &RecordUpdate) -> StoreResult<()> {
        match self.store.update_record(id, update) {
            Ok(()) => {
                info!("event=record_update module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                debug!("event=record_update module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Deletes one record by id. The effort log keeps its prior entries.
    pub fn delete_record(&mut self, id: &str) -> StoreResult<()> {
        match self.store.delete_record(id) {
            Ok(()) => {
                info!("event=record_delete module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                debug!("event=record_delete module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Appends one effort-log entry for an existing record, stamped with the
    /// current wall-clock time.
    pub fn log_effort(&mut self, id: &str) -> StoreResult<()> {
        match self.store.log_effort(id, now_epoch_ms()) {
            Ok(()) => {
                info!("event=effort_log module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                debug!("event=effort_log module=service status=error id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Insertion-ordered view of the effort log.
    pub fn efforts(&self) -> &[EffortEntry] {
        self.store.efforts()
    }

    /// Computes the aggregate report over current records.
    pub fn generate_report(&self) -> RecyclingReport {
        self.store.generate_report()
    }

    /// Consumes the service and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn now_epoch_ms() -> i64 {
    // A clock before the Unix epoch collapses to 0 rather than failing the
    // effort-log write.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
