//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD, effort-log, and report APIs over keyed records.
//! - Keep the storage container swappable behind the `RecordStore` trait.
//!
//! # Invariants
//! - Write paths re-validate records before mutating state.
//! - `create_record` never overwrites an existing entry.
//! - `update_record` is atomic: a validation failure leaves the record
//!   completely unmodified.
//! - `delete_record` never touches the effort log.

use crate::model::effort::EffortEntry;
use crate::model::record::{Record, RecordId, RecordValidationError};
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for record mutation and lookup operations.
///
/// All variants are caller-correctable; none are fatal to the process.
#[derive(Debug)]
pub enum StoreError {
    Validation(RecordValidationError),
    DuplicateId(RecordId),
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "recycling ID already exists: {id}"),
            Self::NotFound(id) => write!(f, "recycling ID does not exist: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Partial-update request for one record.
///
/// `None` fields keep the current value. An all-`None` update is a valid
/// no-op against an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub item: Option<String>,
    pub quantity: Option<i64>,
    pub date: Option<String>,
}

impl RecordUpdate {
    /// Returns whether the update carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.item.is_none() && self.quantity.is_none() && self.date.is_none()
    }
}

/// Aggregate view over the current records.
///
/// The entry list is an owned snapshot sorted by id, so later store mutations
/// never show through a report a caller is still holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecyclingReport {
    /// Count of records currently in the store.
    pub total_entries: usize,
    /// Sum of all record quantities, zero when the store is empty.
    pub total_quantity: i64,
    /// Snapshot of every current record, sorted by id ascending.
    pub entries: Vec<Record>,
}

/// Storage contract for record CRUD, the effort log, and reporting.
pub trait RecordStore {
    /// Inserts a new record keyed by its id.
    ///
    /// Fails with `DuplicateId` when the id is already present; the existing
    /// entry is left untouched.
    fn create_record(&mut self, record: Record) -> StoreResult<()>;

    /// Returns a snapshot of the record for `id`.
    ///
    /// Absence is a designed non-error outcome, signalled as `None`.
    fn get_record(&self, id: &str) -> Option<Record>;

    /// Applies a partial update to an existing record.
    ///
    /// All provided fields are validated before any is applied, so a failure
    /// never leaves a half-updated record behind.
    fn update_record(&mut self, id: &str, update: &RecordUpdate) -> StoreResult<()>;

    /// Removes the record for `id`. Prior effort-log entries are unaffected.
    fn delete_record(&mut self, id: &str) -> StoreResult<()>;

    /// Appends a snapshot of the record for `id` to the effort log.
    ///
    /// The timestamp is caller-supplied so the store stays deterministic
    /// under test; the service layer stamps wall-clock time.
    fn log_effort(&mut self, id: &str, logged_at_epoch_ms: i64) -> StoreResult<()>;

    /// Insertion-ordered view of the effort log.
    fn efforts(&self) -> &[EffortEntry];

    /// Computes the aggregate report over current records. Pure.
    fn generate_report(&self) -> RecyclingReport;
}

/// In-memory record store.
///
/// Process-local and single-threaded: every mutating operation takes
/// `&mut self`, so exclusive access is a compile-time property. Callers that
/// expose this store to concurrent use must add their own synchronization.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    entries: HashMap<RecordId, Record>,
    log: Vec<EffortEntry>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn create_record(&mut self, record: Record) -> StoreResult<()> {
        if self.entries.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        record.validate()?;
        self.entries.insert(record.id.clone(), record);
        Ok(())
    }

    fn get_record(&self, id: &str) -> Option<Record> {
        self.entries.get(id).cloned()
    }

    fn update_record(&mut self, id: &str, update: &RecordUpdate) -> StoreResult<()> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        // Build the candidate first and validate it as a whole, so a bad
        // field cannot leave earlier fields already applied.
        let mut updated = entry.clone();
        if let Some(item) = &update.item {
            updated.item = item.clone();
        }
        if let Some(quantity) = update.quantity {
            updated.quantity = quantity;
        }
        if let Some(date) = &update.date {
            updated.date = date.clone();
        }
        updated.validate()?;

        *entry = updated;
        Ok(())
    }

    fn delete_record(&mut self, id: &str) -> StoreResult<()> {
        if self.entries.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }

    fn log_effort(&mut self, id: &str, logged_at_epoch_ms: i64) -> StoreResult<()> {
        let record = self
            .entries
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        self.log.push(EffortEntry::new(record, logged_at_epoch_ms));
        Ok(())
    }

    fn efforts(&self) -> &[EffortEntry] {
        &self.log
    }

    fn generate_report(&self) -> RecyclingReport {
        let mut entries: Vec<Record> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        let total_quantity = entries.iter().map(|record| record.quantity).sum();

        RecyclingReport {
            total_entries: entries.len(),
            total_quantity,
            entries,
        }
    }
}
