//! Recycling record domain model.
//!
//! # Responsibility
//! - Define the canonical record tracked by the store.
//! - Validate quantity and date invariants on construction and on mutation.
//!
//! # Invariants
//! - `id` is stable and acts as the store's primary key; it is never rewritten
//!   after creation.
//! - `quantity >= 0` for every validated record.
//! - `date` starts with a `YYYY-MM-DD` shaped prefix. Calendar correctness is
//!   deliberately not checked: `2024-13-45extra` passes. Callers relying on
//!   real dates must validate upstream.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid date prefix regex"));

/// Stable identifier for a recycling record.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// value is opaque to the core: callers choose it and the store only compares
/// it for equality.
pub type RecordId = String;

/// Field-level validation failure for record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Quantity was below zero.
    NegativeQuantity(i64),
    /// Date did not start with a `YYYY-MM-DD` shaped prefix.
    InvalidDate(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeQuantity(quantity) => {
                write!(f, "quantity must be non-negative, got {quantity}")
            }
            Self::InvalidDate(date) => {
                write!(f, "date must start with YYYY-MM-DD, got `{date}`")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// One tracked recycling entry.
///
/// Fields are public for read access; mutation is expected to go through the
/// owning store so invariants are re-checked on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Caller-supplied stable ID, unique within one store.
    pub id: RecordId,
    /// Free-text label for the recycled material.
    pub item: String,
    /// Recycled amount. Never negative on a validated record.
    pub quantity: i64,
    /// Date text constrained to a `YYYY-MM-DD` prefix.
    pub date: String,
}

impl Record {
    /// Creates a validated record.
    ///
    /// # Errors
    /// - `NegativeQuantity` when `quantity < 0`.
    /// - `InvalidDate` when `date` does not start with `YYYY-MM-DD`.
    pub fn new(
        id: impl Into<RecordId>,
        item: impl Into<String>,
        quantity: i64,
        date: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            id: id.into(),
            item: item.into(),
            quantity,
            date: date.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Re-checks all field invariants on an existing record.
    ///
    /// Store write paths call this before accepting a mutation, so a record
    /// that bypassed `new` still cannot enter the store in an invalid state.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.quantity < 0 {
            return Err(RecordValidationError::NegativeQuantity(self.quantity));
        }
        if !DATE_PREFIX_RE.is_match(&self.date) {
            return Err(RecordValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordValidationError};

    #[test]
    fn validate_checks_prefix_only() {
        let record = Record::new("R1", "Glass", 1, "2024-13-45extra").unwrap();
        assert_eq!(record.date, "2024-13-45extra");

        let err = Record::new("R1", "Glass", 1, "13-45-2024").unwrap_err();
        assert_eq!(err, RecordValidationError::InvalidDate("13-45-2024".into()));
    }
}
