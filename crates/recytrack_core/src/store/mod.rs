//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the keyed-record storage contract used by services and front ends.
//! - Keep container details (map, log vector) behind the store boundary.
//!
//! # Invariants
//! - Store writes must enforce `Record::validate()` before mutating state.
//! - Store APIs return semantic errors (`DuplicateId`, `NotFound`) rather than
//!   container-level failures.

pub mod record_store;
