//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep front ends (CLI or otherwise) decoupled from storage details.

pub mod tracker_service;
