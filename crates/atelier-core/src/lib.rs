//! atelier-core
//!
//! Pure domain types: image payloads, iteration records, normalized
//! evaluations, and token accounting. No network dependency — this is the
//! shared vocabulary of the Atelier system.

pub mod error;
pub mod models;
