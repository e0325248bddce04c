//! Core types shared across the mixtape crates
//!
//! - **Correlation types**: `RunId` tagging every log line of one ingestion run
//! - **Schema constants**: canonical field keys and event names for structured logs

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
