//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros,
//! the ingestion pipeline and the test capture layer.

// Field keys emitted by the logging macros and the pipeline. `tracing`
// takes field names as identifiers, so emitters spell them literally and
// readers (the test capture layer, log queries) look them up here.
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Stage counters
pub const FIELD_COLLECTION: &str = "collection";
pub const FIELD_INGESTED: &str = "ingested";
pub const FIELD_SKIPPED: &str = "skipped";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_PROGRESS: &str = "progress";
pub const EVENT_SKIP: &str = "skip";
