//! Error helpers for mixtape-ingest
//!
//! Every failure here is fatal to the run, so all helpers build one of
//! the fatal `MixtapeError` variants.

use std::fmt::Display;

use mixtape_core::MixtapeError;

pub use mixtape_core::errors::Result;

/// Create a transport error for a collection that could not be fetched
pub fn transport_error(resource: &str, message: impl Display) -> MixtapeError {
    MixtapeError::Transport {
        resource: resource.to_string(),
        message: message.to_string(),
    }
}

/// Classify a decoder error
///
/// Read failures surface through serde_json as I/O errors; those are
/// transport problems, everything else is malformed input.
pub fn decode_error(resource: &str, err: serde_json::Error) -> MixtapeError {
    if err.is_io() {
        transport_error(resource, err)
    } else {
        MixtapeError::Decode {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> MixtapeError {
    MixtapeError::Io {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}
