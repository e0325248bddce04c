//! Mixtape Core - in-memory mutation and integrity engine
//!
//! This crate provides the business logic of the mixtape ingester:
//! - User, Song, Playlist and Change models
//! - The entity `Store` and its integrity-checked operations
//! - `Command` inventory with the `apply()` entry point
//! - The change interpreter that maps patch records onto commands
//! - Error and logging facilities shared by the other crates
//!
//! Nothing here performs I/O; fetching, decoding and output live in
//! `mixtape-ingest`.

pub mod apply;
pub mod change;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

#[doc(hidden)]
pub use mixtape_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use change::{apply_change, ChangeOutcome, PayloadValidator, PlaylistSchema};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, MixtapeError, Result};
pub use model::{Change, EntityKind, Playlist, Song, User};
pub use ops::Store;
