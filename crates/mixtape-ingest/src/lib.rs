//! Mixtape Ingest - fetching, decoding and writing collections
//!
//! Sits between the outside world and `mixtape-core`:
//! - `Source` implementations that open a collection by name (HTTP or a
//!   local directory)
//! - An incremental decoder accepting a JSON array or concatenated values
//! - A single-slot producer/consumer stream so decoding never outruns
//!   the store
//! - The `Ingester` pipeline and its per-stage reports
//! - Line-delimited JSON output of the final playlists
//! - A static file server for local data

pub mod collection;
pub mod decode;
pub mod errors;
pub mod output;
pub mod pipeline;
pub mod serve;
pub mod source;
pub mod stream;

pub use collection::Collection;
pub use output::{write_playlists, write_playlists_file};
pub use pipeline::{IngestReport, Ingester, StageReport};
pub use source::{source_for, DirSource, HttpSource, Source, TransportConfig};
