//! Ingestion pipeline
//!
//! Stages run strictly in order: Users, Songs, Playlists, Changes. Bulk
//! stages are all-or-nothing for the run: the first bad record aborts.
//! The change stage skips bad changes and only aborts on errors that are
//! fatal wherever they occur (`MixtapeError::is_fatal`).

use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::info_span;

use mixtape_core_types::schema::{EVENT_PROGRESS, EVENT_SKIP};
use mixtape_core_types::RunId;
use mixtape_core::{
    apply, apply_change, log_op_end, log_op_error, log_op_start, Change, ChangeOutcome, Command,
    PayloadValidator, Playlist, PlaylistSchema, Song, Store, User,
};

use crate::collection::Collection;
use crate::errors::Result;
use crate::source::Source;
use crate::stream::stream_records;

/// Records between progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Counts for one finished stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub collection: Collection,
    /// Records applied to the store
    pub ingested: u64,
    /// Changes skipped; always zero for bulk stages
    pub skipped: u64,
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub run_id: RunId,
    pub stages: Vec<StageReport>,
}

impl IngestReport {
    pub fn stage(&self, collection: Collection) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.collection == collection)
    }
}

/// Drives a `Source` into a `Store`
///
/// # Example
///
/// ```no_run
/// use mixtape_ingest::{DirSource, Ingester};
///
/// let mut ingester = Ingester::new(Box::new(DirSource::new("data")));
/// let report = ingester.run().unwrap();
/// println!("{} stages", report.stages.len());
/// ```
pub struct Ingester {
    source: Box<dyn Source>,
    validator: Box<dyn PayloadValidator>,
    store: Store,
    progress_interval: u64,
}

impl Ingester {
    /// Create an ingester with an empty store and the playlist schema
    pub fn new(source: Box<dyn Source>) -> Self {
        Self {
            source,
            validator: Box::new(PlaylistSchema),
            store: Store::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_validator(mut self, validator: Box<dyn PayloadValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Zero disables progress lines
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Run all four stages in order
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; later stages are not started.
    pub fn run(&mut self) -> Result<IngestReport> {
        let run_id = RunId::new();
        let span = info_span!("ingest_run", run_id = %run_id);
        let _guard = span.enter();

        let stages = vec![
            self.ingest_users()?,
            self.ingest_songs()?,
            self.ingest_playlists()?,
            self.ingest_changes()?,
        ];

        Ok(IngestReport { run_id, stages })
    }

    /// Bulk-load users; any invalid or duplicate user is fatal
    ///
    /// # Errors
    ///
    /// Returns the first transport, decode or integrity failure.
    pub fn ingest_users(&mut self) -> Result<StageReport> {
        self.ingest_bulk(Collection::Users, |user: User| Command::AddUser { user })
    }

    /// Bulk-load songs; any invalid or duplicate song is fatal
    ///
    /// # Errors
    ///
    /// Returns the first transport, decode or integrity failure.
    pub fn ingest_songs(&mut self) -> Result<StageReport> {
        self.ingest_bulk(Collection::Songs, |song: Song| Command::AddSong { song })
    }

    /// Bulk-load playlists; a missing user or song is fatal
    ///
    /// # Errors
    ///
    /// Returns the first transport, decode or integrity failure.
    pub fn ingest_playlists(&mut self) -> Result<StageReport> {
        self.ingest_bulk(Collection::Playlists, |playlist: Playlist| {
            Command::AddPlaylist { playlist }
        })
    }

    /// Apply changes, skipping the ones that fail
    ///
    /// # Errors
    ///
    /// Returns transport or decode failures, or any other error for which
    /// `MixtapeError::is_fatal` holds.
    pub fn ingest_changes(&mut self) -> Result<StageReport> {
        let collection = Collection::Changes;
        let op = collection.op_name();
        let store = &mut self.store;
        let validator = self.validator.as_ref();
        let interval = self.progress_interval;

        let report = run_stage(self.source.as_ref(), collection, |change: Change, seen| {
            report_progress(collection, seen, interval);
            match apply_change(store, &change, validator) {
                ChangeOutcome::Applied { .. } => Ok(Disposition::Applied),
                ChangeOutcome::Skipped { error } if error.is_fatal() => Err(error),
                ChangeOutcome::Skipped { error } => {
                    tracing::warn!(
                        op,
                        event = EVENT_SKIP,
                        err.code = error.kind().code(),
                        change.op = %change.op,
                        change.path = %change.path,
                        "skipping change: {}",
                        error
                    );
                    Ok(Disposition::Skipped)
                }
            }
        })?;

        tracing::info!(
            "Applied {} {}, skipped {}",
            report.ingested,
            collection.label(),
            report.skipped
        );
        Ok(report)
    }

    fn ingest_bulk<T, F>(&mut self, collection: Collection, to_command: F) -> Result<StageReport>
    where
        T: DeserializeOwned + Send + 'static,
        F: Fn(T) -> Command,
    {
        let store = &mut self.store;
        let interval = self.progress_interval;

        let report = run_stage(self.source.as_ref(), collection, |record: T, seen| {
            apply(store, to_command(record))?;
            report_progress(collection, seen, interval);
            Ok(Disposition::Applied)
        })?;

        tracing::info!("Ingested {} {}", report.ingested, collection.label());
        Ok(report)
    }
}

/// What happened to one consumed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Applied,
    Skipped,
}

/// Stream one collection through `consume` with start/end logging
///
/// `consume` receives each record and its 1-based position.
fn run_stage<T, F>(
    source: &dyn Source,
    collection: Collection,
    mut consume: F,
) -> Result<StageReport>
where
    T: DeserializeOwned + Send + 'static,
    F: FnMut(T, u64) -> Result<Disposition>,
{
    let op = collection.op_name();
    let start = Instant::now();
    log_op_start!(op, collection = collection.file_name());

    let mut seen = 0;
    let mut skipped = 0;
    let result = source.open(collection).and_then(|reader| {
        stream_records(reader, &source.locate(collection), |record: T| {
            seen += 1;
            if consume(record, seen)? == Disposition::Skipped {
                skipped += 1;
            }
            Ok(())
        })
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(count) => {
            let report = StageReport {
                collection,
                ingested: count - skipped,
                skipped,
            };
            log_op_end!(
                op,
                duration_ms = duration_ms,
                ingested = report.ingested,
                skipped = report.skipped
            );
            Ok(report)
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms, record = seen);
            Err(err)
        }
    }
}

fn report_progress(collection: Collection, seen: u64, interval: u64) {
    if interval > 0 && seen % interval == 0 {
        tracing::info!(
            op = collection.op_name(),
            event = EVENT_PROGRESS,
            count = seen,
            "{} {} so far",
            seen,
            collection.label()
        );
    }
}
