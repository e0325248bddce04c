//! Change interpreter
//!
//! Classification for `op == "add"`, first match wins:
//! 1. `/playlists/-` with a playlist object value
//! 2. `/playlists/{id}/song_ids/-` with a song id string value
//!
//! For `op == "remove"`: `/playlists/{id}`.
//!
//! Every other combination is `UnrecognizedChange`. The interpreter is
//! stateless; nothing carries over from one change to the next.

use serde::Deserialize;
use serde_json::Value;

use super::path::ChangePath;
use super::validator::PayloadValidator;
use crate::apply::apply;
use crate::commands::Command;
use crate::errors::{MixtapeError, Result};
use crate::model::{Change, Playlist};
use crate::ops::Store;

/// Known operation verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    Add,
    Remove,
}

impl ChangeOp {
    /// Parse a verb; `None` for anything but "add" and "remove"
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "add" => Some(ChangeOp::Add),
            "remove" => Some(ChangeOp::Remove),
            _ => None,
        }
    }
}

/// Result of applying one change
///
/// Skips are values, not errors: the caller records them and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOutcome {
    /// The change was applied; `op` is the command's operation name
    Applied { op: &'static str },
    /// The change was rejected and the store left untouched
    Skipped { error: MixtapeError },
}

impl ChangeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ChangeOutcome::Applied { .. })
    }
}

/// Translate a change into exactly one store command
///
/// # Errors
/// * `UnrecognizedChange` - If the op/path pair matches no known shape
/// * `MissingValue` - If a required value is absent or null
/// * `InvalidValue` - If the value has the wrong JSON type
/// * `SchemaInvalid` - If a playlist payload fails `validator`
pub fn interpret(change: &Change, validator: &dyn PayloadValidator) -> Result<Command> {
    let op = ChangeOp::parse(&change.op).ok_or_else(|| unrecognized(change))?;

    match (op, ChangePath::parse(&change.path)) {
        (ChangeOp::Add, ChangePath::PlaylistAppend) => {
            let playlist = decode_playlist(change.value.as_ref(), validator)?;
            Ok(Command::AddPlaylist { playlist })
        }
        (ChangeOp::Add, ChangePath::PlaylistSongAppend { playlist_id }) => {
            let song_id = decode_song_id(change.value.as_ref())?;
            Ok(Command::AddSongToPlaylist {
                playlist_id,
                song_id,
            })
        }
        (ChangeOp::Remove, ChangePath::Playlist { playlist_id }) => {
            Ok(Command::RemovePlaylist { playlist_id })
        }
        _ => Err(unrecognized(change)),
    }
}

/// Interpret and apply one change, reporting instead of failing
///
/// # Example
///
/// ```
/// use mixtape_core::{apply_change, Change, ChangeOutcome, PlaylistSchema, Store};
///
/// let mut store = Store::new();
/// let change = Change::new("remove", "/playlists/1", None);
/// let outcome = apply_change(&mut store, &change, &PlaylistSchema);
/// assert!(matches!(outcome, ChangeOutcome::Skipped { .. }));
/// ```
pub fn apply_change(
    store: &mut Store,
    change: &Change,
    validator: &dyn PayloadValidator,
) -> ChangeOutcome {
    let result = interpret(change, validator).and_then(|cmd| {
        let op = cmd.op_name();
        apply(store, cmd).map(|()| op)
    });

    match result {
        Ok(op) => ChangeOutcome::Applied { op },
        Err(error) => ChangeOutcome::Skipped { error },
    }
}

fn decode_playlist(value: Option<&Value>, validator: &dyn PayloadValidator) -> Result<Playlist> {
    let payload = present(value).ok_or(MixtapeError::MissingValue { what: "playlist" })?;

    validator.validate_playlist(payload)?;

    Playlist::deserialize(payload).map_err(|e| MixtapeError::InvalidValue {
        what: "playlist",
        reason: e.to_string(),
    })
}

fn decode_song_id(value: Option<&Value>) -> Result<String> {
    match present(value) {
        None => Err(MixtapeError::MissingValue { what: "song ID" }),
        Some(Value::String(song_id)) => Ok(song_id.clone()),
        Some(_) => Err(MixtapeError::InvalidValue {
            what: "song ID",
            reason: "expected a string".to_string(),
        }),
    }
}

/// A JSON null counts as absent
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn unrecognized(change: &Change) -> MixtapeError {
    MixtapeError::UnrecognizedChange {
        op: change.op.clone(),
        path: change.path.clone(),
    }
}
