//! Playlist payload validation
//!
//! `PayloadValidator` is the seam for structural validation of
//! `add /playlists/-` payloads. It is injected into `apply_change()` so
//! callers can tighten or relax the accepted shape without touching the
//! interpreter.

use serde_json::{Map, Value};

use crate::errors::{MixtapeError, Result};

/// Structural check run on a raw playlist payload before it is decoded
pub trait PayloadValidator {
    /// Validate a playlist payload
    ///
    /// # Errors
    ///
    /// Returns `SchemaInvalid` describing the first violation found. An
    /// error for which `MixtapeError::is_fatal` holds stops the change
    /// stage instead of skipping the change.
    fn validate_playlist(&self, payload: &Value) -> Result<()>;
}

/// The playlist patch schema
///
/// An object with exactly these properties:
/// - `id`: string
/// - `user_id`: string
/// - `song_ids`: array of strings with at least one entry
///
/// Identifier format is left to the store, which reports
/// `InvalidIdentifier` for malformed ids.
///
/// # Example
/// ```
/// use mixtape_core::change::{PayloadValidator, PlaylistSchema};
/// use serde_json::json;
///
/// let schema = PlaylistSchema;
/// assert!(schema
///     .validate_playlist(&json!({"id": "1", "user_id": "2", "song_ids": ["3"]}))
///     .is_ok());
/// assert!(schema.validate_playlist(&json!({"id": "1"})).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistSchema;

const ALLOWED_PROPERTIES: [&str; 3] = ["id", "user_id", "song_ids"];

impl PayloadValidator for PlaylistSchema {
    fn validate_playlist(&self, payload: &Value) -> Result<()> {
        let object = payload
            .as_object()
            .ok_or_else(|| schema_error(format!("expected an object, got {}", type_name(payload))))?;

        if let Some(extra) = object
            .keys()
            .find(|key| !ALLOWED_PROPERTIES.contains(&key.as_str()))
        {
            return Err(schema_error(format!(
                "additional property '{}' is not allowed",
                extra
            )));
        }

        require_string(object, "id")?;
        require_string(object, "user_id")?;

        let song_ids = object
            .get("song_ids")
            .ok_or_else(|| schema_error("missing required property 'song_ids'".to_string()))?
            .as_array()
            .ok_or_else(|| schema_error("/song_ids: expected an array".to_string()))?;

        if song_ids.is_empty() {
            return Err(schema_error(
                "/song_ids: a new playlist must contain at least one song".to_string(),
            ));
        }

        if let Some((index, value)) = song_ids.iter().enumerate().find(|(_, v)| !v.is_string()) {
            return Err(schema_error(format!(
                "/song_ids/{}: expected a string, got {}",
                index,
                type_name(value)
            )));
        }

        Ok(())
    }
}

/// Validator that accepts any payload; decoding still applies
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyPayload;

impl PayloadValidator for AcceptAnyPayload {
    fn validate_playlist(&self, _payload: &Value) -> Result<()> {
        Ok(())
    }
}

fn require_string(object: &Map<String, Value>, key: &str) -> Result<()> {
    match object.get(key) {
        None => Err(schema_error(format!("missing required property '{}'", key))),
        Some(Value::String(_)) => Ok(()),
        Some(other) => Err(schema_error(format!(
            "/{}: expected a string, got {}",
            key,
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn schema_error(reason: String) -> MixtapeError {
    MixtapeError::SchemaInvalid { reason }
}
