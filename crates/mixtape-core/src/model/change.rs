use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A patch-style instruction against the playlist collection
///
/// `op` and `path` are kept as received; the change interpreter classifies
/// them. `value` is absent for removals, a playlist object for
/// `/playlists/-` and a song id string for `/playlists/{id}/song_ids/-`.
/// A missing `op` or `path` decodes as empty, so the record is skipped as
/// unrecognized rather than failing the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub op: String,

    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Change {
    pub fn new(op: impl Into<String>, path: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            value,
        }
    }
}
