use serde::{Deserialize, Serialize};

/// A listener who may own playlists
///
/// Users are created once during bulk ingestion and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Decimal identifier, e.g. "1"
    pub id: String,

    /// Display name
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
