use serde::{Deserialize, Serialize};

/// A track that playlists may reference
///
/// Songs are created once during bulk ingestion and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Decimal identifier, e.g. "7"
    pub id: String,

    pub artist: String,

    pub title: String,
}

impl Song {
    pub fn new(id: impl Into<String>, artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_song() {
        let song: Song =
            serde_json::from_str(r#"{"id":"1","artist":"Camila Cabello","title":"Never Be the Same"}"#)
                .unwrap();
        assert_eq!(song.artist, "Camila Cabello");
        assert_eq!(song.title, "Never Be the Same");
    }
}
