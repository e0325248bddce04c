use serde::{Deserialize, Serialize};

/// An ordered list of songs owned by a user
///
/// `song_ids` is in track order and may contain the same song more than
/// once. This is also the shape written to the output file, one playlist
/// per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Decimal identifier of this playlist
    pub id: String,

    /// Identifier of the owning User
    pub user_id: String,

    /// Song identifiers in track order (absent in input decodes as empty)
    #[serde(default)]
    pub song_ids: Vec<String>,
}

impl Playlist {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, song_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            song_ids,
        }
    }

    /// Append a song to the end of the track list
    pub(crate) fn push_song(&mut self, song_id: String) {
        self.song_ids.push(song_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_song_ids_decode_as_empty() {
        let playlist: Playlist = serde_json::from_str(r#"{"id":"1","user_id":"2"}"#).unwrap();
        assert!(playlist.song_ids.is_empty());
    }

    #[test]
    fn test_serialized_field_order() {
        let playlist = Playlist::new("1", "2", vec!["8".to_string(), "32".to_string()]);
        let json = serde_json::to_string(&playlist).unwrap();
        assert_eq!(json, r#"{"id":"1","user_id":"2","song_ids":["8","32"]}"#);
    }

    #[test]
    fn test_push_song_keeps_duplicates() {
        let mut playlist = Playlist::new("1", "2", vec!["8".to_string()]);
        playlist.push_song("8".to_string());
        assert_eq!(playlist.song_ids, vec!["8", "8"]);
    }
}
