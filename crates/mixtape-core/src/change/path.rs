//! Change path classification
//!
//! Paths are JSON Pointers (RFC 6901). They are split into unescaped
//! segments and matched against the three shapes the interpreter knows:
//!
//! | path                         | shape                  |
//! |------------------------------|------------------------|
//! | `/playlists/-`               | `PlaylistAppend`       |
//! | `/playlists/{id}/song_ids/-` | `PlaylistSongAppend`   |
//! | `/playlists/{id}`            | `Playlist`             |
//!
//! Anything else is `Unrecognized`. The `{id}` segment is extracted
//! verbatim; the store decides whether it is a valid identifier.

const PLAYLISTS: &str = "playlists";
const SONG_IDS: &str = "song_ids";
const APPEND: &str = "-";

/// Structured form of a change path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePath {
    /// Append to the playlist collection
    PlaylistAppend,
    /// Append to one playlist's song id list
    PlaylistSongAppend { playlist_id: String },
    /// One playlist by id
    Playlist { playlist_id: String },
    /// No known shape
    Unrecognized,
}

impl ChangePath {
    /// Classify a raw path string
    pub fn parse(path: &str) -> Self {
        let Some(segments) = split_pointer(path) else {
            return ChangePath::Unrecognized;
        };
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [PLAYLISTS, APPEND] => ChangePath::PlaylistAppend,
            [PLAYLISTS, id, SONG_IDS, APPEND] if is_id_segment(id) => {
                ChangePath::PlaylistSongAppend {
                    playlist_id: id.to_string(),
                }
            }
            [PLAYLISTS, id] if is_id_segment(id) => ChangePath::Playlist {
                playlist_id: id.to_string(),
            },
            _ => ChangePath::Unrecognized,
        }
    }
}

fn is_id_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != APPEND
}

/// Split a pointer into unescaped segments; `None` unless it starts with '/'
fn split_pointer(pointer: &str) -> Option<Vec<String>> {
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(unescape_segment).collect())
}

fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    // ~1 before ~0 so "~01" decodes to "~1"
    segment.replace("~1", "/").replace("~0", "~")
}
