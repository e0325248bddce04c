use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;

use mixtape_core::MixtapeError;
use mixtape_ingest::{Collection, Source};

/// In-memory collection bodies keyed by collection
///
/// A collection without a body behaves like a missing file.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemorySource {
    bodies: HashMap<Collection, String>,
}

#[allow(dead_code)]
impl MemorySource {
    pub fn new(users: &str, songs: &str, playlists: &str, changes: &str) -> Self {
        let mut bodies = HashMap::new();
        bodies.insert(Collection::Users, users.to_string());
        bodies.insert(Collection::Songs, songs.to_string());
        bodies.insert(Collection::Playlists, playlists.to_string());
        bodies.insert(Collection::Changes, changes.to_string());
        Self { bodies }
    }

    pub fn without(mut self, collection: Collection) -> Self {
        self.bodies.remove(&collection);
        self
    }
}

impl Source for MemorySource {
    fn open(&self, collection: Collection) -> Result<Box<dyn Read + Send>, MixtapeError> {
        let body = self
            .bodies
            .get(&collection)
            .ok_or_else(|| MixtapeError::Transport {
                resource: self.locate(collection),
                message: "not found".to_string(),
            })?;
        Ok(Box::new(Cursor::new(body.clone().into_bytes())))
    }

    fn locate(&self, collection: Collection) -> String {
        format!("memory://{}", collection.file_name())
    }
}

/// Write the four collection files into `dir`
#[allow(dead_code)]
pub fn write_collections(dir: &Path, users: &str, songs: &str, playlists: &str, changes: &str) {
    for (collection, body) in [
        (Collection::Users, users),
        (Collection::Songs, songs),
        (Collection::Playlists, playlists),
        (Collection::Changes, changes),
    ] {
        std::fs::write(dir.join(collection.file_name()), body).expect("write fixture");
    }
}

/// Output lines sorted, since playlist order is unspecified
#[allow(dead_code)]
pub fn sorted_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    lines.sort();
    lines
}

#[allow(dead_code)]
pub const USERS: &str = r#"[{"id":"1","name":"Albin Jaye"},{"id":"2","name":"Dipika Crescentia"}]"#;
#[allow(dead_code)]
pub const SONGS: &str = r#"[
  {"id":"1","artist":"Camila Cabello","title":"Never Be the Same"},
  {"id":"2","artist":"Zedd","title":"The Middle"},
  {"id":"3","artist":"The Weeknd","title":"Pray For Me"}
]"#;
#[allow(dead_code)]
pub const PLAYLISTS: &str = r#"[{"id":"1","user_id":"2","song_ids":["1","2"]}]"#;
