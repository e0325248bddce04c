use mixtape_core::ops::{song_ops, user_ops};
use mixtape_core::{Change, Playlist, Song, Store, User};
use serde_json::Value;

/// Create a store holding the given users and songs
///
/// Goes through the checked operations so fixtures obey the same integrity
/// rules as ingested data.
#[allow(dead_code)]
pub fn seeded_store(user_ids: &[&str], song_ids: &[&str]) -> Store {
    let mut store = Store::new();
    for id in user_ids {
        user_ops::add_user(&mut store, User::new(*id, format!("User {}", id)))
            .expect("fixture user should insert");
    }
    for id in song_ids {
        song_ops::add_song(&mut store, Song::new(*id, "Artist", format!("Song {}", id)))
            .expect("fixture song should insert");
    }
    store
}

#[allow(dead_code)]
pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[allow(dead_code)]
pub fn playlist(id: &str, user_id: &str, song_ids: &[&str]) -> Playlist {
    Playlist::new(id, user_id, ids(song_ids))
}

#[allow(dead_code)]
pub fn change(op: &str, path: &str, value: Option<Value>) -> Change {
    Change::new(op, path, value)
}

/// Collect all playlists sorted by id
#[allow(dead_code)]
pub fn playlists_sorted(store: &Store) -> Vec<Playlist> {
    let mut out = Vec::new();
    store
        .for_each_playlist(|p| {
            out.push(p.clone());
            Ok::<(), ()>(())
        })
        .expect("collecting playlists cannot fail");
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}
