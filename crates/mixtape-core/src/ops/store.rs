use std::collections::HashMap;

use crate::errors::{MixtapeError, Result};
use crate::model::{EntityKind, Playlist, Song, User};

/// In-memory store for Users, Songs and Playlists
///
/// HashMap-based and keyed by the identifier string as received. Not
/// thread-safe (no Arc/RwLock): the pipeline applies records one at a time
/// and must add synchronization before parallelizing stages.
///
/// Integrity-checked mutations live in `user_ops`, `song_ops` and
/// `playlist_ops`; the raw insert/remove helpers here perform no checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    /// Map of User ID to User
    pub(crate) users: HashMap<String, User>,
    /// Map of Song ID to Song
    pub(crate) songs: HashMap<String, Song>,
    /// Map of Playlist ID to Playlist
    pub(crate) playlists: HashMap<String, Playlist>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            songs: HashMap::new(),
            playlists: HashMap::new(),
        }
    }

    /// Get a User by ID
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user doesn't exist.
    pub fn get_user(&self, id: &str) -> Result<&User> {
        self.users.get(id).ok_or_else(|| not_found(EntityKind::User, id))
    }

    /// Get a Song by ID
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the song doesn't exist.
    pub fn get_song(&self, id: &str) -> Result<&Song> {
        self.songs.get(id).ok_or_else(|| not_found(EntityKind::Song, id))
    }

    /// Get a Playlist by ID
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the playlist doesn't exist.
    pub fn get_playlist(&self, id: &str) -> Result<&Playlist> {
        self.playlists
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Playlist, id))
    }

    pub(crate) fn get_playlist_mut(&mut self, id: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(id)
            .ok_or_else(|| not_found(EntityKind::Playlist, id))
    }

    pub fn contains_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn contains_song(&self, id: &str) -> bool {
        self.songs.contains_key(id)
    }

    pub fn contains_playlist(&self, id: &str) -> bool {
        self.playlists.contains_key(id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Visit every User, stopping at the first visitor error
    ///
    /// Order is unspecified and may differ between runs.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`; no further users are visited.
    pub fn for_each_user<E, F>(&self, visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(&User) -> std::result::Result<(), E>,
    {
        self.users.values().try_for_each(visit)
    }

    /// Visit every Song, stopping at the first visitor error
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`; no further songs are visited.
    pub fn for_each_song<E, F>(&self, visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(&Song) -> std::result::Result<(), E>,
    {
        self.songs.values().try_for_each(visit)
    }

    /// Visit every Playlist, stopping at the first visitor error
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`; no further playlists are visited.
    pub fn for_each_playlist<E, F>(&self, visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(&Playlist) -> std::result::Result<(), E>,
    {
        self.playlists.values().try_for_each(visit)
    }

    /// Insert a User without checks
    pub(crate) fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Insert a Song without checks
    pub(crate) fn insert_song(&mut self, song: Song) {
        self.songs.insert(song.id.clone(), song);
    }

    /// Insert a Playlist without checks
    pub(crate) fn insert_playlist(&mut self, playlist: Playlist) {
        self.playlists.insert(playlist.id.clone(), playlist);
    }

    /// Remove a Playlist without checks, returning it if present
    pub(crate) fn take_playlist(&mut self, id: &str) -> Option<Playlist> {
        self.playlists.remove(id)
    }
}

fn not_found(entity: EntityKind, id: &str) -> MixtapeError {
    MixtapeError::NotFound {
        entity,
        id: id.to_string(),
    }
}
