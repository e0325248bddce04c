//! Command types representing every store mutation
//!
//! Bulk ingestion and the change interpreter both express their intent as a
//! `Command` and hand it to `apply()`.

use crate::model::{Playlist, Song, User};

/// Command enum representing all store mutations
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a new User
    AddUser { user: User },

    /// Insert a new Song
    AddSong { song: Song },

    /// Insert a new Playlist after referential checks
    AddPlaylist { playlist: Playlist },

    /// Delete a Playlist
    RemovePlaylist { playlist_id: String },

    /// Append a Song to a Playlist's track list
    AddSongToPlaylist {
        playlist_id: String,
        song_id: String,
    },
}

impl Command {
    /// Stable operation name for log fields
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::AddUser { .. } => "add_user",
            Command::AddSong { .. } => "add_song",
            Command::AddPlaylist { .. } => "add_playlist",
            Command::RemovePlaylist { .. } => "remove_playlist",
            Command::AddSongToPlaylist { .. } => "add_song_to_playlist",
        }
    }
}
