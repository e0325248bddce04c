//! Single entry point for store mutations
//!
//! ## Atomicity Contract
//!
//! Every command validates completely before it mutates. If `apply()`
//! returns `Err`, the store is exactly as it was before the call.
//!
//! ## Example
//!
//! ```
//! use mixtape_core::{apply, Command, Store, User};
//!
//! let mut store = Store::new();
//! apply(&mut store, Command::AddUser { user: User::new("1", "Albin Jaye") }).unwrap();
//! assert_eq!(store.user_count(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{playlist_ops, song_ops, user_ops, Store};

/// Apply a command to the store
///
/// # Errors
///
/// Returns the first integrity violation reported by the underlying
/// operation (`InvalidIdentifier`, `DuplicateIdentifier` or `NotFound`).
/// The store is unchanged on error.
pub fn apply(state: &mut Store, cmd: Command) -> Result<()> {
    match cmd {
        Command::AddUser { user } => user_ops::add_user(state, user),

        Command::AddSong { song } => song_ops::add_song(state, song),

        Command::AddPlaylist { playlist } => playlist_ops::add_playlist(state, playlist),

        Command::RemovePlaylist { playlist_id } => {
            playlist_ops::remove_playlist(state, &playlist_id)?;
            Ok(())
        }

        Command::AddSongToPlaylist {
            playlist_id,
            song_id,
        } => playlist_ops::add_song_to_playlist(state, &playlist_id, &song_id),
    }
}
