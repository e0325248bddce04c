use super::store::Store;
use crate::errors::{MixtapeError, Result};
use crate::model::{EntityKind, Playlist};
use crate::rules::validate_identifier;

/// Add a Playlist to the store
///
/// All checks run before the insert, in this order, and the first failure
/// is returned:
/// 1. playlist ID is well-formed and unused
/// 2. owning user ID is well-formed and the user exists
/// 3. every referenced song ID is well-formed and the song exists
///
/// # Errors
/// * `InvalidIdentifier` - If any of the IDs is not a decimal u32
/// * `DuplicateIdentifier` - If a playlist with this ID already exists
/// * `NotFound` - If the owning user or a referenced song doesn't exist
///
/// The store is unchanged on error.
pub fn add_playlist(store: &mut Store, playlist: Playlist) -> Result<()> {
    validate_identifier(EntityKind::Playlist, &playlist.id)?;
    if store.contains_playlist(&playlist.id) {
        return Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::Playlist,
            id: playlist.id,
        });
    }

    validate_identifier(EntityKind::User, &playlist.user_id)?;
    store.get_user(&playlist.user_id)?;

    for song_id in &playlist.song_ids {
        validate_identifier(EntityKind::Song, song_id)?;
        store.get_song(song_id)?;
    }

    store.insert_playlist(playlist);
    Ok(())
}

/// Remove a Playlist from the store
///
/// The playlist is deleted outright; its ID may be reused afterwards.
///
/// # Errors
/// * `InvalidIdentifier` - If the playlist ID is not a decimal u32
/// * `NotFound` - If the playlist doesn't exist
pub fn remove_playlist(store: &mut Store, playlist_id: &str) -> Result<Playlist> {
    validate_identifier(EntityKind::Playlist, playlist_id)?;

    store
        .take_playlist(playlist_id)
        .ok_or_else(|| MixtapeError::NotFound {
            entity: EntityKind::Playlist,
            id: playlist_id.to_string(),
        })
}

/// Append a song to the end of a playlist's track list
///
/// Duplicates are allowed; order is append order.
///
/// # Errors
/// * `InvalidIdentifier` - If either ID is not a decimal u32
/// * `NotFound` - If the playlist or the song doesn't exist
///
/// The playlist is unchanged on error.
pub fn add_song_to_playlist(store: &mut Store, playlist_id: &str, song_id: &str) -> Result<()> {
    validate_identifier(EntityKind::Playlist, playlist_id)?;
    store.get_playlist(playlist_id)?;

    validate_identifier(EntityKind::Song, song_id)?;
    store.get_song(song_id)?;

    store
        .get_playlist_mut(playlist_id)?
        .push_song(song_id.to_string());
    Ok(())
}
