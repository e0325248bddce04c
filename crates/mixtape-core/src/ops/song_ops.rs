use super::store::Store;
use crate::errors::{MixtapeError, Result};
use crate::model::{EntityKind, Song};
use crate::rules::validate_identifier;

/// Add a Song to the store
///
/// # Errors
/// * `InvalidIdentifier` - If the song ID is not a decimal u32
/// * `DuplicateIdentifier` - If a song with this ID already exists
///
/// The store is unchanged on error.
pub fn add_song(store: &mut Store, song: Song) -> Result<()> {
    validate_identifier(EntityKind::Song, &song.id)?;

    if store.contains_song(&song.id) {
        return Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::Song,
            id: song.id,
        });
    }

    store.insert_song(song);
    Ok(())
}
