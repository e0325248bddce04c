#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Entity store integrity
///
/// Duplicate detection, referential checks and atomicity of the checked
/// store operations.
mod common;

use common::{ids, playlist, playlists_sorted, seeded_store};
use mixtape_core::ops::{playlist_ops, song_ops, user_ops};
use mixtape_core::{apply, Command, EntityKind, MixtapeError, Song, Store, User};

#[test]
fn test_fresh_user_inserts_once_then_duplicates() {
    // GIVEN an empty store
    let mut store = Store::new();

    // WHEN the same user is added twice
    user_ops::add_user(&mut store, User::new("1", "Albin Jaye")).expect("first insert");
    let snapshot = store.clone();
    let result = user_ops::add_user(&mut store, User::new("1", "Someone Else"));

    // THEN the second fails and the store equals the single-insert state
    assert_eq!(
        result,
        Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::User,
            id: "1".to_string(),
        })
    );
    assert_eq!(store, snapshot);
    assert_eq!(store.get_user("1").unwrap().name, "Albin Jaye");
}

#[test]
fn test_duplicate_song_leaves_store_unchanged() {
    let mut store = seeded_store(&[], &["3"]);
    let snapshot = store.clone();

    let result = song_ops::add_song(&mut store, Song::new("3", "Other", "Other"));

    assert!(matches!(
        result,
        Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::Song,
            ..
        })
    ));
    assert_eq!(store, snapshot);
}

#[test]
fn test_invalid_identifiers_are_rejected() {
    let mut store = Store::new();

    for id in ["", "abc", "-1", "+1", " 1", "4294967296"] {
        let result = user_ops::add_user(&mut store, User::new(id, "Name"));
        assert_eq!(
            result,
            Err(MixtapeError::InvalidIdentifier {
                entity: EntityKind::User,
                id: id.to_string(),
            }),
            "id {:?}",
            id
        );
    }
    assert_eq!(store.user_count(), 0);
}

#[test]
fn test_playlist_with_missing_user_is_rejected() {
    let mut store = seeded_store(&["1"], &["1"]);

    let result = playlist_ops::add_playlist(&mut store, playlist("1", "2", &["1"]));

    assert_eq!(
        result,
        Err(MixtapeError::NotFound {
            entity: EntityKind::User,
            id: "2".to_string(),
        })
    );
    assert_eq!(store.playlist_count(), 0);
}

#[test]
fn test_playlist_with_any_missing_song_is_rejected() {
    let mut store = seeded_store(&["1"], &["1", "2"]);

    let result = playlist_ops::add_playlist(&mut store, playlist("1", "1", &["1", "2", "3"]));

    assert_eq!(
        result,
        Err(MixtapeError::NotFound {
            entity: EntityKind::Song,
            id: "3".to_string(),
        })
    );
    assert_eq!(store.playlist_count(), 0);
}

#[test]
fn test_playlist_duplicate_id() {
    let mut store = seeded_store(&["1"], &["1"]);
    playlist_ops::add_playlist(&mut store, playlist("1", "1", &["1"])).unwrap();

    let result = playlist_ops::add_playlist(&mut store, playlist("1", "1", &[]));

    assert!(matches!(
        result,
        Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::Playlist,
            ..
        })
    ));
    assert_eq!(store.get_playlist("1").unwrap().song_ids, ids(&["1"]));
}

#[test]
fn test_append_five_then_seven() {
    // GIVEN playlist "1" with no songs
    let mut store = seeded_store(&["1"], &["5", "7"]);
    playlist_ops::add_playlist(&mut store, playlist("1", "1", &[])).unwrap();

    // WHEN songs 5 and 7 are appended
    playlist_ops::add_song_to_playlist(&mut store, "1", "5").unwrap();
    playlist_ops::add_song_to_playlist(&mut store, "1", "7").unwrap();

    // THEN the track list is in append order
    assert_eq!(store.get_playlist("1").unwrap().song_ids, ids(&["5", "7"]));
}

#[test]
fn test_append_duplicate_song_is_allowed() {
    let mut store = seeded_store(&["1"], &["5"]);
    playlist_ops::add_playlist(&mut store, playlist("1", "1", &["5"])).unwrap();

    playlist_ops::add_song_to_playlist(&mut store, "1", "5").unwrap();

    assert_eq!(store.get_playlist("1").unwrap().song_ids, ids(&["5", "5"]));
}

#[test]
fn test_append_to_missing_playlist() {
    let mut store = seeded_store(&["1"], &["5"]);

    let result = playlist_ops::add_song_to_playlist(&mut store, "8", "5");

    assert_eq!(
        result,
        Err(MixtapeError::NotFound {
            entity: EntityKind::Playlist,
            id: "8".to_string(),
        })
    );
}

#[test]
fn test_remove_twice_fails_second_time() {
    let mut store = seeded_store(&["1"], &["1"]);
    playlist_ops::add_playlist(&mut store, playlist("2", "1", &["1"])).unwrap();

    playlist_ops::remove_playlist(&mut store, "2").unwrap();
    let result = playlist_ops::remove_playlist(&mut store, "2");

    assert_eq!(
        result,
        Err(MixtapeError::NotFound {
            entity: EntityKind::Playlist,
            id: "2".to_string(),
        })
    );
}

#[test]
fn test_removed_playlist_id_can_be_reused() {
    let mut store = seeded_store(&["1"], &["1", "2"]);
    playlist_ops::add_playlist(&mut store, playlist("2", "1", &["1"])).unwrap();
    playlist_ops::remove_playlist(&mut store, "2").unwrap();

    playlist_ops::add_playlist(&mut store, playlist("2", "1", &["2"])).unwrap();

    assert_eq!(store.get_playlist("2").unwrap().song_ids, ids(&["2"]));
}

#[test]
fn test_apply_routes_every_command() {
    let mut store = Store::new();

    apply(
        &mut store,
        Command::AddUser {
            user: User::new("1", "A"),
        },
    )
    .unwrap();
    apply(
        &mut store,
        Command::AddSong {
            song: Song::new("1", "X", "Y"),
        },
    )
    .unwrap();
    apply(
        &mut store,
        Command::AddPlaylist {
            playlist: playlist("1", "1", &[]),
        },
    )
    .unwrap();
    apply(
        &mut store,
        Command::AddSongToPlaylist {
            playlist_id: "1".to_string(),
            song_id: "1".to_string(),
        },
    )
    .unwrap();

    assert_eq!(playlists_sorted(&store), vec![playlist("1", "1", &["1"])]);

    apply(
        &mut store,
        Command::RemovePlaylist {
            playlist_id: "1".to_string(),
        },
    )
    .unwrap();
    assert!(playlists_sorted(&store).is_empty());
}
