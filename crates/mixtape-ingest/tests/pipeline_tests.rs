#![allow(clippy::unwrap_used, clippy::expect_used)]

/// End-to-end ingestion from in-memory and on-disk sources
mod common;

use common::{sorted_lines, write_collections, MemorySource, PLAYLISTS, SONGS, USERS};
use mixtape_core::change::AcceptAnyPayload;
use mixtape_core::{EntityKind, MixtapeError, PayloadValidator};
use serde_json::Value;
use mixtape_ingest::{write_playlists, write_playlists_file, Collection, DirSource, Ingester};

fn output_of(ingester: &Ingester) -> String {
    let mut out = Vec::new();
    write_playlists(ingester.store(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_minimal_end_to_end() {
    // GIVEN one user, one song, no playlists and one add-playlist change
    let source = MemorySource::new(
        r#"[{"id":"1","name":"A"}]"#,
        r#"[{"id":"1","artist":"X","title":"Y"}]"#,
        "[]",
        r#"[{"op":"add","path":"/playlists/-","value":{"id":"1","user_id":"1","song_ids":["1"]}}]"#,
    );
    let mut ingester = Ingester::new(Box::new(source));

    // WHEN the pipeline runs
    let report = ingester.run().unwrap();

    // THEN exactly that playlist is written
    assert_eq!(output_of(&ingester), "{\"id\":\"1\",\"user_id\":\"1\",\"song_ids\":[\"1\"]}\n");
    let changes = report.stage(Collection::Changes).unwrap();
    assert_eq!((changes.ingested, changes.skipped), (1, 0));
}

#[test]
fn test_stage_counts_and_mixed_changes() {
    let changes = r#"[
      {"op":"add","path":"/playlists/1/song_ids/-","value":"3"},
      {"op":"add","path":"/playlists/1/song_ids/-","value":"9"},
      {"op":"remove","path":"/playlists/1"},
      {"op":"add","path":"/playlists/-","value":{"id":"1","user_id":"1","song_ids":["3"]}},
      {"op":"add","path":"/playlists/-","value":{"id":"2","user_id":"7","song_ids":["3"]}},
      {"op":"move","path":"/playlists/2"}
    ]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, PLAYLISTS, changes)));

    let report = ingester.run().unwrap();

    let counts: Vec<_> = report
        .stages
        .iter()
        .map(|s| (s.collection, s.ingested, s.skipped))
        .collect();
    assert_eq!(
        counts,
        vec![
            (Collection::Users, 2, 0),
            (Collection::Songs, 3, 0),
            (Collection::Playlists, 1, 0),
            (Collection::Changes, 3, 3),
        ]
    );
    assert_eq!(
        output_of(&ingester),
        "{\"id\":\"1\",\"user_id\":\"1\",\"song_ids\":[\"3\"]}\n"
    );
}

#[test]
fn test_change_without_op_or_path_is_skipped() {
    let changes = r#"[
      {"path":"/playlists/1"},
      {"op":"remove"},
      {"op":"add","path":"/playlists/1/song_ids/-","value":"3"}
    ]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, PLAYLISTS, changes)));

    let report = ingester.run().unwrap();

    let changes = report.stage(Collection::Changes).unwrap();
    assert_eq!((changes.ingested, changes.skipped), (1, 2));
    assert_eq!(
        output_of(&ingester),
        "{\"id\":\"1\",\"user_id\":\"2\",\"song_ids\":[\"1\",\"2\",\"3\"]}\n"
    );
}

#[test]
fn test_duplicate_user_is_fatal() {
    let users = r#"[{"id":"1","name":"A"},{"id":"1","name":"B"}]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(users, SONGS, "[]", "[]")));

    let result = ingester.run();

    assert_eq!(
        result,
        Err(MixtapeError::DuplicateIdentifier {
            entity: EntityKind::User,
            id: "1".to_string(),
        })
    );
    assert_eq!(ingester.store().song_count(), 0, "later stages must not run");
}

#[test]
fn test_invalid_song_id_is_fatal() {
    let songs = r#"[{"id":"x1","artist":"A","title":"T"}]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, songs, "[]", "[]")));

    let result = ingester.run();

    assert!(matches!(
        result,
        Err(MixtapeError::InvalidIdentifier {
            entity: EntityKind::Song,
            ..
        })
    ));
}

#[test]
fn test_bulk_playlist_with_missing_song_is_fatal() {
    let playlists = r#"[{"id":"1","user_id":"1","song_ids":["1","42"]}]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, playlists, "[]")));

    let result = ingester.run();

    assert_eq!(
        result,
        Err(MixtapeError::NotFound {
            entity: EntityKind::Song,
            id: "42".to_string(),
        })
    );
    assert_eq!(ingester.store().playlist_count(), 0);
}

#[test]
fn test_bulk_playlist_without_song_ids_is_empty() {
    let playlists = r#"[{"id":"4","user_id":"1"}]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, playlists, "[]")));

    ingester.run().unwrap();

    assert_eq!(
        output_of(&ingester),
        "{\"id\":\"4\",\"user_id\":\"1\",\"song_ids\":[]}\n"
    );
}

#[test]
fn test_missing_collection_is_transport_failure() {
    let source = MemorySource::new(USERS, SONGS, PLAYLISTS, "[]").without(Collection::Songs);
    let mut ingester = Ingester::new(Box::new(source));

    let result = ingester.run();

    assert!(matches!(result, Err(MixtapeError::Transport { .. })));
    assert_eq!(ingester.store().user_count(), 2);
}

#[test]
fn test_malformed_changes_abort_the_run() {
    let changes = r#"[{"op":"remove","path":"/playlists/1"}, {"op": ]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, PLAYLISTS, changes)));

    let result = ingester.run();

    assert!(matches!(result, Err(MixtapeError::Decode { .. })));
}

#[test]
fn test_concatenated_framing() {
    let users = "{\"id\":\"1\",\"name\":\"A\"}\n{\"id\":\"2\",\"name\":\"B\"}\n";
    let changes = "{\"op\":\"remove\",\"path\":\"/playlists/1\"}";
    let mut ingester = Ingester::new(Box::new(MemorySource::new(users, SONGS, PLAYLISTS, changes)));

    let report = ingester.run().unwrap();

    assert_eq!(report.stage(Collection::Users).unwrap().ingested, 2);
    assert_eq!(ingester.store().playlist_count(), 0);
}

#[test]
fn test_custom_validator_is_used() {
    let changes = r#"[{"op":"add","path":"/playlists/-","value":{"id":"9","user_id":"1","song_ids":[]}}]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, "[]", changes)))
        .with_validator(Box::new(AcceptAnyPayload));

    ingester.run().unwrap();

    assert!(ingester.store().contains_playlist("9"));
}

/// Validator whose backing resource has gone away
struct UnreachableValidator;

impl PayloadValidator for UnreachableValidator {
    fn validate_playlist(&self, _payload: &Value) -> mixtape_core::Result<()> {
        Err(MixtapeError::Io {
            operation: "load playlist schema".to_string(),
            message: "no such file".to_string(),
        })
    }
}

#[test]
fn test_fatal_validator_error_aborts_changes() {
    let changes = r#"[
      {"op":"add","path":"/playlists/-","value":{"id":"5","user_id":"1","song_ids":["1"]}},
      {"op":"remove","path":"/playlists/1"}
    ]"#;
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, PLAYLISTS, changes)))
        .with_validator(Box::new(UnreachableValidator));

    let result = ingester.run();

    assert!(matches!(result, Err(MixtapeError::Io { .. })));
    assert!(ingester.store().contains_playlist("1"), "later changes must not run");
}

#[test]
fn test_progress_interval_does_not_change_results() {
    let mut ingester = Ingester::new(Box::new(MemorySource::new(USERS, SONGS, PLAYLISTS, "[]")))
        .with_progress_interval(1);

    let report = ingester.run().unwrap();

    assert_eq!(report.stage(Collection::Songs).unwrap().ingested, 3);
}

#[test]
fn test_directory_source_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let changes = r#"[
      {"op":"add","path":"/playlists/-","value":{"id":"2","user_id":"1","song_ids":["3","3"]}},
      {"op":"add","path":"/playlists/1/song_ids/-","value":"3"}
    ]"#;
    write_collections(dir.path(), USERS, SONGS, PLAYLISTS, changes);
    let output = dir.path().join("output.json");

    let mut ingester = Ingester::new(Box::new(DirSource::new(dir.path())));
    ingester.run().unwrap();
    let written = write_playlists_file(&ingester.into_store(), &output).unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        sorted_lines(&std::fs::read_to_string(&output).unwrap()),
        vec![
            "{\"id\":\"1\",\"user_id\":\"2\",\"song_ids\":[\"1\",\"2\",\"3\"]}".to_string(),
            "{\"id\":\"2\",\"user_id\":\"1\",\"song_ids\":[\"3\",\"3\"]}".to_string(),
        ]
    );
}
