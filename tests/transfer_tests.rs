mod common;
use boardchamp::core::transfer::{export_one, find_duplicate, import_one};
use boardchamp::errors::{FieldScope, ValidationError};
use common::session;
use serde_json::Value;

const NO_PLAYERS: &str =
    r#"{"gameName":"Chess","gameDate":0,"startTime":0,"endTime":1000,"players":[]}"#;
const ONE_PLAYER: &str = r#"{"gameName":"Chess","gameDate":0,"startTime":0,"endTime":1000,
    "players":[{"name":"A","score":5,"position":1}]}"#;

#[test]
fn import_rejects_empty_player_list() {
    assert_eq!(import_one(NO_PLAYERS, &[]), Err(ValidationError::NoPlayers));
}

#[test]
fn import_accepts_single_valid_player() {
    let s = import_one(ONE_PLAYER, &[]).expect("valid session");

    assert!(s.is_imported);
    assert_eq!(s.game_name, "Chess");
    assert_eq!(s.start_time.timestamp_millis(), 0);
    assert_eq!(s.end_time.timestamp_millis(), 1000);
    assert_eq!(s.players.len(), 1);
    assert_eq!(s.players[0].name, "A");
    assert_eq!(s.players[0].score, 5);
    assert_eq!(s.notes, "");
}

#[test]
fn imported_id_avoids_existing_ids() {
    let first = import_one(ONE_PLAYER, &[]).unwrap();
    let existing = vec![session(first.id, "Chess", "2025-01-01", "10:00", "11:00")];

    let second = import_one(ONE_PLAYER, &existing).unwrap();
    assert_ne!(second.id, first.id);
}

#[test]
fn empty_input_is_reported() {
    assert_eq!(import_one("", &[]), Err(ValidationError::EmptyClipboard));
    assert_eq!(import_one("  \n", &[]), Err(ValidationError::EmptyClipboard));
}

#[test]
fn unparsable_input_is_malformed() {
    assert!(matches!(
        import_one("{gameName: Chess", &[]),
        Err(ValidationError::MalformedJson(_))
    ));
    assert!(matches!(
        import_one("[1, 2, 3]", &[]),
        Err(ValidationError::MalformedJson(_))
    ));
}

#[test]
fn missing_session_field_names_session_scope() {
    let text = r#"{"gameName":"Chess","gameDate":0,"startTime":0,"players":[]}"#;
    assert_eq!(
        import_one(text, &[]),
        Err(ValidationError::MissingField {
            scope: FieldScope::Session,
            field: "endTime".into(),
        })
    );
}

#[test]
fn missing_player_field_names_player_scope() {
    let text = r#"{"gameName":"Chess","gameDate":0,"startTime":0,"endTime":1000,
        "players":[{"name":"A","position":1}]}"#;
    let err = import_one(text, &[]).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingField {
            scope: FieldScope::Player,
            field: "score".into(),
        }
    );
    assert_eq!(err.to_string(), "Missing required field 'score' in player data");
}

#[test]
fn imported_players_are_validated() {
    let text = r#"{"gameName":"Chess","gameDate":0,"startTime":0,"endTime":1000,
        "players":[{"name":"A","score":5,"position":3}]}"#;
    assert!(matches!(
        import_one(text, &[]),
        Err(ValidationError::PositionOutOfRange { position: 3, .. })
    ));
}

#[test]
fn export_omits_id_and_import_flag() {
    let mut s = session(99, "Catan", "2025-02-10", "19:00", "21:30");
    s.notes = "close game".into();

    let text = export_one(&s).unwrap();
    let v: Value = serde_json::from_str(&text).unwrap();
    let obj = v.as_object().unwrap();

    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("isImported"));
    assert_eq!(obj["gameName"], "Catan");
    assert_eq!(obj["notes"], "close game");
    assert_eq!(obj["startTime"], s.start_time.timestamp_millis());
    assert_eq!(obj["players"].as_array().unwrap().len(), 2);
}

#[test]
fn exported_session_imports_as_duplicate() {
    let original = session(5, "Catan", "2025-02-10", "22:00", "01:00");
    let text = export_one(&original).unwrap();

    let existing = vec![original.clone()];
    let imported = import_one(&text, &existing).unwrap();

    assert_eq!(imported.game_date, original.game_date);
    assert_eq!(imported.end_time, original.end_time);
    assert_eq!(imported.players, original.players);
    assert_eq!(find_duplicate(&imported, &existing).map(|s| s.id), Some(5));
}

#[test]
fn sessions_at_other_times_are_not_duplicates() {
    let stored = session(5, "Catan", "2025-02-10", "19:00", "21:00");
    let other = session(6, "Catan", "2025-02-10", "19:00", "21:15");
    assert!(find_duplicate(&other, &[stored]).is_none());
}

#[test]
fn imported_player_still_needs_a_name() {
    let text = r#"{"gameName":"Chess","gameDate":0,"startTime":0,"endTime":1000,
        "players":[{"score":5,"position":1}]}"#;
    assert_eq!(
        import_one(text, &[]),
        Err(ValidationError::MissingField {
            scope: FieldScope::Player,
            field: "name".into(),
        })
    );
}
