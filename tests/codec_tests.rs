mod common;
use boardchamp::core::codec::{
    DEFAULT_GAME_NAME, DEFAULT_PLAYER_NAME, decode, decode_with_warnings, encode,
};
use boardchamp::errors::DecodeWarning;
use boardchamp::models::{GameSession, PlayerRecord};
use common::session;

fn sample(n: usize) -> Vec<GameSession> {
    (0..n)
        .map(|i| {
            let mut s = session(
                1_700_000_000_000 + i as i64,
                &format!("Game {i}"),
                &format!("2025-03-{:02}", i + 1),
                "20:00",
                if i % 2 == 0 { "23:15" } else { "01:10" },
            );
            s.notes = format!("note {i}");
            s.is_imported = i == 3;
            s
        })
        .collect()
}

#[test]
fn round_trip_preserves_sessions_and_order() {
    for n in [0, 1, 5] {
        let sessions = sample(n);
        let blob = encode(&sessions).unwrap();
        assert_eq!(decode(&blob), sessions, "round trip with {n} sessions");
    }
}

#[test]
fn encoded_fields_use_epoch_millis() {
    let s = session(42, "Catan", "2025-03-01", "20:00", "22:00");
    let blob = encode(std::slice::from_ref(&s)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let obj = &v[0];

    assert_eq!(obj["id"], 42);
    assert_eq!(obj["gameName"], "Catan");
    assert_eq!(obj["startTime"], s.start_time.timestamp_millis());
    assert_eq!(obj["endTime"], s.end_time.timestamp_millis());
    assert_eq!(obj["isImported"], false);
    assert_eq!(obj["players"][0]["name"], "Alice");
    assert_eq!(obj["players"][1]["position"], 2);
}

#[test]
fn empty_blob_decodes_to_empty_list() {
    assert!(decode("").is_empty());
    assert!(decode("   ").is_empty());
    assert!(decode("[]").is_empty());
}

#[test]
fn malformed_session_is_skipped() {
    let blob = r#"[
        {"id": 1, "gameName": "Chess", "gameDate": 0, "startTime": 0, "endTime": 3600000,
         "players": [{"name": "A", "score": 1, "position": 1}]},
        {"id": "not-a-number", "gameName": "Broken"}
    ]"#;

    let decoded = decode_with_warnings(blob);
    assert_eq!(decoded.sessions.len(), 1);
    assert_eq!(decoded.sessions[0].game_name, "Chess");
    assert_eq!(decoded.warnings.len(), 1);
    assert!(matches!(
        decoded.warnings[0],
        DecodeWarning::Session { index: 1, .. }
    ));
}

#[test]
fn missing_optional_fields_fall_back_to_defaults() {
    let blob = r#"[{"id": 7, "gameDate": 0, "startTime": 0, "endTime": 60000,
                    "players": [{"name": "Solo"}]}]"#;

    let sessions = decode(blob);
    assert_eq!(sessions.len(), 1);

    let s = &sessions[0];
    assert_eq!(s.game_name, DEFAULT_GAME_NAME);
    assert_eq!(s.notes, "");
    assert!(!s.is_imported);
    assert_eq!(s.players, vec![PlayerRecord::new("Solo", 0, 0)]);
}

#[test]
fn missing_players_list_is_empty() {
    let blob = r#"[{"id": 7, "gameName": "Go", "gameDate": 0, "startTime": 0, "endTime": 60000}]"#;
    let sessions = decode(blob);
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].players.is_empty());
}

#[test]
fn malformed_player_is_skipped_but_session_kept() {
    let blob = r#"[{"id": 9, "gameName": "Azul", "gameDate": 0, "startTime": 0, "endTime": 60000,
                    "players": [{"name": "Ok", "score": 3, "position": 1},
                                {"score": 4, "position": 2},
                                {"name": "Bad", "score": "lots"}]}]"#;

    let decoded = decode_with_warnings(blob);
    assert_eq!(decoded.sessions.len(), 1);
    assert_eq!(
        decoded.sessions[0].players,
        vec![
            PlayerRecord::new("Ok", 3, 1),
            PlayerRecord::new(DEFAULT_PLAYER_NAME, 4, 2),
        ]
    );
    assert_eq!(decoded.warnings.len(), 1);
    assert!(
        decoded
            .warnings
            .iter()
            .all(|w| matches!(w, DecodeWarning::Player { session: 0, .. }))
    );
}

#[test]
fn unreadable_blob_yields_empty_list_with_warning() {
    let decoded = decode_with_warnings("{not json");
    assert!(decoded.sessions.is_empty());
    assert!(matches!(decoded.warnings.as_slice(), [DecodeWarning::Blob(_)]));

    // an object instead of a list is unreadable too
    let decoded = decode_with_warnings(r#"{"id": 1}"#);
    assert!(decoded.sessions.is_empty());
    assert_eq!(decoded.warnings.len(), 1);
}

#[test]
fn stored_player_without_name_is_kept_as_unknown() {
    let blob = r#"[{"id": 3, "gameName": "Azul", "gameDate": 0, "startTime": 0, "endTime": 60000,
                    "players": [{"score": 3, "position": 1},
                                {"name": "B", "score": 1, "position": 2}]}]"#;

    let decoded = decode_with_warnings(blob);
    assert!(decoded.warnings.is_empty());

    let names: Vec<&str> = decoded.sessions[0]
        .players
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Unknown", "B"]);
    assert_eq!(decoded.sessions[0].players[0].score, 3);
}
