//! Single-session exchange format used to share sessions between devices.
//!
//! Input is untrusted text, so the import path checks field presence by
//! hand before deserializing and reports which part is missing.

use super::codec::PlayerWire;
use super::validate::validate_players;
use crate::errors::{AppResult, FieldScope, ValidationError};
use crate::models::{GameSession, PlayerRecord, fresh_id};
use crate::utils::time::{date_to_millis, from_millis, millis_to_date};
use serde::Serialize;
use serde_json::{Map, Value};

const SESSION_FIELDS: [&str; 5] = ["gameName", "gameDate", "startTime", "endTime", "players"];
const PLAYER_FIELDS: [&str; 3] = ["name", "score", "position"];

/// Exported shape: no id, no provenance flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeWire {
    game_name: String,
    game_date: i64,
    start_time: i64,
    end_time: i64,
    notes: String,
    players: Vec<PlayerWire>,
}

pub fn export_one(session: &GameSession) -> AppResult<String> {
    let wire = ExchangeWire {
        game_name: session.game_name.clone(),
        game_date: date_to_millis(session.game_date),
        start_time: session.start_time.timestamp_millis(),
        end_time: session.end_time.timestamp_millis(),
        notes: session.notes.clone(),
        players: session.players.iter().map(PlayerWire::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Parse and validate one shared session.
///
/// The result is tagged as imported and gets an id not present in
/// `existing`. Duplicate detection is left to the caller.
pub fn import_one(text: &str, existing: &[GameSession]) -> Result<GameSession, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyClipboard);
    }

    let root: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
    let obj = root
        .as_object()
        .ok_or_else(|| ValidationError::MalformedJson("expected a JSON object".into()))?;

    require_fields(obj, &SESSION_FIELDS, FieldScope::Session)?;

    let game_name = obj
        .get("gameName")
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::MalformedJson("gameName must be a string".into()))?
        .to_string();

    let game_date = millis_field(obj, "gameDate")
        .and_then(millis_to_date)
        .ok_or_else(|| ValidationError::InvalidTimestamp("gameDate".into()))?;
    let start_time = millis_field(obj, "startTime")
        .and_then(from_millis)
        .ok_or_else(|| ValidationError::InvalidTimestamp("startTime".into()))?;
    let end_time = millis_field(obj, "endTime")
        .and_then(from_millis)
        .ok_or_else(|| ValidationError::InvalidTimestamp("endTime".into()))?;

    let notes = obj
        .get("notes")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let raw_players = obj
        .get("players")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::MalformedJson("players must be a list".into()))?;

    if raw_players.is_empty() {
        return Err(ValidationError::NoPlayers);
    }

    let mut players = Vec::with_capacity(raw_players.len());
    for raw in raw_players {
        let p_obj = raw
            .as_object()
            .ok_or_else(|| ValidationError::MalformedJson("player must be an object".into()))?;
        require_fields(p_obj, &PLAYER_FIELDS, FieldScope::Player)?;

        let wire: PlayerWire = serde_json::from_value(raw.clone())
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        players.push(PlayerRecord::from(wire));
    }

    validate_players(&players)?;

    Ok(GameSession {
        id: fresh_id(existing),
        game_name,
        game_date,
        start_time,
        end_time,
        players,
        notes,
        is_imported: true,
    })
}

/// First stored session that the candidate duplicates, if any.
pub fn find_duplicate<'a>(
    candidate: &GameSession,
    existing: &'a [GameSession],
) -> Option<&'a GameSession> {
    existing.iter().find(|s| s.is_duplicate_of(candidate))
}

fn require_fields(
    obj: &Map<String, Value>,
    fields: &[&str],
    scope: FieldScope,
) -> Result<(), ValidationError> {
    match fields.iter().find(|f| !obj.contains_key(**f)) {
        Some(missing) => Err(ValidationError::MissingField {
            scope,
            field: missing.to_string(),
        }),
        None => Ok(()),
    }
}

fn millis_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}
