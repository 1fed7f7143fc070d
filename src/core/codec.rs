//! JSON encoding of the session history blob.
//!
//! The history lives in one text value. Decoding is lenient: a damaged
//! session or player is dropped with a [`DecodeWarning`] and everything else
//! still loads.

use crate::errors::{AppResult, DecodeWarning};
use crate::models::{GameSession, PlayerRecord};
use crate::ui::messages::warning;
use crate::utils::time::{date_to_millis, from_millis, millis_to_date};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_GAME_NAME: &str = "Unknown Game";

pub const DEFAULT_PLAYER_NAME: &str = "Unknown";

fn default_game_name() -> String {
    DEFAULT_GAME_NAME.to_string()
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

/// Stored player shape. Shared imports check `name` is present before
/// deserializing, so the default only applies to the stored history.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PlayerWire {
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub position: i32,
}

/// Stored session shape. `P` is the player representation: typed when
/// encoding, raw JSON when decoding so that players fail one by one.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionWire<P> {
    id: i64,
    #[serde(default = "default_game_name")]
    game_name: String,
    game_date: i64,
    start_time: i64,
    end_time: i64,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    is_imported: bool,
    #[serde(default = "Vec::new")]
    players: Vec<P>,
}

impl From<&PlayerRecord> for PlayerWire {
    fn from(p: &PlayerRecord) -> Self {
        Self {
            name: p.name.clone(),
            score: p.score,
            position: p.position,
        }
    }
}

impl From<PlayerWire> for PlayerRecord {
    fn from(w: PlayerWire) -> Self {
        Self {
            name: w.name,
            score: w.score,
            position: w.position,
        }
    }
}

impl From<&GameSession> for SessionWire<PlayerWire> {
    fn from(s: &GameSession) -> Self {
        Self {
            id: s.id,
            game_name: s.game_name.clone(),
            game_date: date_to_millis(s.game_date),
            start_time: s.start_time.timestamp_millis(),
            end_time: s.end_time.timestamp_millis(),
            notes: s.notes.clone(),
            is_imported: s.is_imported,
            players: s.players.iter().map(PlayerWire::from).collect(),
        }
    }
}

/// Result of a lenient decode.
#[derive(Debug, Default)]
pub struct Decoded {
    pub sessions: Vec<GameSession>,
    pub warnings: Vec<DecodeWarning>,
}

pub fn encode(sessions: &[GameSession]) -> AppResult<String> {
    let wire: Vec<SessionWire<PlayerWire>> = sessions.iter().map(SessionWire::from).collect();
    Ok(serde_json::to_string(&wire)?)
}

/// Same layout as [`encode`], indented for files meant to be read by people.
pub fn encode_pretty(sessions: &[GameSession]) -> AppResult<String> {
    let wire: Vec<SessionWire<PlayerWire>> = sessions.iter().map(SessionWire::from).collect();
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Decode the history blob, printing a warning for every skipped record.
pub fn decode(blob: &str) -> Vec<GameSession> {
    let decoded = decode_with_warnings(blob);
    for w in &decoded.warnings {
        warning(w);
    }
    decoded.sessions
}

pub fn decode_with_warnings(blob: &str) -> Decoded {
    let mut out = Decoded::default();

    if blob.trim().is_empty() {
        return out;
    }

    let entries: Vec<Value> = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            out.warnings.push(DecodeWarning::Blob(e.to_string()));
            return out;
        }
    };

    for (index, entry) in entries.into_iter().enumerate() {
        let wire: SessionWire<Value> = match serde_json::from_value(entry) {
            Ok(w) => w,
            Err(e) => {
                out.warnings.push(DecodeWarning::Session {
                    index,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match session_from_wire(index, wire, &mut out.warnings) {
            Ok(s) => out.sessions.push(s),
            Err(reason) => out.warnings.push(DecodeWarning::Session { index, reason }),
        }
    }

    out
}

fn session_from_wire(
    index: usize,
    wire: SessionWire<Value>,
    warnings: &mut Vec<DecodeWarning>,
) -> Result<GameSession, String> {
    let game_date = millis_to_date(wire.game_date)
        .ok_or_else(|| format!("gameDate {} out of range", wire.game_date))?;
    let start_time = from_millis(wire.start_time)
        .ok_or_else(|| format!("startTime {} out of range", wire.start_time))?;
    let end_time = from_millis(wire.end_time)
        .ok_or_else(|| format!("endTime {} out of range", wire.end_time))?;

    let mut players = Vec::with_capacity(wire.players.len());
    for (p_index, raw) in wire.players.into_iter().enumerate() {
        match serde_json::from_value::<PlayerWire>(raw) {
            Ok(p) => players.push(PlayerRecord::from(p)),
            Err(e) => warnings.push(DecodeWarning::Player {
                session: index,
                index: p_index,
                reason: e.to_string(),
            }),
        }
    }

    Ok(GameSession {
        id: wire.id,
        game_name: wire.game_name,
        game_date,
        start_time,
        end_time,
        players,
        notes: wire.notes,
        is_imported: wire.is_imported,
    })
}

/// The game catalogue is a plain JSON list of names.
pub fn encode_games(games: &[String]) -> AppResult<String> {
    Ok(serde_json::to_string(games)?)
}

pub fn decode_games(blob: &str) -> Vec<String> {
    if blob.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<String>>(blob) {
        Ok(games) => games,
        Err(e) => {
            warning(DecodeWarning::Blob(e.to_string()));
            Vec::new()
        }
    }
}
