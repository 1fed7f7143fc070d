use super::player::PlayerRecord;
use super::session::GameSession;
use crate::core::duration::resolve_times;
use crate::core::validate::{validate_game_name, validate_players};
use crate::errors::{AppResult, ValidationError};
use crate::utils::time::clock_of;
use chrono::{NaiveDate, NaiveTime};

/// Unsaved session data collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    pub game_name: String,
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub players: Vec<PlayerRecord>,
    pub notes: String,
}

impl SessionDraft {
    pub fn new(game_name: &str) -> Self {
        Self {
            game_name: game_name.trim().to_string(),
            ..Default::default()
        }
    }

    /// Rebuild the draft an existing session was saved from.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            game_name: session.game_name.clone(),
            date: Some(session.game_date),
            start: Some(clock_of(&session.start_time)),
            end: Some(clock_of(&session.end_time)),
            players: session.players.clone(),
            notes: session.notes.clone(),
        }
    }

    /// Validate the draft and turn it into a session with the given id.
    ///
    /// Checks run in the order a user fills the form: date, times, players.
    pub fn into_session(self, id: i64) -> AppResult<GameSession> {
        validate_game_name(&self.game_name, usize::MAX)?;

        let date = self.date.ok_or(ValidationError::MissingDate)?;
        let (start, end) = match (self.start, self.end) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(ValidationError::MissingTimes.into()),
        };

        validate_players(&self.players)?;

        let (start_time, end_time) = resolve_times(date, start, end)?;

        Ok(GameSession {
            id,
            game_name: self.game_name,
            game_date: date,
            start_time,
            end_time,
            players: self.players,
            notes: self.notes,
            is_imported: false,
        })
    }
}
