use crate::db::store::SessionRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{GameSession, PlayerRecord, SessionDraft};
use chrono::{NaiveDate, NaiveTime};

/// Fields to overwrite; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SessionChanges {
    pub game_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub players: Option<Vec<PlayerRecord>>,
    pub notes: Option<String>,
}

impl SessionChanges {
    pub fn is_empty(&self) -> bool {
        self.game_name.is_none()
            && self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.players.is_none()
            && self.notes.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Replace a stored session with an edited copy.
    ///
    /// Clock times are placed again on the (possibly new) date with the
    /// rollover rule and the result is validated like a new session.
    /// Id and import flag are kept.
    pub fn apply<R: SessionRepository>(
        repo: &mut R,
        id: i64,
        changes: SessionChanges,
    ) -> AppResult<GameSession> {
        let mut sessions = repo.load_sessions()?;

        let idx = sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::SessionNotFound(id))?;
        let current = &sessions[idx];

        let mut draft = SessionDraft::from_session(current);
        if let Some(name) = changes.game_name {
            draft.game_name = name.trim().to_string();
        }
        if let Some(date) = changes.date {
            draft.date = Some(date);
        }
        if let Some(start) = changes.start {
            draft.start = Some(start);
        }
        if let Some(end) = changes.end {
            draft.end = Some(end);
        }
        if let Some(players) = changes.players {
            draft.players = players;
        }
        if let Some(notes) = changes.notes {
            draft.notes = notes;
        }

        let mut updated = draft.into_session(current.id)?;
        updated.is_imported = current.is_imported;

        sessions[idx] = updated.clone();
        repo.save_sessions(&sessions)?;

        Ok(updated)
    }
}
