use super::player::PlayerRecord;
use crate::core::duration::{SessionDuration, compute_duration};
use crate::errors::CalculationError;
use crate::utils::time::now_millis;
use chrono::{DateTime, Local, NaiveDate};

/// One recorded play of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub id: i64,
    pub game_name: String,
    pub game_date: NaiveDate,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub players: Vec<PlayerRecord>,
    pub notes: String,
    pub is_imported: bool,
}

impl GameSession {
    pub fn duration(&self) -> Result<SessionDuration, CalculationError> {
        compute_duration(&self.start_time, &self.end_time)
    }

    /// Two sessions describe the same play when name, date and both
    /// timestamps match exactly.
    pub fn is_duplicate_of(&self, other: &GameSession) -> bool {
        self.game_name == other.game_name
            && self.game_date == other.game_date
            && self.start_time == other.start_time
            && self.end_time == other.end_time
    }

    /// Players ordered by finishing position, ties keep input order.
    pub fn ranking(&self) -> Vec<&PlayerRecord> {
        let mut out: Vec<&PlayerRecord> = self.players.iter().collect();
        out.sort_by_key(|p| p.position);
        out
    }

    /// "HH:MM - HH:MM", with "(+1 day)" when the session ends on a later day.
    pub fn time_range(&self, time_format: &str) -> String {
        let start = self.start_time.format(time_format);
        let end = self.end_time.format(time_format);
        if self.end_time.date_naive() > self.start_time.date_naive() {
            format!("{} - {} (+1 day)", start, end)
        } else {
            format!("{} - {}", start, end)
        }
    }
}

/// A new id derived from the creation time, bumped past any id in use.
pub fn fresh_id(existing: &[GameSession]) -> i64 {
    let mut id = now_millis();
    while existing.iter().any(|s| s.id == id) {
        id += 1;
    }
    id
}
