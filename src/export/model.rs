use crate::models::GameSession;
use serde::Serialize;

/// Flat row for CSV export: one line per player of a session.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionRowExport {
    pub session_id: i64,
    pub game: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: Option<i64>,
    pub player: String,
    pub score: i32,
    pub position: i32,
    pub imported: bool,
    pub notes: String,
}

impl SessionRowExport {
    pub fn rows_for(session: &GameSession) -> Vec<SessionRowExport> {
        let duration = session.duration().ok().map(|d| d.total_minutes());

        let base = SessionRowExport {
            session_id: session.id,
            game: session.game_name.clone(),
            date: session.game_date.format("%Y-%m-%d").to_string(),
            start: session.start_time.format("%Y-%m-%d %H:%M").to_string(),
            end: session.end_time.format("%Y-%m-%d %H:%M").to_string(),
            duration_minutes: duration,
            player: String::new(),
            score: 0,
            position: 0,
            imported: session.is_imported,
            notes: session.notes.clone(),
        };

        if session.players.is_empty() {
            return vec![base];
        }

        session
            .ranking()
            .into_iter()
            .map(|p| SessionRowExport {
                player: p.name.clone(),
                score: p.score,
                position: p.position,
                ..base.clone()
            })
            .collect()
    }
}
