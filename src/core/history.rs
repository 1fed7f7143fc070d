use crate::db::store::SessionRepository;
use crate::errors::AppResult;
use crate::models::GameSession;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Inclusive game-date bounds.
    pub period: Option<(NaiveDate, NaiveDate)>,
    /// Case-insensitive game name.
    pub game: Option<String>,
}

impl HistoryFilter {
    pub fn matches(&self, s: &GameSession) -> bool {
        if let Some((from, to)) = self.period
            && (s.game_date < from || s.game_date > to)
        {
            return false;
        }
        if let Some(game) = &self.game
            && !s.game_name.eq_ignore_ascii_case(game.trim())
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub sessions: Vec<GameSession>,
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Sessions newest date first, grouped per game date. Within a day the
    /// latest start comes first.
    pub fn grouped<R: SessionRepository>(repo: &R, filter: &HistoryFilter) -> AppResult<Vec<DayGroup>> {
        let mut sessions: Vec<GameSession> = repo
            .load_sessions()?
            .into_iter()
            .filter(|s| filter.matches(s))
            .collect();

        sessions.sort_by(|a, b| {
            b.game_date
                .cmp(&a.game_date)
                .then_with(|| b.start_time.cmp(&a.start_time))
        });

        let mut groups: Vec<DayGroup> = Vec::new();
        for s in sessions {
            match groups.last_mut() {
                Some(g) if g.date == s.game_date => g.sessions.push(s),
                _ => groups.push(DayGroup {
                    date: s.game_date,
                    sessions: vec![s],
                }),
            }
        }

        Ok(groups)
    }

    pub fn find<R: SessionRepository>(repo: &R, id: i64) -> AppResult<Option<GameSession>> {
        Ok(repo.load_sessions()?.into_iter().find(|s| s.id == id))
    }
}
