use crate::db::store::SessionRepository;
use crate::errors::{AppError, AppResult};
use crate::models::GameSession;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a session by id and return it.
    pub fn apply<R: SessionRepository>(repo: &mut R, id: i64) -> AppResult<GameSession> {
        let mut sessions = repo.load_sessions()?;

        let idx = sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::SessionNotFound(id))?;
        let removed = sessions.remove(idx);

        repo.save_sessions(&sessions)?;
        Ok(removed)
    }
}
