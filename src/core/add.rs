use crate::db::store::SessionRepository;
use crate::errors::AppResult;
use crate::models::{GameSession, SessionDraft, fresh_id};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the draft, append it to the history and persist the list.
    /// On any validation error the store is left untouched.
    pub fn apply<R: SessionRepository>(repo: &mut R, draft: SessionDraft) -> AppResult<GameSession> {
        let mut sessions = repo.load_sessions()?;

        let session = draft.into_session(fresh_id(&sessions))?;
        sessions.push(session.clone());

        repo.save_sessions(&sessions)?;
        Ok(session)
    }
}
