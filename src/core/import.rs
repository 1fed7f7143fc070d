use crate::core::transfer::{find_duplicate, import_one};
use crate::db::store::SessionRepository;
use crate::errors::AppResult;
use crate::models::GameSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(GameSession),
    /// The session duplicated a stored one and the user said no.
    Declined,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Validate shared text and add it to the history.
    ///
    /// When the session matches a stored one, `confirm_duplicate` decides
    /// whether it is added anyway; it is not called otherwise.
    pub fn apply<R, F>(repo: &mut R, text: &str, confirm_duplicate: F) -> AppResult<ImportOutcome>
    where
        R: SessionRepository,
        F: FnOnce(&GameSession, &GameSession) -> bool,
    {
        let mut sessions = repo.load_sessions()?;
        let imported = import_one(text, &sessions)?;

        if let Some(existing) = find_duplicate(&imported, &sessions)
            && !confirm_duplicate(&imported, existing)
        {
            return Ok(ImportOutcome::Declined);
        }

        sessions.push(imported.clone());
        repo.save_sessions(&sessions)?;

        Ok(ImportOutcome::Imported(imported))
    }
}
