use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::history::HistoryLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let target = HistoryLogic::find(&pool, *id)?.ok_or(AppError::SessionNotFound(*id))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete session #{} ({} on {})? This action is irreversible.",
            target.id,
            target.game_name,
            target.game_date.format(&cfg.date_format)
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;

        audit(
            &pool.conn,
            "del",
            &removed.id.to_string(),
            &format!("Session of '{}' deleted", removed.game_name),
        );
        success("Session deleted");
    }

    Ok(())
}
