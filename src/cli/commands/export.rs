use super::parse_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::history::{HistoryFilter, HistoryLogic};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        all,
        format,
        period,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *all {
            let file = file
                .as_deref()
                .ok_or_else(|| AppError::Export("--all needs --file".into()))?;
            let filter = HistoryFilter {
                period: parse_period(period.as_ref())?,
                game: None,
            };
            let sessions: Vec<_> = HistoryLogic::grouped(&pool, &filter)?
                .into_iter()
                .flat_map(|g| g.sessions)
                .collect();

            ExportLogic::export_history(&sessions, *format, file, *force)?;
            audit(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} sessions exported to {}", sessions.len(), file),
            );
            return Ok(());
        }

        let id = id.ok_or_else(|| AppError::Export("missing session id".into()))?;
        let session = HistoryLogic::find(&pool, id)?.ok_or(AppError::SessionNotFound(id))?;

        ExportLogic::export_session(&session, file.as_deref(), *force)?;
        if let Some(f) = file {
            audit(&pool.conn, "export", &id.to_string(), &format!("Session shared to {f}"));
        }
    }

    Ok(())
}
