use crate::core::codec::encode_pretty;
use crate::core::transfer::export_one;
use crate::errors::AppResult;
use crate::export::{ExportFormat, SessionRowExport, ensure_writable, export_csv, export_json};
use crate::models::GameSession;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Share one session. Without a file the JSON goes to stdout, ready to
    /// be piped into a clipboard tool.
    pub fn export_session(session: &GameSession, file: Option<&str>, force: bool) -> AppResult<()> {
        let json = export_one(session)?;

        match file {
            None => {
                println!("{json}");
                Ok(())
            }
            Some(f) => {
                let path = expand_tilde(f);
                ensure_writable(&path, force)?;
                export_json(&json, &path)
            }
        }
    }

    /// Dump the whole (already filtered) history to a file.
    pub fn export_history(
        sessions: &[GameSession],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if sessions.is_empty() {
            warning("No sessions found. Nothing to export.");
            return Ok(());
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => export_json(&encode_pretty(sessions)?, &path),
            ExportFormat::Csv => {
                let rows: Vec<SessionRowExport> =
                    sessions.iter().flat_map(SessionRowExport::rows_for).collect();
                export_csv(&rows, &path)
            }
        }
    }
}
