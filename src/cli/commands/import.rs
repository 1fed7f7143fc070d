use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{ImportLogic, ImportOutcome};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let text = match file {
            Some(f) => fs::read_to_string(expand_tilde(f))?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let outcome = ImportLogic::apply(&mut pool, &text, |new, existing| {
            *yes || confirm(&format!(
                "Session '{}' on {} looks identical to #{}. Import anyway?",
                new.game_name,
                new.game_date.format(&cfg.date_format),
                existing.id
            ))
        })?;

        match outcome {
            ImportOutcome::Imported(s) => {
                audit(
                    &pool.conn,
                    "import",
                    &s.id.to_string(),
                    &format!("Session of '{}' imported", s.game_name),
                );
                success(format!(
                    "Session imported: {} on {} (#{}).",
                    s.game_name,
                    s.game_date.format(&cfg.date_format),
                    s.id
                ));
            }
            ImportOutcome::Declined => info("Import cancelled, duplicate not added."),
        }
    }

    Ok(())
}
