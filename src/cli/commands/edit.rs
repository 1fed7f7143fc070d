use super::add::print_saved;
use super::{parse_optional_date, parse_players};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, SessionChanges};
use crate::core::games::GameLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        game,
        date,
        start,
        end,
        players,
        notes,
    } = cmd
    {
        let mut changes = SessionChanges {
            game_name: game.clone(),
            date: parse_optional_date(date.as_ref())?,
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            players: if players.is_empty() {
                None
            } else {
                Some(parse_players(players)?)
            },
            notes: notes.clone(),
        };

        if changes.is_empty() {
            info("Nothing to do: specify at least one field to change.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        // Same catalogue spelling rule as `add`
        let canonical = match &changes.game_name {
            Some(name) => GameLogic::lookup(&pool, name)?,
            None => None,
        };
        if canonical.is_some() {
            changes.game_name = canonical;
        }

        let updated = EditLogic::apply(&mut pool, *id, changes)?;

        audit(
            &pool.conn,
            "edit",
            &updated.id.to_string(),
            &format!("Session of '{}' updated", updated.game_name),
        );

        print_saved(&updated, cfg);
    }

    Ok(())
}
