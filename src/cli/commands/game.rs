use crate::cli::parser::{Commands, GameAction};
use crate::config::Config;
use crate::core::games::{Direction, GameLogic};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store::GameRepository;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Game { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        GameAction::Add { name } => {
            let added = GameLogic::add(&mut pool, name, cfg.max_game_name_len)?;
            audit(&pool.conn, "game_add", &added, "Game added to catalogue");
            success(format!("Game '{}' added.", added));
        }

        GameAction::List => {
            let games = pool.load_games()?;
            if games.is_empty() {
                info("No games yet. Add one with `boardchamp game add <NAME>`.");
            } else {
                println!("🎲 Games:");
                for (i, g) in games.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, g);
                }
            }
        }

        GameAction::Remove { name, yes } => {
            if !*yes
                && !confirm(&format!(
                    "Remove '{}' from the catalogue? Recorded sessions are kept.",
                    name.trim()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = GameLogic::remove(&mut pool, name)?;
            audit(&pool.conn, "game_remove", &removed, "Game removed from catalogue");
            success(format!("Game '{}' removed.", removed));
        }

        GameAction::Move { name, up, .. } => {
            // clap guarantees exactly one of --up / --down
            let (dir, label) = if *up {
                (Direction::Up, "up")
            } else {
                (Direction::Down, "down")
            };

            if GameLogic::shift(&mut pool, name, dir)? {
                audit(&pool.conn, "game_move", name.trim(), &format!("Moved {label}"));
                success(format!("Game '{}' moved {}.", name.trim(), label));
            } else {
                info(format!("'{}' is already at that end of the list.", name.trim()));
            }
        }
    }

    Ok(())
}
