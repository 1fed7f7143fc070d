use super::parse_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HistoryFilter, HistoryLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::GameSession;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, italic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, game } = cmd {
        let filter = HistoryFilter {
            period: parse_period(period.as_ref())?,
            game: game.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let groups = HistoryLogic::grouped(&pool, &filter)?;

        if groups.is_empty() {
            info("No sessions recorded");
            return Ok(());
        }

        for group in groups {
            header(group.date.format(&cfg.date_format));
            for s in &group.sessions {
                print_session_card(s, cfg);
            }
        }
    }
    Ok(())
}

fn print_session_card(s: &GameSession, cfg: &Config) {
    let tag = if s.is_imported { " [imported]" } else { "" };
    println!("  #{}  {}{}", s.id, bold(&s.game_name), tag);
    println!("      {}", s.time_range(&cfg.time_format));

    match s.duration() {
        Ok(d) => println!("      Duration: {}h {}m", d.hours, d.minutes),
        Err(e) => println!("      {}", e),
    }

    let players = if s.players.is_empty() {
        "No players recorded".to_string()
    } else {
        s.ranking()
            .iter()
            .map(|p| format!("{} ({}pts)", p.name, p.score))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("      Players: {}", players);

    if !s.notes.is_empty() {
        println!("      Notes: {}", italic(&s.notes));
    }
}
