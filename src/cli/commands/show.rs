use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::ordinal;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let s = HistoryLogic::find(&pool, *id)?.ok_or(AppError::SessionNotFound(*id))?;

        println!("🎲 {} (#{})", s.game_name, s.id);
        println!("Date:     {}", s.game_date.format(&cfg.date_format));
        println!("Time:     {}", s.time_range(&cfg.time_format));
        match s.duration() {
            Ok(d) => println!("Duration: {}", d),
            Err(e) => println!("{}", e),
        }
        if s.is_imported {
            println!("Source:   imported");
        }

        let mut table = Table::new(vec![
            Column::new("Place"),
            Column::new("Player"),
            Column::numeric("Score"),
        ]);
        for p in s.ranking() {
            table.add_row(vec![ordinal(p.position), p.name.clone(), p.score.to_string()]);
        }
        println!("\n{}", table.render());

        if !s.notes.is_empty() {
            println!("Notes: {}", s.notes);
        }
    }

    Ok(())
}
