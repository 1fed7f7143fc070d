use super::{parse_optional_date, parse_players};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::games::GameLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{GameSession, SessionDraft};
use crate::ui::messages::{error, success};
use crate::utils::time::parse_optional_time;

/// Record a session from the command line arguments.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        game,
        date,
        start,
        end,
        players,
        notes,
    } = cmd
    {
        //
        // 1. Build the draft; nothing touches the store yet
        //
        let mut draft = SessionDraft::new(game);
        draft.date = parse_optional_date(date.as_ref())?;
        draft.start = parse_optional_time(start.as_ref())?;
        draft.end = parse_optional_time(end.as_ref())?;
        draft.players = parse_players(players)?;
        draft.notes = notes.clone().unwrap_or_default();

        let mut pool = DbPool::new(&cfg.database)?;

        // Use the catalogue spelling when the game is known
        if let Some(canonical) = GameLogic::lookup(&pool, &draft.game_name)? {
            draft.game_name = canonical;
        }

        //
        // 2. Validate + persist
        //
        let session = AddLogic::apply(&mut pool, draft)?;

        audit(
            &pool.conn,
            "add",
            &session.id.to_string(),
            &format!("Session of '{}' saved", session.game_name),
        );

        print_saved(&session, cfg);
    }

    Ok(())
}

pub(crate) fn print_saved(session: &GameSession, cfg: &Config) {
    success("Game session saved to history!");
    println!("   Id:       {}", session.id);
    println!("   Game:     {}", session.game_name);
    println!("   Date:     {}", session.game_date.format(&cfg.date_format));
    println!("   Time:     {}", session.time_range(&cfg.time_format));
    match session.duration() {
        Ok(d) => println!("   Duration: {}", d),
        Err(e) => error(e),
    }
    println!("   Players:  {}", session.players.len());
}
