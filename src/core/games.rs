//! The ordered catalogue of game names shown on the start screen.

use crate::core::validate::validate_game_name;
use crate::db::store::GameRepository;
use crate::errors::{AppResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub struct GameLogic;

impl GameLogic {
    /// Append a game. Names are trimmed and compared case-insensitively.
    pub fn add<R: GameRepository>(repo: &mut R, name: &str, max_len: usize) -> AppResult<String> {
        let name = name.trim();
        validate_game_name(name, max_len)?;

        let mut games = repo.load_games()?;
        if find(&games, name).is_ok() {
            return Err(ValidationError::GameExists(name.to_string()).into());
        }

        games.push(name.to_string());
        repo.save_games(&games)?;
        Ok(name.to_string())
    }

    pub fn remove<R: GameRepository>(repo: &mut R, name: &str) -> AppResult<String> {
        let mut games = repo.load_games()?;
        let idx = find(&games, name)?;
        let removed = games.remove(idx);

        repo.save_games(&games)?;
        Ok(removed)
    }

    /// Swap a game with its neighbour. Returns false when it is already at
    /// that end of the list.
    pub fn shift<R: GameRepository>(repo: &mut R, name: &str, dir: Direction) -> AppResult<bool> {
        let mut games = repo.load_games()?;
        let idx = find(&games, name)?;

        let target = match dir {
            Direction::Up if idx > 0 => idx - 1,
            Direction::Down if idx + 1 < games.len() => idx + 1,
            _ => return Ok(false),
        };

        games.swap(idx, target);
        repo.save_games(&games)?;
        Ok(true)
    }

    /// Canonical spelling of a catalogue entry, if present.
    pub fn lookup<R: GameRepository>(repo: &R, name: &str) -> AppResult<Option<String>> {
        let games = repo.load_games()?;
        Ok(find(&games, name).ok().map(|i| games[i].clone()))
    }
}

fn find(games: &[String], name: &str) -> Result<usize, ValidationError> {
    let wanted = name.trim().to_lowercase();
    games
        .iter()
        .position(|g| g.to_lowercase() == wanted)
        .ok_or_else(|| ValidationError::GameNotFound(name.trim().to_string()))
}
