use crate::errors::ValidationError;
use crate::models::{MAX_PLAYER_NAME_LEN, PlayerRecord};
use std::collections::HashSet;

/// Player list rules applied before anything is persisted:
/// at least one player, names 1..=20 chars, positions in 1..=count and
/// not shared between players.
pub fn validate_players(players: &[PlayerRecord]) -> Result<(), ValidationError> {
    if players.is_empty() {
        return Err(ValidationError::NoPlayers);
    }

    let count = players.len();
    let mut seen = HashSet::with_capacity(count);

    for p in players {
        let name = p.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(ValidationError::PlayerNameTooLong {
                name: name.to_string(),
                max: MAX_PLAYER_NAME_LEN,
            });
        }
        if p.position < 1 || p.position as usize > count {
            return Err(ValidationError::PositionOutOfRange {
                name: name.to_string(),
                position: p.position,
                count,
            });
        }
        if !seen.insert(p.position) {
            return Err(ValidationError::DuplicatePosition(p.position));
        }
    }

    Ok(())
}

pub fn validate_game_name(name: &str, max_len: usize) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyGameName);
    }
    if name.chars().count() > max_len {
        return Err(ValidationError::GameNameTooLong(max_len));
    }
    Ok(())
}
