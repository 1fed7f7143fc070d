use crate::errors::ValidationError;

/// Longest accepted player name, counted in characters.
pub const MAX_PLAYER_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub score: i32,
    /// 1-based finishing rank.
    pub position: i32,
}

impl PlayerRecord {
    pub fn new(name: &str, score: i32, position: i32) -> Self {
        Self {
            name: name.to_string(),
            score,
            position,
        }
    }

    /// Parse a `NAME[:SCORE[:POSITION]]` command-line entry.
    ///
    /// `index` is the 0-based slot of the player in the list; a missing
    /// position defaults to `index + 1`, a missing score to 0.
    pub fn parse_spec(spec: &str, index: usize) -> Result<Self, ValidationError> {
        let mut parts = spec.splitn(3, ':');
        let name = parts.next().unwrap_or("").trim();

        let score = match parts.next().map(str::trim) {
            None | Some("") => 0,
            Some(s) => s
                .parse::<i32>()
                .map_err(|_| ValidationError::InvalidPlayerSpec(spec.to_string()))?,
        };

        let position = match parts.next().map(str::trim) {
            None | Some("") => index as i32 + 1,
            Some(p) => p
                .parse::<i32>()
                .map_err(|_| ValidationError::InvalidPlayerSpec(spec.to_string()))?,
        };

        Ok(Self::new(name, score, position))
    }
}
