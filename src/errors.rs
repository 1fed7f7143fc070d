//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so that every failure
//! ends up as one readable message for the user.

use std::io;
use thiserror::Error;

/// Which part of an imported document a missing field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    Session,
    Player,
}

impl std::fmt::Display for FieldScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldScope::Session => write!(f, "session data"),
            FieldScope::Player => write!(f, "player data"),
        }
    }
}

/// User input that violates a required constraint.
/// Nothing is written to the store when one of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a date")]
    MissingDate,

    #[error("Please set start and end time")]
    MissingTimes,

    #[error("Please add at least one player")]
    NoPlayers,

    #[error("Please enter name for all players")]
    EmptyPlayerName,

    #[error("Player name '{name}' is longer than {max} characters")]
    PlayerNameTooLong { name: String, max: usize },

    #[error("Position {position} of '{name}' must be between 1 and {count}")]
    PositionOutOfRange {
        name: String,
        position: i32,
        count: usize,
    },

    #[error("Position {0} is assigned to more than one player")]
    DuplicatePosition(i32),

    #[error("Please enter a game name")]
    EmptyGameName,

    #[error("Game name is longer than {0} characters")]
    GameNameTooLong(usize),

    #[error("Game '{0}' already exists")]
    GameExists(String),

    #[error("Game '{0}' not found")]
    GameNotFound(String),

    #[error("Invalid player entry '{0}' (expected NAME[:SCORE[:POSITION]])")]
    InvalidPlayerSpec(String),

    #[error("Nothing to import: the input is empty")]
    EmptyClipboard,

    #[error("Invalid session format: {0}")]
    MalformedJson(String),

    #[error("Missing required field '{field}' in {scope}")]
    MissingField { scope: FieldScope, field: String },

    #[error("Invalid timestamp in field '{0}'")]
    InvalidTimestamp(String),
}

/// A negative duration: the rollover step upstream did not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Duration: Invalid (calculation error, end is {0} ms before start)")]
    NegativeDuration(i64),
}

/// A persisted record that could not be read back. The record is skipped
/// and the rest of the history still loads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    #[error("Stored history is unreadable, starting empty: {0}")]
    Blob(String),

    #[error("Skipping stored session #{index}: {reason}")]
    Session { index: usize, reason: String },

    #[error("Skipping player #{index} of stored session #{session}: {reason}")]
    Player {
        session: usize,
        index: usize,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Calculation(#[from] CalculationError),

    #[error("Session not found: {0}")]
    SessionNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Failed to edit configuration: {0}")]
    ConfigEdit(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
