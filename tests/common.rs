#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use boardchamp::core::duration::resolve_times;
use boardchamp::models::{GameSession, PlayerRecord};
use chrono::{NaiveDate, NaiveTime};
use tempfile::TempDir;

pub fn bc() -> Command {
    cargo_bin_cmd!("boardchamp")
}

/// Fresh database path inside its own temp dir. Keep the TempDir alive for
/// the duration of the test.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir
        .path()
        .join("boardchamp.sqlite")
        .to_string_lossy()
        .to_string();
    (dir, db_path)
}

/// Initialize the schema through the CLI, without touching the real config.
pub fn init_db(db_path: &str) {
    bc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn session(id: i64, game: &str, day: &str, start: &str, end: &str) -> GameSession {
    let game_date = date(day);
    let (start_time, end_time) = resolve_times(game_date, time(start), time(end)).expect("times");
    GameSession {
        id,
        game_name: game.to_string(),
        game_date,
        start_time,
        end_time,
        players: vec![
            PlayerRecord::new("Alice", 12, 1),
            PlayerRecord::new("Bob", 8, 2),
        ],
        notes: String::new(),
        is_imported: false,
    }
}
