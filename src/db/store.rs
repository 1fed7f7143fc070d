//! Key-value persistence and the repositories built on top of it.
//!
//! The whole history is one value under [`SESSIONS_KEY`] and the game
//! catalogue one value under [`GAMES_KEY`]. Every operation reads the full
//! value, changes it in memory and writes it back.

use crate::core::codec::{decode, decode_games, encode, encode_games};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::GameSession;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub const GAMES_KEY: &str = "games";
pub const SESSIONS_KEY: &str = "game_sessions";

/// A namespace of string values addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl KeyValueStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// Volatile store for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub trait SessionRepository {
    fn load_sessions(&self) -> AppResult<Vec<GameSession>>;
    fn save_sessions(&mut self, sessions: &[GameSession]) -> AppResult<()>;
}

pub trait GameRepository {
    fn load_games(&self) -> AppResult<Vec<String>>;
    fn save_games(&mut self, games: &[String]) -> AppResult<()>;
}

impl<S: KeyValueStore> SessionRepository for S {
    fn load_sessions(&self) -> AppResult<Vec<GameSession>> {
        Ok(self
            .get(SESSIONS_KEY)?
            .map(|blob| decode(&blob))
            .unwrap_or_default())
    }

    fn save_sessions(&mut self, sessions: &[GameSession]) -> AppResult<()> {
        let blob = encode(sessions)?;
        self.put(SESSIONS_KEY, &blob)
    }
}

impl<S: KeyValueStore> GameRepository for S {
    fn load_games(&self) -> AppResult<Vec<String>> {
        Ok(self
            .get(GAMES_KEY)?
            .map(|blob| decode_games(&blob))
            .unwrap_or_default())
    }

    fn save_games(&mut self, games: &[String]) -> AppResult<()> {
        let blob = encode_games(games)?;
        self.put(GAMES_KEY, &blob)
    }
}
