pub mod add;
pub mod config;
pub mod del;
pub mod duration;
pub mod edit;
pub mod export;
pub mod game;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::models::PlayerRecord;
use crate::utils::date;
use chrono::NaiveDate;

/// Turn repeated `--player` values into records, in the given order.
pub(crate) fn parse_players(specs: &[String]) -> AppResult<Vec<PlayerRecord>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, s)| PlayerRecord::parse_spec(s, i).map_err(AppError::from))
        .collect()
}

pub(crate) fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

pub(crate) fn parse_period(input: Option<&String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match input {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => date::resolve_period(p)
            .map(Some)
            .map_err(AppError::InvalidPeriod),
        None => Ok(None),
    }
}
