//! Session length and the next-day rollover rule.

use crate::errors::{AppError, AppResult, CalculationError};
use crate::utils::time::to_local;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use std::fmt;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDuration {
    pub hours: i64,
    pub minutes: i64,
    pub crosses_midnight: bool,
}

impl SessionDuration {
    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)?;
        if self.crosses_midnight {
            write!(f, " (crosses midnight)")?;
        }
        Ok(())
    }
}

/// Elapsed time between two instants.
///
/// `end` must already carry any rollover; an end before the start is a
/// calculation error, not something to clamp.
pub fn compute_duration(
    start: &DateTime<Local>,
    end: &DateTime<Local>,
) -> Result<SessionDuration, CalculationError> {
    let delta = end.timestamp_millis() - start.timestamp_millis();
    if delta < 0 {
        return Err(CalculationError::NegativeDuration(-delta));
    }

    Ok(SessionDuration {
        hours: delta / MILLIS_PER_HOUR,
        minutes: (delta % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        crosses_midnight: end.date_naive() != start.date_naive(),
    })
}

/// Place two picked clock times on `date`.
///
/// An end clock time earlier than or equal to the start is read as the
/// following day, so equal times give a 24h session.
pub fn resolve_times(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> AppResult<(DateTime<Local>, DateTime<Local>)> {
    let end_date = if end <= start {
        date.succ_opt()
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?
    } else {
        date
    };

    let start_dt =
        to_local(date.and_time(start)).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
    let end_dt =
        to_local(end_date.and_time(end)).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

    Ok((start_dt, end_dt))
}
