//! Time utilities: parsing HH:MM, local timestamp construction and
//! epoch-millisecond conversions used by the session codec.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Attach the local timezone to a wall-clock datetime.
///
/// Ambiguous instants (DST fall back) resolve to the earlier one; instants
/// skipped by a DST jump are moved one hour forward.
pub fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
}

pub fn from_millis(ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ms).map(|utc| utc.with_timezone(&Local))
}

/// A calendar date is stored as its local midnight.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match to_local(midnight) {
        Some(dt) => dt.timestamp_millis(),
        None => midnight.and_utc().timestamp_millis(),
    }
}

pub fn millis_to_date(ms: i64) -> Option<NaiveDate> {
    from_millis(ms).map(|dt| dt.date_naive())
}

/// Local wall-clock time of a timestamp.
pub fn clock_of(dt: &DateTime<Local>) -> NaiveTime {
    dt.naive_local().time()
}

/// Current time truncated to whole milliseconds, the precision of the store.
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}
