use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve a single period token (YYYY, YYYY-MM, YYYY-MM-DD) to the first
/// and last day it covers.
pub fn bounds_of_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a period filter, either a single token or a `start:end` range.
pub fn resolve_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = bounds_of_period(start)?;
        let (_, to) = bounds_of_period(end)?;
        if to < from {
            return Err(format!("Invalid period: {} ends before it starts", p));
        }
        return Ok((from, to));
    }

    bounds_of_period(p)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
