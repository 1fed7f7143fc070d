use super::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duration::{compute_duration, resolve_times};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duration {
        start,
        end,
        date: date_arg,
    } = cmd
    {
        let day = parse_optional_date(date_arg.as_ref())?.unwrap_or_else(date::today);
        let s = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.clone()))?;
        let e = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.clone()))?;

        let (start_dt, end_dt) = resolve_times(day, s, e)?;
        let d = compute_duration(&start_dt, &end_dt)?;

        println!(
            "{} → {}",
            start_dt.format(&format!("{} {}", cfg.date_format, cfg.time_format)),
            end_dt.format(&format!("{} {}", cfg.date_format, cfg.time_format)),
        );
        println!("Duration: {}", d);
    }

    Ok(())
}
