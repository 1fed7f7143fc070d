mod common;
use boardchamp::core::duration::{compute_duration, resolve_times};
use boardchamp::errors::CalculationError;
use chrono::TimeDelta;
use common::{date, time};

#[test]
fn same_day_duration_matches_elapsed_minutes() {
    let day = date("2025-06-14");
    let cases = [
        ("00:00", "00:01"),
        ("09:00", "17:30"),
        ("14:05", "15:04"),
        ("18:45", "23:59"),
        ("12:00", "12:59"),
    ];

    for (s, e) in cases {
        let (start, end) = resolve_times(day, time(s), time(e)).unwrap();
        let d = compute_duration(&start, &end).unwrap();
        let expected = (end - start).num_minutes();

        assert!(!d.crosses_midnight, "{s}-{e} should stay on the same day");
        assert_eq!(d.hours * 60 + d.minutes, expected, "{s}-{e}");
        assert!(d.minutes < 60);
    }
}

#[test]
fn end_before_start_rolls_over_to_next_day() {
    let day = date("2025-06-14");
    let cases = [("22:00", "01:30"), ("23:59", "00:00"), ("20:15", "20:14")];

    for (s, e) in cases {
        let (start, end) = resolve_times(day, time(s), time(e)).unwrap();
        assert_eq!(end.date_naive(), date("2025-06-15"));

        let d = compute_duration(&start, &end).unwrap();
        assert!(d.crosses_midnight, "{s}-{e} should cross midnight");
        assert!(d.total_minutes() >= 0);
    }

    let (start, end) = resolve_times(day, time("22:00"), time("01:30")).unwrap();
    let d = compute_duration(&start, &end).unwrap();
    assert_eq!((d.hours, d.minutes), (3, 30));
}

#[test]
fn equal_clock_times_are_read_as_a_full_day() {
    let day = date("2025-01-10");
    let (start, end) = resolve_times(day, time("19:00"), time("19:00")).unwrap();
    let d = compute_duration(&start, &end).unwrap();

    assert!(d.crosses_midnight);
    assert_eq!(d.hours, 24);
    assert_eq!(d.minutes, 0);
}

#[test]
fn rollover_across_year_end() {
    let (start, end) = resolve_times(date("2024-12-31"), time("23:00"), time("02:00")).unwrap();
    assert_eq!(end.date_naive(), date("2025-01-01"));
    assert!(compute_duration(&start, &end).unwrap().crosses_midnight);
}

#[test]
fn negative_duration_is_a_calculation_error() {
    let (start, _) = resolve_times(date("2025-06-14"), time("10:00"), time("11:00")).unwrap();
    let end = start - TimeDelta::minutes(5);

    let err = compute_duration(&start, &end).unwrap_err();
    assert_eq!(err, CalculationError::NegativeDuration(300_000));
    assert!(err.to_string().contains("Invalid"));
}

#[test]
fn duration_display_mentions_midnight() {
    let (start, end) = resolve_times(date("2025-06-14"), time("23:15"), time("00:45")).unwrap();
    let d = compute_duration(&start, &end).unwrap();
    assert_eq!(d.to_string(), "1h 30m (crosses midnight)");

    let (start, end) = resolve_times(date("2025-06-14"), time("10:00"), time("12:05")).unwrap();
    assert_eq!(compute_duration(&start, &end).unwrap().to_string(), "2h 5m");
}
