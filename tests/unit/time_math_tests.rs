// Unit tests for day boundaries and vertical placement
// Parameterized with test-case across the edges of a day

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_timegrid::models::view_mode::ViewMode;
use rust_timegrid::services::layout::{is_same_day, is_today_at, relative_top_in_day};
use rust_timegrid::utils::date::{end_of_day, format_hour, start_of_day, week_start};
use test_case::test_case;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn june_at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    june(day).and_hms_opt(h, m, s).unwrap()
}

#[test_case(0, 0, 0.0 ; "midnight")]
#[test_case(6, 0, 0.25 ; "six am")]
#[test_case(12, 0, 0.5 ; "noon")]
#[test_case(18, 0, 0.75 ; "six pm")]
#[test_case(23, 59, 1439.0 / 1440.0 ; "last minute")]
fn test_relative_top(hour: u32, minute: u32, expected: f32) {
    let top = relative_top_in_day(june_at(2, hour, minute, 0));
    assert!((top - expected).abs() < 1e-6, "{} != {}", top, expected);
}

#[test]
fn test_relative_top_ignores_seconds() {
    assert_eq!(
        relative_top_in_day(june_at(2, 9, 30, 59)),
        relative_top_in_day(june_at(2, 9, 30, 0))
    );
}

#[test_case(june_at(2, 0, 0, 0), true ; "start of day is included")]
#[test_case(june_at(2, 23, 59, 59), true ; "last second is included")]
#[test_case(june_at(3, 0, 0, 0), false ; "next midnight is excluded")]
#[test_case(june_at(1, 23, 59, 59), false ; "previous day is excluded")]
fn test_is_same_day(t: NaiveDateTime, expected: bool) {
    assert_eq!(is_same_day(t, june(2)), expected);
}

#[test]
fn test_day_bounds() {
    assert_eq!(start_of_day(june(2)), june_at(2, 0, 0, 0));
    assert_eq!(end_of_day(june(2)), june_at(3, 0, 0, 0));
}

#[test]
fn test_is_today_at() {
    assert!(is_today_at(june(2), june_at(2, 15, 0, 0)));
    assert!(!is_today_at(june(3), june_at(2, 15, 0, 0)));
}

#[test_case(0, false, "0:00")]
#[test_case(0, true, "12 AM")]
#[test_case(12, true, "12 PM")]
#[test_case(15, false, "15:00")]
fn test_format_hour(hour: u32, ampm: bool, expected: &str) {
    assert_eq!(format_hour(hour, ampm), expected);
}

#[test_case(Weekday::Sun, june(1) ; "sunday start")]
#[test_case(Weekday::Mon, june(2) ; "monday start")]
fn test_week_start(first: Weekday, expected: NaiveDate) {
    // June 4 2025 is a Wednesday
    assert_eq!(week_start(june(4), first), expected);
}

#[test]
fn test_week_view_covers_seven_days() {
    let range = ViewMode::Week.date_range(june(4), Weekday::Mon);
    assert_eq!(range.len(), 7);
    assert_eq!(range[0], june(2));
    assert_eq!(range[6], june(8));
}
