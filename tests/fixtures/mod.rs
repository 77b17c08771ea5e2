// Test fixtures - reusable test data
// Provides consistent days and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_timegrid::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, June 2 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    /// The day after `monday()`
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn on(day: NaiveDate, title: &str, from: (u32, u32), to: (u32, u32)) -> Event {
        Event::new(
            title,
            dates::at(day, from.0, from.1),
            dates::at(day, to.0, to.1),
            (),
        )
    }

    /// A 9:00-10:00, B 9:30-10:30, C 11:00-12:00
    pub fn morning_block(day: NaiveDate) -> Vec<Event> {
        vec![
            on(day, "A", (9, 0), (10, 0)),
            on(day, "B", (9, 30), (10, 30)),
            on(day, "C", (11, 0), (12, 0)),
        ]
    }

    /// `count` events sharing the same start and end
    pub fn identical(day: NaiveDate, count: usize) -> Vec<Event> {
        (0..count)
            .map(|i| on(day, &format!("Same {}", i), (14, 0), (15, 0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_dates_are_valid() {
        use chrono::Datelike;
        assert_eq!(dates::monday().weekday(), chrono::Weekday::Mon);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }

    #[test]
    fn test_fixture_events_are_valid() {
        for event in events::morning_block(dates::monday()) {
            assert!(event.validate().is_ok());
        }
        assert_eq!(events::identical(dates::monday(), 4).len(), 4);
    }
}
