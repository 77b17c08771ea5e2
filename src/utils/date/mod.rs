// Date utility functions
// Day boundaries and hour labels shared by the layout engine and the grid

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Midnight at the start of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Exclusive end of `day`, which is midnight of the following day.
///
/// Falls back to the last representable instant for `NaiveDate::MAX`.
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    match day.succ_opt() {
        Some(next) => start_of_day(next),
        None => NaiveDateTime::MAX,
    }
}

/// True when `t` lies in `[start_of_day(day), end_of_day(day))`.
pub fn is_same_day(t: NaiveDateTime, day: NaiveDate) -> bool {
    t >= start_of_day(day) && t < end_of_day(day)
}

/// Calculate the start of the week containing the given date.
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - first_day.num_days_from_monday())
        % 7;
    date - Duration::days(offset as i64)
}

/// Hours shown down the left guide column.
pub fn hours() -> impl Iterator<Item = u32> {
    0..24
}

/// Label for an hour row, either `13:00` or `1 PM` style.
pub fn format_hour(hour: u32, ampm: bool) -> String {
    if ampm {
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let display = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{} {}", display, suffix)
    } else {
        format!("{}:00", hour)
    }
}

/// Clock time for an event label, honouring the AM/PM preference.
pub fn format_time(t: NaiveDateTime, ampm: bool) -> String {
    if ampm {
        t.format("%-I:%M %p").to_string()
    } else {
        t.format("%H:%M").to_string()
    }
}
