//! Vertical placement math for a 24-hour day column.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::models::layout::MINUTES_PER_DAY;

pub use crate::utils::date::is_same_day;

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_since_midnight(t: NaiveDateTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Offset of `t` from the top of its day column as a fraction in `[0, 1)`.
///
/// Used for event tops and the now indicator. Only the time of day matters, so
/// `23:59` gives ~0.9993 and midnight of any day gives 0.
pub fn relative_top_in_day(t: NaiveDateTime) -> f32 {
    minutes_since_midnight(t) as f32 / MINUTES_PER_DAY
}

/// True when `day` is today according to the local wall clock.
pub fn is_today(day: NaiveDate) -> bool {
    is_today_at(day, Local::now().naive_local())
}

/// [`is_today`] against an explicit clock reading.
pub fn is_today_at(day: NaiveDate, now: NaiveDateTime) -> bool {
    is_same_day(now, day)
}
