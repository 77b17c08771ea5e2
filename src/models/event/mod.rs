// Event module
// Timed calendar event carrying an opaque caller payload

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A timed event placed on the grid.
///
/// `extra` belongs to the caller and is carried through layout untouched.
/// The layout engine assumes `start <= end` but never checks it; callers that
/// want to reject bad input up front can use [`Event::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Event<T = ()> {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub extra: T,
}

/// Validation failures for callers that sanitize events before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time ({end}) is before start time ({start})")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl<T> Event<T> {
    /// Create a new event. No validation is performed.
    ///
    /// # Examples
    /// ```
    /// use rust_timegrid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let event = Event::new(
    ///     "Standup",
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(9, 15, 0).unwrap(),
    ///     (),
    /// );
    /// assert_eq!(event.duration_minutes(), 15);
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        extra: T,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            extra,
        }
    }

    /// Build an event from local-zone timestamps, keeping their wall-clock time.
    pub fn from_local(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
        extra: T,
    ) -> Self {
        Self::new(title, start.naive_local(), end.naive_local(), extra)
    }

    /// Length of the event in whole minutes. Negative when `end < start`.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check the invariants the layout engine assumes.
    ///
    /// Zero-duration events are accepted.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end < self.start {
            return Err(EventError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }

        Ok(())
    }

    /// Key that identifies an event within one render pass (start plus title).
    pub fn render_key(&self) -> String {
        format!("{}{}", self.start, self.title)
    }

    /// Replace the payload, keeping the timing and title.
    pub fn map_extra<U>(self, f: impl FnOnce(T) -> U) -> Event<U> {
        Event {
            title: self.title,
            start: self.start,
            end: self.end,
            extra: f(self.extra),
        }
    }
}
