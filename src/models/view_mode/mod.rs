// View mode module
// Which days the grid shows around an anchor date

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::date::week_start;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Day,
    ThreeDays,
    #[default]
    Week,
    /// A fixed number of consecutive days starting at the anchor.
    Custom(u8),
}

impl ViewMode {
    /// Number of day columns this mode renders.
    pub fn day_count(&self) -> usize {
        match self {
            ViewMode::Day => 1,
            ViewMode::ThreeDays => 3,
            ViewMode::Week => 7,
            ViewMode::Custom(n) => (*n).max(1) as usize,
        }
    }

    /// Ordered days visible for `anchor`.
    ///
    /// `Week` snaps to `first_day`; every other mode starts at the anchor itself.
    pub fn date_range(&self, anchor: NaiveDate, first_day: Weekday) -> Vec<NaiveDate> {
        let first = match self {
            ViewMode::Week => week_start(anchor, first_day),
            _ => anchor,
        };
        first.iter_days().take(self.day_count()).collect()
    }

    /// Move the anchor one full page forwards (`steps > 0`) or backwards.
    pub fn shift(&self, anchor: NaiveDate, steps: i64) -> NaiveDate {
        let days = self.day_count() as i64 * steps;
        anchor
            .checked_add_signed(Duration::days(days))
            .unwrap_or(anchor)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::ThreeDays => write!(f, "3days"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Custom(n) => write!(f, "{}days", n),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "3days" | "three_days" => Ok(ViewMode::ThreeDays),
            "week" => Ok(ViewMode::Week),
            other => other
                .strip_suffix("days")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| *n > 0)
                .map(ViewMode::Custom)
                .ok_or_else(|| format!("Unknown view mode '{}'", s)),
        }
    }
}
