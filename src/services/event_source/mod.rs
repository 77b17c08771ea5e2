// Event source
// Loads events for the desktop grid from JSON, or builds a sample day

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::event::Event;
use crate::models::layout::{EventCellStyle, StyleSpec};

/// Payload the desktop app attaches to each event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    /// Hex colour such as `#3366CC`.
    pub color: Option<String>,
    pub location: Option<String>,
}

pub type GridEvent = Event<EventDetails>;

/// Read a JSON array of events.
///
/// Events that fail validation are dropped with a warning rather than failing
/// the whole file.
pub fn load_events(path: &Path) -> Result<Vec<GridEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<GridEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;

    let total = events.len();
    let valid: Vec<GridEvent> = events
        .into_iter()
        .filter(|event| match event.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Skipping event '{}': {}", event.title, err);
                false
            }
        })
        .collect();

    log::info!(
        "Loaded {} events from {} ({} skipped)",
        valid.len(),
        path.display(),
        total - valid.len()
    );
    Ok(valid)
}

/// Style that paints each event in its own colour, if it has one.
pub fn details_style() -> EventCellStyle<EventDetails> {
    EventCellStyle::computed(|event: &GridEvent| StyleSpec {
        background: event.extra.color.clone(),
        ..StyleSpec::default()
    })
}

/// A handful of events around `day` that exercise overlapping layouts.
pub fn sample_events(day: NaiveDate) -> Vec<GridEvent> {
    let at = |offset_days: i64, h: u32, m: u32| {
        (day + Duration::days(offset_days)).and_time(
            NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN),
        )
    };
    let details = |color: &str, location: Option<&str>| EventDetails {
        color: Some(color.to_string()),
        location: location.map(str::to_string),
    };

    vec![
        Event::new("Standup", at(0, 9, 0), at(0, 9, 15), details("#4A90D9", None)),
        Event::new(
            "Design review",
            at(0, 9, 0),
            at(0, 10, 30),
            details("#7B61FF", Some("Room 3")),
        ),
        Event::new("1:1", at(0, 10, 0), at(0, 11, 0), details("#2BA66A", None)),
        Event::new("Reminder", at(0, 10, 0), at(0, 10, 0), details("#E0A030", None)),
        Event::new("Lunch", at(0, 12, 30), at(0, 13, 30), details("#D9534F", Some("Cafe"))),
        Event::new("Focus time", at(1, 14, 0), at(1, 17, 0), details("#4A90D9", None)),
        Event::new("Gym", at(2, 18, 0), at(2, 19, 0), details("#2BA66A", Some("Gym"))),
        Event::new("Deploy", at(2, 18, 30), at(2, 19, 0), details("#E0A030", None)),
    ]
}
