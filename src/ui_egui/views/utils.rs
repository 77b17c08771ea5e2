//! Common utility functions for the time grid.
//!
//! Pure helpers: colour parsing, column ordering and event labels.

use egui::Color32;

use crate::models::event::Event;
use crate::utils::date::format_time;

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// Visual slot (left to right) of each day column.
///
/// Right-to-left layouts mirror the order so the first day sits on the right.
pub fn column_slots(count: usize, is_rtl: bool) -> Vec<usize> {
    (0..count)
        .map(|index| if is_rtl { count - 1 - index } else { index })
        .collect()
}

/// Time range shown at the top of an event block.
pub fn format_event_time<T>(event: &Event<T>, ampm: bool) -> String {
    format!(
        "{} - {}",
        format_time(event.start, ampm),
        format_time(event.end, ampm)
    )
}
