// Settings module
// Rendering configuration consumed by the time grid

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::view_mode::ViewMode;

/// Default swipe distance in points before a horizontal swipe is recognised.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Height of one hour row in points.
    pub cell_height: f32,
    /// Height of the whole calendar; the scroll body gets this minus three rows.
    pub container_height: f32,
    pub ampm: bool,
    pub is_rtl: bool,
    /// Show the time range inside event blocks.
    pub show_time: bool,
    pub hide_now_indicator: bool,
    /// Gap in points between side-by-side concurrent events.
    pub overlap_offset: f32,
    /// Minutes past midnight the body is scrolled to on first display.
    pub scroll_offset_minutes: u32,
    pub swipe_threshold: f32,
    pub week_start: Weekday,
    pub view_mode: ViewMode,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_height: 50.0,
            container_height: 800.0,
            ampm: false,
            is_rtl: false,
            show_time: true,
            hide_now_indicator: false,
            overlap_offset: 4.0,
            scroll_offset_minutes: 8 * 60,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            week_start: Weekday::Sun,
            view_mode: ViewMode::Week,
        }
    }
}

impl GridSettings {
    /// Reject values the grid cannot render.
    pub fn validate(&self) -> Result<(), String> {
        if !self.cell_height.is_finite() || self.cell_height <= 0.0 {
            return Err("Cell height must be a positive number".to_string());
        }

        if !self.container_height.is_finite() || self.container_height < 0.0 {
            return Err("Container height cannot be negative".to_string());
        }

        if !self.overlap_offset.is_finite() || self.overlap_offset < 0.0 {
            return Err("Overlap offset cannot be negative".to_string());
        }

        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err("Swipe threshold must be a positive number".to_string());
        }

        if self.scroll_offset_minutes >= 24 * 60 {
            return Err("Scroll offset must be within a single day".to_string());
        }

        Ok(())
    }

    /// Height of the scrollable body.
    pub fn body_height(&self) -> f32 {
        (self.container_height - self.cell_height * 3.0).max(0.0)
    }

    /// Height of the full 24-hour column.
    pub fn day_height(&self) -> f32 {
        self.cell_height * 24.0
    }

    /// Initial vertical scroll position in points.
    pub fn initial_scroll_offset(&self) -> f32 {
        self.cell_height * self.scroll_offset_minutes as f32 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GridSettings::default();
        assert_eq!(settings.cell_height, 50.0);
        assert_eq!(settings.swipe_threshold, 50.0);
        assert!(!settings.ampm);
        assert!(!settings.is_rtl);
        assert_eq!(settings.view_mode, ViewMode::Week);
    }

    #[test]
    fn test_derived_heights() {
        let settings = GridSettings {
            cell_height: 40.0,
            container_height: 600.0,
            scroll_offset_minutes: 90,
            ..GridSettings::default()
        };

        assert_eq!(settings.body_height(), 480.0);
        assert_eq!(settings.day_height(), 960.0);
        assert_eq!(settings.initial_scroll_offset(), 60.0);
    }

    #[test]
    fn test_body_height_never_negative() {
        let settings = GridSettings {
            cell_height: 100.0,
            container_height: 200.0,
            ..GridSettings::default()
        };
        assert_eq!(settings.body_height(), 0.0);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(GridSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_cells = GridSettings {
            cell_height: 0.0,
            ..GridSettings::default()
        };
        assert!(zero_cells.validate().unwrap_err().contains("Cell height"));

        let negative_gap = GridSettings {
            overlap_offset: -1.0,
            ..GridSettings::default()
        };
        assert!(negative_gap.validate().unwrap_err().contains("Overlap offset"));

        let past_midnight = GridSettings {
            scroll_offset_minutes: 1440,
            ..GridSettings::default()
        };
        assert!(past_midnight.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: GridSettings = toml::from_str("ampm = true\nweek_start = \"Mon\"").unwrap();
        assert!(settings.ampm);
        assert_eq!(settings.week_start, Weekday::Mon);
        assert_eq!(settings.cell_height, 50.0);
    }
}
