//! Shared types for the time grid views.

use chrono::NaiveDateTime;

use crate::models::event::Event;
use crate::ui_egui::gesture::HorizontalDirection;

/// What the user did with the grid during one frame.
pub struct GridResponse<'a, T> {
    /// Start of the hour cell that was pressed.
    pub pressed_cell: Option<NaiveDateTime>,
    /// Event block that was pressed.
    pub pressed_event: Option<&'a Event<T>>,
    /// Horizontal swipe recognised this frame.
    pub swipe: Option<HorizontalDirection>,
}

impl<T> Default for GridResponse<'_, T> {
    fn default() -> Self {
        Self {
            pressed_cell: None,
            pressed_event: None,
            swipe: None,
        }
    }
}

impl<T> GridResponse<'_, T> {
    /// Check if any action needs to be processed.
    pub fn has_actions(&self) -> bool {
        self.pressed_cell.is_some() || self.pressed_event.is_some() || self.swipe.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_grid_response_default() {
        let response: GridResponse<'_, ()> = GridResponse::default();
        assert!(response.pressed_cell.is_none());
        assert!(response.pressed_event.is_none());
        assert!(!response.has_actions());
    }

    #[test]
    fn test_grid_response_with_swipe() {
        let response: GridResponse<'_, ()> = GridResponse {
            swipe: Some(HorizontalDirection::Left),
            ..GridResponse::default()
        };
        assert!(response.has_actions());
    }

    #[test]
    fn test_grid_response_with_cell() {
        let cell = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let response: GridResponse<'_, ()> = GridResponse {
            pressed_cell: Some(cell),
            ..GridResponse::default()
        };
        assert!(response.has_actions());
    }
}
