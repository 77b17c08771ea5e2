use serde::{Deserialize, Serialize};

use crate::models::settings::DEFAULT_SWIPE_THRESHOLD;

/// Movement in points before a press is treated as a gesture at all.
const CLAIM_DISTANCE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    Left,
    Right,
}

/// Recognises one horizontal swipe per press.
///
/// Feed it the pointer's total displacement since the press began; it fires at
/// most once until [`SwipeTracker::end`] is called.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: f32,
    claimed: bool,
    handled: bool,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            claimed: false,
            handled: false,
        }
    }

    /// Whether the current press has moved far enough to count as a gesture.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn update(&mut self, dx: f32, dy: f32) -> Option<HorizontalDirection> {
        if !self.claimed {
            if dx.abs() <= CLAIM_DISTANCE && dy.abs() <= CLAIM_DISTANCE {
                return None;
            }
            self.claimed = true;
        }

        if dy.abs() > self.threshold || self.handled {
            return None;
        }

        let direction = if dx < -self.threshold {
            HorizontalDirection::Left
        } else if dx > self.threshold {
            HorizontalDirection::Right
        } else {
            return None;
        };

        self.handled = true;
        log::debug!("Swipe recognised: {:?}", direction);
        Some(direction)
    }

    /// Press released; the next press may fire again.
    pub fn end(&mut self) {
        self.claimed = false;
        self.handled = false;
    }
}
