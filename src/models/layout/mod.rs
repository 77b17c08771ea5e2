// Layout module
// Output geometry and style types produced by the layout engine

use serde::{Deserialize, Serialize};

use crate::models::event::Event;

/// Minutes in the 24-hour column every fraction is relative to.
pub const MINUTES_PER_DAY: f32 = 24.0 * 60.0;

/// Default minimum block height: one 15-minute slot.
pub const DEFAULT_MIN_HEIGHT_FRACTION: f32 = 15.0 / MINUTES_PER_DAY;

/// How many events share a target event's time and where the target sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Concurrency {
    /// Events concurrent with the target, the target included. Always >= 1.
    pub count: usize,
    /// Zero-based column assigned to the target, `< count`.
    pub ordinal: usize,
}

impl Concurrency {
    pub const ISOLATED: Concurrency = Concurrency { count: 1, ordinal: 0 };
}

/// Visual overrides for an event block.
///
/// Position fields (`top`, `height`, `left`, `width`) are always overwritten by
/// the computed geometry; a caller can only augment the remaining fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub top: Option<f32>,
    pub height: Option<f32>,
    pub left: Option<f32>,
    pub width: Option<f32>,
    /// Hex colour such as `#3366CC`.
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<f32>,
    pub opacity: Option<f32>,
    pub font_size: Option<f32>,
    /// Draw order; higher values paint last.
    pub z_index: Option<i32>,
}

impl StyleSpec {
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }
}

/// Caller-supplied style: a fixed value or a function of the event.
pub enum EventCellStyle<T> {
    Static(StyleSpec),
    Computed(Box<dyn Fn(&Event<T>) -> StyleSpec>),
}

impl<T> EventCellStyle<T> {
    pub fn computed(f: impl Fn(&Event<T>) -> StyleSpec + 'static) -> Self {
        EventCellStyle::Computed(Box::new(f))
    }

    /// Produce the style for one event. Computed styles run exactly once per call.
    pub fn resolve(&self, event: &Event<T>) -> StyleSpec {
        match self {
            EventCellStyle::Static(style) => style.clone(),
            EventCellStyle::Computed(f) => f(event),
        }
    }
}

impl<T> Default for EventCellStyle<T> {
    fn default() -> Self {
        EventCellStyle::Static(StyleSpec::default())
    }
}

impl<T> std::fmt::Debug for EventCellStyle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCellStyle::Static(style) => f.debug_tuple("Static").field(style).finish(),
            EventCellStyle::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<T> From<StyleSpec> for EventCellStyle<T> {
    fn from(style: StyleSpec) -> Self {
        EventCellStyle::Static(style)
    }
}

/// Per-render options for [`place_event`](crate::services::layout::place_event).
#[derive(Debug)]
pub struct PlacementOptions<T> {
    /// Gap in points between adjacent concurrent events.
    pub overlap_offset: f32,
    /// Smallest height handed to the renderer, as a fraction of the day.
    pub min_height_fraction: f32,
    pub style: EventCellStyle<T>,
}

impl<T> Default for PlacementOptions<T> {
    fn default() -> Self {
        Self {
            overlap_offset: 0.0,
            min_height_fraction: DEFAULT_MIN_HEIGHT_FRACTION,
            style: EventCellStyle::default(),
        }
    }
}

impl<T> PlacementOptions<T> {
    pub fn with_overlap_offset(mut self, offset: f32) -> Self {
        self.overlap_offset = offset;
        self
    }

    pub fn with_style(mut self, style: impl Into<EventCellStyle<T>>) -> Self {
        self.style = style.into();
        self
    }
}

/// Geometry and style for one event within a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedEvent {
    pub top_fraction: f32,
    pub height_fraction: f32,
    pub column_index: usize,
    pub column_count: usize,
    pub left_fraction: f32,
    pub width_fraction: f32,
    /// Points trimmed from each side of the block; zero for isolated events.
    pub overlap_inset: f32,
    pub style: StyleSpec,
}

/// A rectangle in points, relative to the day column's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderedEvent {
    /// Resolve fractions against a concrete column size.
    pub fn frame(&self, column_width: f32, column_height: f32) -> PixelFrame {
        let slot_width = column_width * self.width_fraction;
        let inset = self.overlap_inset.min(slot_width / 2.0).max(0.0);
        PixelFrame {
            x: column_width * self.left_fraction + inset,
            y: column_height * self.top_fraction,
            width: slot_width - inset * 2.0,
            height: column_height * self.height_fraction,
        }
    }
}

/// An event of a day column paired with its layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent<'a, T> {
    pub event: &'a Event<T>,
    pub rendered: RenderedEvent,
}
