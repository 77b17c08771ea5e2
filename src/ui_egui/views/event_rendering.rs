//! Event rendering helpers for the time grid.
//!
//! Paints a single positioned event block from its resolved `StyleSpec`.

use egui::{Color32, Pos2, Rect, Rounding, Stroke};

use super::utils::parse_color;
use crate::models::layout::StyleSpec;

const DEFAULT_EVENT_COLOR: Color32 = Color32::from_rgb(100, 150, 200);
const DEFAULT_FONT_SIZE: f32 = 12.0;
const DEFAULT_RADIUS: f32 = 3.0;
const TEXT_PADDING: f32 = 4.0;

/// Colours and sizes for one block, resolved from a `StyleSpec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockVisuals {
    pub fill: Color32,
    pub text: Color32,
    pub border: Option<Color32>,
    pub radius: f32,
    pub font_size: f32,
}

impl BlockVisuals {
    pub fn from_style(style: &StyleSpec) -> Self {
        let opacity = style.opacity.unwrap_or(1.0).clamp(0.0, 1.0);
        let fill = style
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(DEFAULT_EVENT_COLOR)
            .gamma_multiply(opacity);
        let text = style
            .text_color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color32::WHITE)
            .gamma_multiply(opacity);

        Self {
            fill,
            text,
            border: style.border_color.as_deref().and_then(parse_color),
            radius: style.border_radius.unwrap_or(DEFAULT_RADIUS).max(0.0),
            font_size: style.font_size.unwrap_or(DEFAULT_FONT_SIZE).max(1.0),
        }
    }
}

/// Paint one event block with an optional time line above the title.
pub fn paint_event_block(
    ui: &egui::Ui,
    rect: Rect,
    title: &str,
    time_label: Option<&str>,
    style: &StyleSpec,
) {
    let visuals = BlockVisuals::from_style(style);
    let painter = ui.painter_at(rect);
    let rounding = Rounding::same(visuals.radius);

    painter.rect_filled(rect, rounding, visuals.fill);
    if let Some(border) = visuals.border {
        painter.rect_stroke(rect, rounding, Stroke::new(1.0, border));
    }

    let mut cursor = Pos2::new(rect.left() + TEXT_PADDING, rect.top() + 2.0);
    let available_width = (rect.width() - TEXT_PADDING * 2.0).max(0.0);

    if let Some(time_label) = time_label {
        let font_id = egui::FontId::proportional((visuals.font_size - 2.0).max(1.0));
        let galley = ui.fonts(|f| {
            f.layout_job(egui::text::LayoutJob::simple_singleline(
                time_label.to_string(),
                font_id,
                visuals.text,
            ))
        });
        let height = galley.size().y;
        painter.galley(cursor, galley, visuals.text);
        cursor.y += height;
    }

    let layout_job = egui::text::LayoutJob::simple(
        title.to_string(),
        egui::FontId::proportional(visuals.font_size),
        visuals.text,
        available_width,
    );
    let galley = ui.fonts(|f| f.layout_job(layout_job));
    painter.galley(cursor, galley, visuals.text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_default() {
        let visuals = BlockVisuals::from_style(&StyleSpec::default());
        assert_eq!(visuals.fill, DEFAULT_EVENT_COLOR);
        assert_eq!(visuals.text, Color32::WHITE);
        assert_eq!(visuals.border, None);
        assert_eq!(visuals.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_visuals_from_style() {
        let style = StyleSpec {
            background: Some("#112233".to_string()),
            border_color: Some("#000000".to_string()),
            border_radius: Some(8.0),
            font_size: Some(14.0),
            ..StyleSpec::default()
        };
        let visuals = BlockVisuals::from_style(&style);

        assert_eq!(visuals.fill, Color32::from_rgb(0x11, 0x22, 0x33));
        assert_eq!(visuals.border, Some(Color32::BLACK));
        assert_eq!(visuals.radius, 8.0);
        assert_eq!(visuals.font_size, 14.0);
    }

    #[test]
    fn test_invalid_background_falls_back() {
        let style = StyleSpec::default().with_background("blue");
        assert_eq!(BlockVisuals::from_style(&style).fill, DEFAULT_EVENT_COLOR);
    }

    #[test]
    fn test_zero_opacity_is_transparent() {
        let style = StyleSpec {
            opacity: Some(0.0),
            ..StyleSpec::default()
        };
        assert_eq!(BlockVisuals::from_style(&style).fill, Color32::TRANSPARENT);
    }
}
