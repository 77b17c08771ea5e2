//! Time grid rendering for the calendar body.
//!
//! Lays out the hour guide column and one column per day, paints hour cells,
//! places each day's events through the layout engine, draws the now
//! indicator, and feeds pointer movement to the swipe tracker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use egui::{Align2, Color32, Id, Pos2, Rect, Sense, Stroke, Vec2};

use super::event_rendering::paint_event_block;
use super::types::GridResponse;
use super::utils::{column_slots, format_event_time};
use crate::models::event::Event;
use crate::models::layout::PlacementOptions;
use crate::models::settings::GridSettings;
use crate::services::layout::{is_today_at, layout_day, relative_top_in_day};
use crate::ui_egui::gesture::{HorizontalDirection, SwipeTracker};
use crate::utils::date::{format_hour, hours};

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const COLUMN_SPACING: f32 = 1.0;
const NOW_INDICATOR_HEIGHT: f32 = 2.0;
const NOW_INDICATOR_COLOR: Color32 = Color32::RED;

/// Horizontal geometry of the grid for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridColumns {
    pub guide_x: f32,
    pub first_column_x: f32,
    pub column_width: f32,
    pub is_rtl: bool,
}

impl GridColumns {
    pub fn new(left: f32, total_width: f32, day_count: usize, is_rtl: bool) -> Self {
        let day_count = day_count.max(1) as f32;
        let days_width = (total_width - TIME_LABEL_WIDTH).max(0.0);
        let column_width = ((days_width - COLUMN_SPACING * (day_count - 1.0)) / day_count).max(0.0);

        let (guide_x, first_column_x) = if is_rtl {
            (left + days_width, left)
        } else {
            (left, left + TIME_LABEL_WIDTH)
        };

        Self {
            guide_x,
            first_column_x,
            column_width,
            is_rtl,
        }
    }

    /// Left edge of the column shown in visual slot `slot`.
    pub fn column_x(&self, slot: usize) -> f32 {
        self.first_column_x + slot as f32 * (self.column_width + COLUMN_SPACING)
    }
}

/// Render day labels above the grid, aligned with the day columns.
pub fn render_day_header(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    settings: &GridSettings,
    today: NaiveDate,
) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 28.0), Sense::hover());
    let columns = GridColumns::new(rect.left(), width, dates.len(), settings.is_rtl);
    let painter = ui.painter_at(rect);

    for (date, slot) in dates.iter().zip(column_slots(dates.len(), settings.is_rtl)) {
        let center = Pos2::new(
            columns.column_x(slot) + columns.column_width / 2.0,
            rect.center().y,
        );
        let color = if *date == today {
            ui.visuals().hyperlink_color
        } else {
            ui.visuals().text_color()
        };
        painter.text(
            center,
            Align2::CENTER_CENTER,
            date.format("%a %d").to_string(),
            egui::FontId::proportional(13.0),
            color,
        );
    }
}

/// Render the scrollable body for `dates`.
///
/// `scroll_request` is consumed on the frame it is applied, so the initial
/// scroll offset only moves the view once.
#[allow(clippy::too_many_arguments)]
pub fn render_time_grid<'a, T>(
    ui: &mut egui::Ui,
    settings: &GridSettings,
    dates: &[NaiveDate],
    events: &'a [Event<T>],
    options: &PlacementOptions<T>,
    now: NaiveDateTime,
    swipe: &mut SwipeTracker,
    scroll_request: &mut Option<f32>,
) -> GridResponse<'a, T> {
    let mut result = GridResponse::default();

    let mut scroll_area = egui::ScrollArea::vertical()
        .id_source("time_grid_body")
        .max_height(settings.body_height())
        .auto_shrink([false, false]);
    if let Some(offset) = scroll_request.take() {
        scroll_area = scroll_area.vertical_scroll_offset(offset);
    }

    scroll_area.show(ui, |ui| {
        let width = ui.available_width();
        let day_height = settings.day_height();
        let (grid_rect, _) = ui.allocate_exact_size(Vec2::new(width, day_height), Sense::hover());
        let columns = GridColumns::new(grid_rect.left(), width, dates.len(), settings.is_rtl);

        render_hour_guide(ui, grid_rect, &columns, settings);

        for (date, slot) in dates.iter().zip(column_slots(dates.len(), settings.is_rtl)) {
            let column_rect = Rect::from_min_size(
                Pos2::new(columns.column_x(slot), grid_rect.top()),
                Vec2::new(columns.column_width, day_height),
            );

            if let Some(pressed) = render_hour_cells(ui, column_rect, *date, settings) {
                result.pressed_cell = Some(pressed);
            }

            if let Some(pressed) = render_day_events(ui, column_rect, *date, events, options, settings) {
                result.pressed_event = Some(pressed);
            }

            if !settings.hide_now_indicator && is_today_at(*date, now) {
                draw_now_indicator(ui, column_rect, now);
            }
        }

        result.swipe = track_swipe(ui, grid_rect, swipe);
    });

    result
}

fn render_hour_guide(ui: &egui::Ui, grid_rect: Rect, columns: &GridColumns, settings: &GridSettings) {
    let painter = ui.painter();
    let text_color = ui.visuals().weak_text_color();
    let (x, align) = if columns.is_rtl {
        (columns.guide_x + 6.0, Align2::LEFT_TOP)
    } else {
        (columns.guide_x + TIME_LABEL_WIDTH - 6.0, Align2::RIGHT_TOP)
    };

    for hour in hours() {
        let y = grid_rect.top() + hour as f32 * settings.cell_height;
        painter.text(
            Pos2::new(x, y + 2.0),
            align,
            format_hour(hour, settings.ampm),
            egui::FontId::proportional(12.0),
            text_color,
        );
    }
}

/// Paint the hour cells of one day column; returns the cell that was pressed.
fn render_hour_cells(
    ui: &mut egui::Ui,
    column_rect: Rect,
    date: NaiveDate,
    settings: &GridSettings,
) -> Option<NaiveDateTime> {
    let mut pressed = None;
    let line_color = ui.visuals().widgets.noninteractive.bg_stroke.color;

    for hour in hours() {
        let cell_rect = Rect::from_min_size(
            Pos2::new(
                column_rect.left(),
                column_rect.top() + hour as f32 * settings.cell_height,
            ),
            Vec2::new(column_rect.width(), settings.cell_height),
        );
        let response = ui.interact(cell_rect, Id::new(("hour_cell", date, hour)), Sense::click());

        if response.hovered() {
            ui.painter()
                .rect_filled(cell_rect, 0.0, ui.visuals().widgets.hovered.weak_bg_fill);
        }
        ui.painter().line_segment(
            [cell_rect.left_top(), cell_rect.right_top()],
            Stroke::new(1.0, line_color),
        );

        if response.clicked() {
            if let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) {
                log::debug!("Pressed cell {} {:02}:00", date, hour);
                pressed = Some(date.and_time(time));
            }
        }
    }

    ui.painter().line_segment(
        [column_rect.left_top(), column_rect.left_bottom()],
        Stroke::new(1.0, line_color),
    );

    pressed
}

/// Lay out and paint one day's events; returns the event that was pressed.
fn render_day_events<'a, T>(
    ui: &mut egui::Ui,
    column_rect: Rect,
    date: NaiveDate,
    events: &'a [Event<T>],
    options: &PlacementOptions<T>,
    settings: &GridSettings,
) -> Option<&'a Event<T>> {
    let mut placed = layout_day(events, date, options);
    placed.sort_by_key(|p| p.rendered.style.z_index.unwrap_or(0));

    let mut pressed = None;
    for item in placed {
        let frame = item
            .rendered
            .frame(column_rect.width(), column_rect.height());
        let rect = Rect::from_min_size(
            Pos2::new(column_rect.left() + frame.x, column_rect.top() + frame.y),
            Vec2::new(frame.width, frame.height),
        );

        let time_label = settings
            .show_time
            .then(|| format_event_time(item.event, settings.ampm));
        paint_event_block(
            ui,
            rect,
            &item.event.title,
            time_label.as_deref(),
            &item.rendered.style,
        );

        let response = ui
            .interact(rect, Id::new(("event", date, item.event.render_key())), Sense::click())
            .on_hover_text(item.event.title.as_str());
        if response.clicked() {
            log::debug!("Pressed event '{}'", item.event.title);
            pressed = Some(item.event);
        }
    }

    pressed
}

/// Draw the current time line across a day column.
fn draw_now_indicator(ui: &egui::Ui, column_rect: Rect, now: NaiveDateTime) {
    let y = column_rect.top() + relative_top_in_day(now) * column_rect.height();
    let line = Rect::from_min_size(
        Pos2::new(column_rect.left(), y - NOW_INDICATOR_HEIGHT / 2.0),
        Vec2::new(column_rect.width(), NOW_INDICATOR_HEIGHT),
    );
    ui.painter().rect_filled(line, 0.0, NOW_INDICATOR_COLOR);
}

/// Feed the pointer's displacement since it was pressed inside the grid.
fn track_swipe(
    ui: &egui::Ui,
    grid_rect: Rect,
    swipe: &mut SwipeTracker,
) -> Option<HorizontalDirection> {
    let (origin, current, down) = ui.input(|i| {
        (
            i.pointer.press_origin(),
            i.pointer.interact_pos(),
            i.pointer.any_down(),
        )
    });

    match (origin, current, down) {
        (Some(origin), Some(current), true) if grid_rect.contains(origin) => {
            let delta = current - origin;
            swipe.update(delta.x, delta.y)
        }
        (_, _, false) => {
            swipe.end();
            None
        }
        _ => None,
    }
}
