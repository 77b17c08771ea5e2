use chrono::{Local, NaiveDate};
use std::time::Instant;

use crate::models::layout::PlacementOptions;
use crate::models::settings::GridSettings;
use crate::models::view_mode::ViewMode;
use crate::services::event_source::{details_style, EventDetails, GridEvent};
use crate::ui_egui::gesture::{HorizontalDirection, SwipeTracker};
use crate::ui_egui::now_clock::NowClock;
use crate::ui_egui::views::{render_day_header, render_time_grid};
use crate::utils::date::format_time;

pub struct TimeGridApp {
    settings: GridSettings,
    events: Vec<GridEvent>,
    options: PlacementOptions<EventDetails>,
    anchor: NaiveDate,
    swipe: SwipeTracker,
    clock: NowClock,
    /// Applied once, on the first frame the body is shown
    scroll_request: Option<f32>,
    status: Option<String>,
}

impl TimeGridApp {
    pub fn new(settings: GridSettings, events: Vec<GridEvent>) -> Self {
        let options = PlacementOptions::default()
            .with_overlap_offset(settings.overlap_offset)
            .with_style(details_style());

        Self {
            swipe: SwipeTracker::new(settings.swipe_threshold),
            scroll_request: Some(settings.initial_scroll_offset()),
            anchor: Local::now().date_naive(),
            clock: NowClock::default(),
            status: None,
            settings,
            events,
            options,
        }
    }

    fn dates(&self) -> Vec<NaiveDate> {
        self.settings
            .view_mode
            .date_range(self.anchor, self.settings.week_start)
    }

    fn navigate(&mut self, steps: i64) {
        self.anchor = self.settings.view_mode.shift(self.anchor, steps);
        log::info!("Showing {} from {}", self.settings.view_mode, self.anchor);
    }

    fn handle_swipe(&mut self, direction: HorizontalDirection) {
        match direction {
            HorizontalDirection::Left => self.navigate(1),
            HorizontalDirection::Right => self.navigate(-1),
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.navigate(-1);
            }
            if ui.button("Today").clicked() {
                self.anchor = Local::now().date_naive();
            }
            if ui.button("▶").clicked() {
                self.navigate(1);
            }

            ui.separator();

            let mut mode = self.settings.view_mode;
            egui::ComboBox::from_id_source("view_mode")
                .selected_text(mode.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut mode, ViewMode::Day, "day");
                    ui.selectable_value(&mut mode, ViewMode::ThreeDays, "3days");
                    ui.selectable_value(&mut mode, ViewMode::Week, "week");
                });
            if mode != self.settings.view_mode {
                log::info!("View mode changed to {}", mode);
                self.settings.view_mode = mode;
            }

            ui.checkbox(&mut self.settings.ampm, "AM/PM");
            ui.checkbox(&mut self.settings.is_rtl, "RTL");

            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status.as_str());
            }
        });
    }
}

impl eframe::App for TimeGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.settings.hide_now_indicator {
            self.clock.poll_local();
            ctx.request_repaint_after(self.clock.time_until_refresh(Instant::now()));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        let dates = self.dates();
        let now = self.clock.now();

        egui::CentralPanel::default().show(ctx, |ui| {
            render_day_header(ui, &dates, &self.settings, now.date());

            let response = render_time_grid(
                ui,
                &self.settings,
                &dates,
                &self.events,
                &self.options,
                now,
                &mut self.swipe,
                &mut self.scroll_request,
            );

            // Event presses land on top of cells, so prefer them
            let status = if let Some(event) = response.pressed_event {
                let location = event
                    .extra
                    .location
                    .as_deref()
                    .map(|l| format!(" @ {}", l))
                    .unwrap_or_default();
                Some(format!(
                    "{} ({}){}",
                    event.title,
                    format_time(event.start, self.settings.ampm),
                    location
                ))
            } else {
                response.pressed_cell.map(|cell| {
                    format!("New event at {}", cell.format("%a %d %b %H:%M"))
                })
            };
            let swipe = response.swipe;

            if status.is_some() {
                self.status = status;
            }
            if let Some(direction) = swipe {
                self.handle_swipe(direction);
            }
        });
    }
}
