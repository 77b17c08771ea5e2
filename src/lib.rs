// Rust Timegrid Library
// Event-layout engine for time-grid calendars, plus an egui renderer

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
