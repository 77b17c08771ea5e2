// Rust Timegrid
// Desktop entry point: loads settings and events, then runs the egui grid

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use rust_timegrid::models::view_mode::ViewMode;
use rust_timegrid::services::event_source::{load_events, sample_events};
use rust_timegrid::services::settings::SettingsService;
use rust_timegrid::ui_egui::TimeGridApp;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
struct Cli {
    /// Path to a TOML settings file (defaults to the user config directory)
    #[clap(long)]
    config: Option<PathBuf>,
    /// JSON file with an array of events; a sample day is shown without it
    #[clap(long)]
    events: Option<PathBuf>,
    /// Override the view mode: day, 3days, week or <n>days
    #[clap(long)]
    mode: Option<ViewMode>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Rust Timegrid");

    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let mut settings = settings_service.load()?;
    if let Some(mode) = cli.mode {
        settings.view_mode = mode;
    }

    let events = match cli.events {
        Some(path) => load_events(&path)?,
        None => sample_events(chrono::Local::now().date_naive()),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, settings.container_height])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let app = TimeGridApp::new(settings, events);
    eframe::run_native(
        "Rust Timegrid",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run the time grid window: {}", e))
}
