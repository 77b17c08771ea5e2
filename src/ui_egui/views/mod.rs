pub mod event_rendering;
pub mod time_grid;
pub mod types;
pub mod utils;

pub use time_grid::{render_day_header, render_time_grid};
pub use types::GridResponse;
