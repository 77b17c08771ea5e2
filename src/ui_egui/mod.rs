mod app;
pub mod gesture;
pub mod now_clock;
pub mod views;

pub use app::TimeGridApp;
