// Layout service
// Pure event-layout engine: vertical placement, overlap resolution, placement

pub mod overlap;
pub mod placer;
pub mod time_math;

pub use overlap::{
    compute_concurrency, concurrency_at, concurrency_count, is_concurrent, ordinal_slot,
    overlaps, TimeSpan,
};
pub use placer::{events_for_day, layout_day, place_event};
pub use time_math::{is_same_day, is_today, is_today_at, relative_top_in_day};
