// Property-based tests for the layout engine
// Random days of events must always produce a well-formed column layout

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_timegrid::models::event::Event;
use rust_timegrid::models::layout::PlacementOptions;
use rust_timegrid::services::layout::{compute_concurrency, layout_day, relative_top_in_day};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn at_minute(minute: u32) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minute as i64)
}

/// (start minute within the day, duration in minutes)
fn event_strategy() -> impl Strategy<Value = Event> {
    (0u32..1440, 0i64..600).prop_map(|(start, length)| {
        let start = at_minute(start);
        Event::new("Generated", start, start + Duration::minutes(length), ())
    })
}

proptest! {
    /// Property: every time of day maps into [0, 1)
    #[test]
    fn prop_relative_top_in_unit_range(minute in 0u32..1440) {
        let top = relative_top_in_day(at_minute(minute));
        prop_assert!((0.0..1.0).contains(&top));
    }

    /// Property: N identical events take ordinals 0..N in input order
    #[test]
    fn prop_identical_events_get_every_ordinal(count in 1usize..12, start in 0u32..1380) {
        let start = at_minute(start);
        let events: Vec<Event> = (0..count)
            .map(|_| Event::new("Same", start, start + Duration::minutes(30), ()))
            .collect();

        let ordinals: Vec<usize> = events
            .iter()
            .map(|e| compute_concurrency(e, &events).ordinal)
            .collect();
        prop_assert_eq!(ordinals, (0..count).collect::<Vec<_>>());
    }

    /// Property: every placed block stays inside its day column
    #[test]
    fn prop_blocks_stay_inside_column(
        events in prop::collection::vec(event_strategy(), 0..40),
        offset in 0.0f32..20.0,
    ) {
        let options = PlacementOptions::default().with_overlap_offset(offset);
        let placed = layout_day(&events, day(), &options);
        prop_assert_eq!(placed.len(), events.len());

        for p in placed {
            let r = p.rendered;
            prop_assert!(r.column_count >= 1);
            prop_assert!(r.column_index < r.column_count);
            prop_assert!(r.height_fraction >= 0.0);
            prop_assert!(r.top_fraction + r.height_fraction <= 1.0 + 1e-5);
            prop_assert!((r.width_fraction * r.column_count as f32 - 1.0).abs() < 1e-5);
            prop_assert!(r.left_fraction + r.width_fraction <= 1.0 + 1e-5);
        }
    }

    /// Property: layout does not depend on anything but its inputs
    #[test]
    fn prop_layout_is_deterministic(events in prop::collection::vec(event_strategy(), 0..20)) {
        let options = PlacementOptions::default();
        prop_assert_eq!(
            layout_day(&events, day(), &options),
            layout_day(&events, day(), &options)
        );
    }
}
