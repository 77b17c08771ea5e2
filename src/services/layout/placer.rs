//! Turns events into positioned blocks for one day column.

use chrono::NaiveDate;

use super::overlap::{compute_concurrency, concurrency_at};
use super::time_math::{minutes_since_midnight, relative_top_in_day};
use crate::models::event::Event;
use crate::models::layout::{
    Concurrency, PlacedEvent, PlacementOptions, RenderedEvent, StyleSpec, MINUTES_PER_DAY,
};
use crate::utils::date::is_same_day;

/// Events whose start falls on `day`, in input order.
pub fn events_for_day<T>(events: &[Event<T>], day: NaiveDate) -> Vec<&Event<T>> {
    events
        .iter()
        .filter(|event| is_same_day(event.start, day))
        .collect()
}

/// Place `event` among the already day-filtered `day_events`.
pub fn place_event<T>(
    event: &Event<T>,
    day_events: &[&Event<T>],
    options: &PlacementOptions<T>,
) -> RenderedEvent {
    render(event, compute_concurrency(&event, day_events), options)
}

/// Filter `events` down to `day` and place every one of them.
pub fn layout_day<'a, T>(
    events: &'a [Event<T>],
    day: NaiveDate,
    options: &PlacementOptions<T>,
) -> Vec<PlacedEvent<'a, T>> {
    let day_events = events_for_day(events, day);
    let placed: Vec<PlacedEvent<'a, T>> = day_events
        .iter()
        .enumerate()
        .map(|(index, event)| PlacedEvent {
            event: *event,
            rendered: render(event, concurrency_at(index, &day_events), options),
        })
        .collect();

    log::debug!(
        "Laid out {} of {} events for {} ({} columns max)",
        placed.len(),
        events.len(),
        day,
        placed
            .iter()
            .map(|p| p.rendered.column_count)
            .max()
            .unwrap_or(0)
    );

    placed
}

fn render<T>(
    event: &Event<T>,
    concurrency: Concurrency,
    options: &PlacementOptions<T>,
) -> RenderedEvent {
    let top_fraction = relative_top_in_day(event.start);
    let height_fraction = clamped_height(event, top_fraction, options.min_height_fraction);

    let column_count = concurrency.count.max(1);
    let column_index = concurrency.ordinal.min(column_count - 1);
    let width_fraction = 1.0 / column_count as f32;
    let left_fraction = column_index as f32 * width_fraction;
    let overlap_inset = if column_count > 1 {
        options.overlap_offset.max(0.0) / 2.0
    } else {
        0.0
    };

    // Caller style augments; the computed geometry always wins.
    let style = StyleSpec {
        top: Some(top_fraction),
        height: Some(height_fraction),
        left: Some(left_fraction),
        width: Some(width_fraction),
        ..options.style.resolve(event)
    };

    RenderedEvent {
        top_fraction,
        height_fraction,
        column_index,
        column_count,
        left_fraction,
        width_fraction,
        overlap_inset,
        style,
    }
}

/// Minute-of-day span from start to end, so the block's bottom lands on
/// `relative_top_in_day(end)`. Ends on a later day run past 1440.
fn span_minutes<T>(event: &Event<T>) -> i64 {
    let days = (event.end.date() - event.start.date()).num_days();
    days * MINUTES_PER_DAY as i64 + minutes_since_midnight(event.end) as i64
        - minutes_since_midnight(event.start) as i64
}

fn clamped_height<T>(event: &Event<T>, top: f32, min_height: f32) -> f32 {
    let minutes = span_minutes(event);
    if minutes < 0 {
        log::trace!(
            "Event '{}' ends before it starts ({} -> {})",
            event.title,
            event.start,
            event.end
        );
    }

    let raw = minutes.max(0) as f32 / MINUTES_PER_DAY;
    let remaining = 1.0 - top;
    raw.max(min_height.max(0.0)).min(remaining)
}
