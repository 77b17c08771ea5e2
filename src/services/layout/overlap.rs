//! Horizontal partitioning of concurrent events within one day column.
//!
//! Each event is resolved on its own: its column count is the number of events
//! concurrent with it, and its column is its rank among them by start time with
//! input order breaking ties. This is not a global interval-graph colouring, so
//! when the overlap graph is not a clique some events get narrower columns than
//! strictly necessary. Existing layouts depend on that, so keep it.

use chrono::NaiveDateTime;

use crate::models::event::Event;
use crate::models::layout::Concurrency;

/// Anything with a start and end instant.
pub trait TimeSpan {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;

    /// Address of the underlying span; references share it with their target.
    fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }
}

impl<T> TimeSpan for Event<T> {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl<S: TimeSpan + ?Sized> TimeSpan for &S {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }

    fn identity(&self) -> *const () {
        (**self).identity()
    }
}

/// Half-open `[start, end)` intersection.
pub fn overlaps(a: &impl TimeSpan, b: &impl TimeSpan) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// Events are concurrent when they intersect or start at the same instant.
///
/// The second rule catches zero-duration events, which never intersect anything.
pub fn is_concurrent(a: &impl TimeSpan, b: &impl TimeSpan) -> bool {
    overlaps(a, b) || a.start() == b.start()
}

/// Concurrency of `target` among `day_events`.
///
/// `target` is located in `day_events` by address, so a slice of references
/// finds the events they point at. A target that is not part of the slice is
/// treated as if it were appended after the last element: it counts itself and
/// loses start-time ties to every member, which keeps `count >= 1` and
/// `ordinal < count`. Counting only the members and ranking the outsider first
/// would give an isolated outsider zero columns.
pub fn compute_concurrency<S: TimeSpan>(target: &S, day_events: &[S]) -> Concurrency {
    let identity = target.identity();
    match day_events
        .iter()
        .position(|candidate| candidate.identity() == identity)
    {
        Some(index) => concurrency_at(index, day_events),
        None => resolve(target, day_events.len(), day_events, None),
    }
}

/// Concurrency of the event at `index` in `day_events`.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn concurrency_at<S: TimeSpan>(index: usize, day_events: &[S]) -> Concurrency {
    resolve(&day_events[index], index, day_events, Some(index))
}

/// Number of events concurrent with the event at `index`, itself included.
pub fn concurrency_count<S: TimeSpan>(index: usize, day_events: &[S]) -> usize {
    concurrency_at(index, day_events).count
}

/// Zero-based column of the event at `index`.
pub fn ordinal_slot<S: TimeSpan>(index: usize, day_events: &[S]) -> usize {
    concurrency_at(index, day_events).ordinal
}

fn resolve<S: TimeSpan>(
    target: &S,
    position: usize,
    day_events: &[S],
    skip: Option<usize>,
) -> Concurrency {
    let key = (target.start(), position);
    let mut count = 1;
    let mut ordinal = 0;

    for (index, other) in day_events.iter().enumerate() {
        if Some(index) == skip || !is_concurrent(target, other) {
            continue;
        }
        count += 1;
        if (other.start(), index) < key {
            ordinal += 1;
        }
    }

    Concurrency { count, ordinal }
}
