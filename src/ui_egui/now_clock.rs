use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};

/// How often the now indicator moves.
pub const NOW_REFRESH_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Holds the "now" the grid renders with and refreshes it on a fixed interval.
///
/// The layout engine never reads the clock itself; the grid polls this every
/// frame and schedules a repaint for the next refresh.
#[derive(Clone, Debug)]
pub struct NowClock {
    now: NaiveDateTime,
    last_refresh: Instant,
    interval: Duration,
}

impl Default for NowClock {
    fn default() -> Self {
        Self::new(Local::now().naive_local(), Instant::now(), NOW_REFRESH_INTERVAL)
    }
}

impl NowClock {
    pub fn new(now: NaiveDateTime, at: Instant, interval: Duration) -> Self {
        Self {
            now,
            last_refresh: at,
            interval,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Re-read the clock if the interval has passed. Returns true on refresh.
    pub fn poll(&mut self, at: Instant, read_clock: impl FnOnce() -> NaiveDateTime) -> bool {
        if at.saturating_duration_since(self.last_refresh) < self.interval {
            return false;
        }

        self.now = read_clock();
        self.last_refresh = at;
        log::trace!("Now indicator refreshed to {}", self.now);
        true
    }

    /// Poll against the local wall clock.
    pub fn poll_local(&mut self) -> bool {
        self.poll(Instant::now(), || Local::now().naive_local())
    }

    /// Time left until the next refresh is due.
    pub fn time_until_refresh(&self, at: Instant) -> Duration {
        self.interval
            .saturating_sub(at.saturating_duration_since(self.last_refresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_no_refresh_before_interval() {
        let start = Instant::now();
        let mut clock = NowClock::new(at(9, 0), start, NOW_REFRESH_INTERVAL);

        assert!(!clock.poll(start + Duration::from_secs(119), || at(9, 1)));
        assert_eq!(clock.now(), at(9, 0));
    }

    #[test]
    fn test_refresh_after_interval() {
        let start = Instant::now();
        let mut clock = NowClock::new(at(9, 0), start, NOW_REFRESH_INTERVAL);

        assert!(clock.poll(start + NOW_REFRESH_INTERVAL, || at(9, 2)));
        assert_eq!(clock.now(), at(9, 2));
        // the interval restarts from the refresh
        assert!(!clock.poll(start + Duration::from_secs(150), || at(9, 3)));
    }

    #[test]
    fn test_time_until_refresh() {
        let start = Instant::now();
        let clock = NowClock::new(at(9, 0), start, NOW_REFRESH_INTERVAL);

        assert_eq!(
            clock.time_until_refresh(start + Duration::from_secs(20)),
            Duration::from_secs(100)
        );
        assert_eq!(
            clock.time_until_refresh(start + Duration::from_secs(500)),
            Duration::ZERO
        );
    }
}
