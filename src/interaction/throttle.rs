use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

/// Coalesces high-frequency updates to at most one per `interval`.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    last_applied: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_applied: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` and records `now` if an update may be applied.
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = self.interval.is_zero()
            || self
                .last_applied
                .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last_applied = Some(now);
        }
        due
    }

    /// Records an update applied regardless of the window.
    pub fn force(&mut self, now: Instant) {
        self.last_applied = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_update_applies() {
        let mut t = Throttle::new(ms(16));
        assert!(t.ready(Instant::now()));
    }

    #[test]
    fn updates_inside_window_are_skipped() {
        let t0 = Instant::now();
        let mut t = Throttle::new(ms(16));
        assert!(t.ready(t0));
        assert!(!t.ready(t0 + ms(5)));
        assert!(!t.ready(t0 + ms(15)));
        assert!(t.ready(t0 + ms(16)));
        assert!(!t.ready(t0 + ms(20)));
    }

    #[test]
    fn force_restarts_window() {
        let t0 = Instant::now();
        let mut t = Throttle::new(ms(16));
        t.force(t0 + ms(10));
        assert!(!t.ready(t0 + ms(20)));
        assert!(t.ready(t0 + ms(26)));
    }

    #[test]
    fn zero_interval_always_applies() {
        let t0 = Instant::now();
        let mut t = Throttle::new(Duration::ZERO);
        for _ in 0..5 {
            assert!(t.ready(t0));
        }
    }
}
