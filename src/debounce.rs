//! Debounce controller
//!
//! Owns its own deadline instead of handing a timer handle to the caller.
//! The caller drives it from its tick loop with [`Debouncer::poll`].

use std::time::{Duration, Instant};

/// Two-state debouncer: idle, or armed with a value and a deadline.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    fire_at: Instant,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm with `value`, superseding anything already pending.
    pub fn trigger(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            tracing::trace!("debounce re-armed, previous value superseded");
        }
        self.pending = Some(Pending {
            fire_at: now + self.delay,
            value,
        });
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Return the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.fire_at => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Time left until the pending value fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.fire_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger("a", t0);

        assert_eq!(debouncer.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(t0 + DELAY), Some("a"));
        assert!(!debouncer.is_armed());
        assert_eq!(debouncer.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn burst_only_fires_latest_value() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger("a", t0);
        debouncer.trigger("ab", t0 + Duration::from_millis(200));

        // The first deadline has passed but it was superseded.
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(600)), None);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(700)), Some("ab"));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger(1, t0);
        debouncer.cancel();
        assert!(!debouncer.is_armed());
        assert_eq!(debouncer.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn remaining_counts_down() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.remaining(t0), None);
        debouncer.trigger((), t0);
        assert_eq!(
            debouncer.remaining(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(400))
        );
        assert_eq!(debouncer.remaining(t0 + DELAY * 2), Some(Duration::ZERO));
    }
}
