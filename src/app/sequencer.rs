//! Burn sequence timing
//!
//! The burn is one non-interruptible, fixed-length sequence with two
//! one-shot events layered on top: smoke starts 300ms in, and the
//! completion signal fires exactly once at 2.5s. The sequencer is
//! polled with explicit instants so the timing logic is testable
//! without sleeping.

use std::time::Instant;

use crate::config::{BURN_DURATION, SMOKE_DELAY};

/// One-shot events emitted while the burn runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnEvent {
    /// Smoke wisps begin rising from the card
    SmokeStarted,
    /// The sequence finished; the session may move to Released
    Completed,
}

/// Fixed-duration burn timeline
#[derive(Debug)]
pub struct BurnSequencer {
    started_at: Instant,
    smoke_fired: bool,
    completed_fired: bool,
}

impl BurnSequencer {
    /// Starts the sequence at `now`
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            smoke_fired: false,
            completed_fired: false,
        }
    }

    /// Collects the one-shot events due at `now`
    ///
    /// Each event fires at most once per sequence, in timeline order,
    /// no matter how irregularly the sequencer is polled.
    pub fn poll(&mut self, now: Instant) -> Vec<BurnEvent> {
        let elapsed = now.duration_since(self.started_at);
        let mut events = Vec::new();
        if !self.smoke_fired && elapsed >= SMOKE_DELAY {
            self.smoke_fired = true;
            events.push(BurnEvent::SmokeStarted);
        }
        if !self.completed_fired && elapsed >= BURN_DURATION {
            self.completed_fired = true;
            events.push(BurnEvent::Completed);
        }
        events
    }

    /// Normalized progress through the sequence, clamped to 0.0..=1.0
    ///
    /// Drives the card's charring in the burning view.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        (elapsed / BURN_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether smoke should be visible at `now`
    pub fn smoke_visible(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= SMOKE_DELAY
    }

    /// Whether the completion signal has already fired
    pub fn is_complete(&self) -> bool {
        self.completed_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn nothing_fires_before_the_smoke_delay() {
        let start = Instant::now();
        let mut seq = BurnSequencer::new(start);
        assert!(seq.poll(start).is_empty());
        assert!(seq.poll(at(start, 299)).is_empty());
    }

    #[test]
    fn smoke_starts_at_300ms_exactly_once() {
        let start = Instant::now();
        let mut seq = BurnSequencer::new(start);
        assert_eq!(seq.poll(at(start, 300)), vec![BurnEvent::SmokeStarted]);
        assert!(seq.poll(at(start, 400)).is_empty());
        assert!(seq.smoke_visible(at(start, 400)));
    }

    #[test]
    fn completion_fires_at_2500ms_never_before() {
        let start = Instant::now();
        let mut seq = BurnSequencer::new(start);
        seq.poll(at(start, 300));
        assert!(seq.poll(at(start, 2499)).is_empty());
        assert_eq!(seq.poll(at(start, 2500)), vec![BurnEvent::Completed]);
        assert!(seq.is_complete());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let start = Instant::now();
        let mut seq = BurnSequencer::new(start);
        seq.poll(at(start, 300));
        assert_eq!(seq.poll(at(start, 2500)), vec![BurnEvent::Completed]);
        assert!(seq.poll(at(start, 3000)).is_empty());
        assert!(seq.poll(at(start, 60_000)).is_empty());
    }

    #[test]
    fn sparse_polling_delivers_both_events_in_order() {
        let start = Instant::now();
        let mut seq = BurnSequencer::new(start);
        // First poll long after everything was due
        assert_eq!(
            seq.poll(at(start, 5000)),
            vec![BurnEvent::SmokeStarted, BurnEvent::Completed]
        );
        assert!(seq.poll(at(start, 6000)).is_empty());
    }

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let start = Instant::now();
        let seq = BurnSequencer::new(start);
        assert_eq!(seq.progress(start), 0.0);
        let half = seq.progress(at(start, 1250));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(seq.progress(at(start, 2500)), 1.0);
        assert_eq!(seq.progress(at(start, 9000)), 1.0);
    }
}
