//! Double-press detection for the commit key
//!
//! Two Enter presses within 500ms trigger a release. Unlike the usual
//! "remember the first press forever" approach, the stored instant is
//! cleared whenever a press commits, so a stale first press can never
//! make a later unrelated keypress release immediately.

use std::time::Instant;

use crate::config::DOUBLE_PRESS_WINDOW;

/// Tracks the pending first press of a commit-key double press
#[derive(Debug, Default)]
pub struct CommitPressTracker {
    last_press: Option<Instant>,
}

impl CommitPressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a commit-key press at `now`
    ///
    /// # Returns
    /// true if this press completes a double press (the window resets);
    /// false if it becomes the new pending first press.
    pub fn press(&mut self, now: Instant) -> bool {
        match self.last_press {
            Some(prev) if now.duration_since(prev) < DOUBLE_PRESS_WINDOW => {
                self.last_press = None;
                true
            }
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }

    /// Clears any pending first press
    ///
    /// Called when the composing context changes underneath the window,
    /// e.g. the text became blank.
    pub fn reset(&mut self) {
        self.last_press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn single_press_does_not_commit() {
        let mut tracker = CommitPressTracker::new();
        assert!(!tracker.press(Instant::now()));
    }

    #[test]
    fn two_presses_within_window_commit() {
        let mut tracker = CommitPressTracker::new();
        let first = Instant::now();
        assert!(!tracker.press(first));
        assert!(tracker.press(first + Duration::from_millis(499)));
    }

    #[test]
    fn slow_second_press_never_commits() {
        let mut tracker = CommitPressTracker::new();
        let first = Instant::now();
        assert!(!tracker.press(first));
        // Exactly at the window boundary is too slow
        assert!(!tracker.press(first + Duration::from_millis(500)));
        assert!(!tracker.press(first + Duration::from_millis(1500)));
    }

    #[test]
    fn slow_press_becomes_a_fresh_first_press() {
        let mut tracker = CommitPressTracker::new();
        let first = Instant::now();
        tracker.press(first);
        let second = first + Duration::from_millis(800);
        assert!(!tracker.press(second));
        // The second press armed a new window
        assert!(tracker.press(second + Duration::from_millis(100)));
    }

    #[test]
    fn committing_press_resets_the_window() {
        let mut tracker = CommitPressTracker::new();
        let t0 = Instant::now();
        tracker.press(t0);
        assert!(tracker.press(t0 + Duration::from_millis(100)));
        // The press right after a commit starts over; it must not
        // commit off the stale timestamp
        assert!(!tracker.press(t0 + Duration::from_millis(200)));
        assert!(tracker.press(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn reset_discards_the_pending_press() {
        let mut tracker = CommitPressTracker::new();
        let t0 = Instant::now();
        tracker.press(t0);
        tracker.reset();
        assert!(!tracker.press(t0 + Duration::from_millis(100)));
    }
}
