//! Device capability seams
//!
//! Haptics and audio are best-effort enhancements injected into the
//! controller as narrow traits, so the core logic tests run without a
//! real device and a missing capability never blocks a release.

use std::io::Write;

/// Vibration capability
///
/// Implementations must swallow their own failures; a failed pulse is
/// never an error to the caller.
pub trait HapticFeedback {
    /// Plays a pulse pattern of alternating on/off durations in
    /// milliseconds, starting with "on"
    fn pulse(&mut self, pattern_ms: &[u64]);
}

/// Fire-crackle playback capability
///
/// Same contract as haptics: best-effort, failures swallowed.
pub trait AudioPlayer {
    fn play_crackle(&mut self);
}

/// Haptics for devices without a vibration motor
///
/// Terminals have none; the absence of the capability is not an error.
#[derive(Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&mut self, pattern_ms: &[u64]) {
        tracing::trace!(?pattern_ms, "haptic pulse unavailable");
    }
}

/// Terminal bell standing in for the crackle clip
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioPlayer for TerminalBell {
    fn play_crackle(&mut self) {
        let mut stdout = std::io::stdout();
        // BEL; whether the terminal honors it is out of our hands
        if stdout.write_all(b"\x07").and_then(|_| stdout.flush()).is_err() {
            tracing::trace!("terminal bell write failed");
        }
    }
}
