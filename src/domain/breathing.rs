//! Breathing exercise guidance shown after a release
//!
//! Four phases of equal length, looping: breathe in, hold, breathe out,
//! rest. Pure deadline arithmetic against the instant the released view
//! was entered, so nothing here ever blocks or sleeps.

use std::time::{Duration, Instant};

/// Length of each breathing phase
pub const PHASE_DURATION: Duration = Duration::from_millis(2000);

/// One step of the breathing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    BreatheIn,
    Hold,
    BreatheOut,
    Rest,
}

impl BreathPhase {
    /// Instruction text shown inside the breathing circle
    pub fn instruction(&self) -> &'static str {
        match self {
            BreathPhase::BreatheIn => "Breathe in",
            BreathPhase::Hold => "Hold",
            BreathPhase::BreatheOut => "Breathe out",
            BreathPhase::Rest => "Rest",
        }
    }

    fn from_index(index: u64) -> Self {
        match index % 4 {
            0 => BreathPhase::BreatheIn,
            1 => BreathPhase::Hold,
            2 => BreathPhase::BreatheOut,
            _ => BreathPhase::Rest,
        }
    }
}

/// Looping breathing cycle anchored to the instant it started
#[derive(Debug, Clone, Copy)]
pub struct BreathingCycle {
    started_at: Instant,
}

impl BreathingCycle {
    pub fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// The phase active at `now`
    pub fn phase_at(&self, now: Instant) -> BreathPhase {
        let elapsed = now.duration_since(self.started_at);
        BreathPhase::from_index(elapsed.as_millis() as u64 / PHASE_DURATION.as_millis() as u64)
    }

    /// Progress through the current phase, 0.0..1.0
    ///
    /// Drives the breathing circle's size in the released view.
    pub fn phase_progress(&self, now: Instant) -> f32 {
        let phase_ms = PHASE_DURATION.as_millis() as u64;
        let within = now.duration_since(self.started_at).as_millis() as u64 % phase_ms;
        within as f32 / phase_ms as f32
    }
}
