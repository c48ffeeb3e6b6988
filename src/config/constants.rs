//! Design constants for the release ritual
//!
//! Interaction timings come from the behavior contract (double-press
//! window, burn timeline); the rest are tunable presentation values.

use std::time::Duration;

use crate::domain::drag::DragThresholds;

/// Two commit-key presses within this window trigger a release
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(500);

/// Total length of the burn sequence
pub const BURN_DURATION: Duration = Duration::from_millis(2500);

/// Smoke wisps appear this long after the burn starts
pub const SMOKE_DELAY: Duration = Duration::from_millis(300);

/// The "write again" affordance appears this long after entering
/// the released view
pub const WRITE_AGAIN_DELAY: Duration = Duration::from_millis(5000);

/// Haptic pulse pattern in milliseconds: on, off, on
pub const HAPTIC_PATTERN_MS: [u64; 3] = [50, 30, 100];

/// Event loop tick, also the render cadence
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Drag thresholds scaled to character cells
///
/// The domain defaults are pixel-sized; a terminal cell is roughly a
/// pixel-order of magnitude taller, so the flame margin becomes two rows
/// and the minimum drag four rows.
pub fn cell_drag_thresholds() -> DragThresholds {
    DragThresholds {
        proximity_margin: 2.0,
        min_drag_distance: 4.0,
    }
}

/// Writing prompts offered while the card is empty; the first three
/// are shown, selectable with F1-F3
pub const PROMPTS: [&str; 5] = [
    "What's weighing on you?",
    "What do you want to forgive?",
    "What fear can you release?",
    "What regret haunts you?",
    "What anger can you let go?",
];

/// Number of prompts surfaced in the composing view
pub const VISIBLE_PROMPTS: usize = 3;

/// Quotes shown in the released view, one chosen at random per release
pub const QUOTES: [&str; 8] = [
    "Every ending is a new beginning.",
    "You don't have to carry everything.",
    "Peace comes from letting go.",
    "What you release makes room for what's next.",
    "The past has no power over you.",
    "Breathe. Release. Begin again.",
    "Lightness follows surrender.",
    "You are not your thoughts.",
];
