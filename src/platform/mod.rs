//! Platform-specific implementations
//!
//! This module encapsulates the terminal and device-facing surfaces and
//! provides a clean interface to the rest of the application.

pub mod capabilities;
pub mod terminal;

pub use capabilities::{AudioPlayer, HapticFeedback, NoHaptics, TerminalBell};
pub use terminal::{TerminalError, TerminalGuard};
