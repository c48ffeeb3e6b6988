//! Application orchestration layer
//!
//! This module coordinates between input, domain, store, and UI layers.
//! It manages the session state machine and the burn timeline.

pub mod controller;
pub mod sequencer;
pub mod state;
