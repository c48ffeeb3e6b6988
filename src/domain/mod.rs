//! Domain logic and core data structures
//!
//! This module contains pure business logic that is independent
//! of terminal APIs and platform-specific implementations.

pub mod breathing;
pub mod core;
pub mod drag;
