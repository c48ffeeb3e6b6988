//! Configuration module for letgo
//!
//! Concentrates the design constants shared between the controller and
//! the presentation layer: interaction timings, drag thresholds, and the
//! prompt/quote copy.

pub mod constants;

pub use constants::*;
