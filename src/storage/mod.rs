//! Settings persistence.
//!
//! Persists settings to a JSON file in the platform config directory.

mod config;

pub use config::*;
