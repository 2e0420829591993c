//! Input handling.
//!
//! The overlay has no windows of its own to take input, so it is driven by
//! text commands read from stdin.

pub mod commands;

pub use commands::parse_command;
