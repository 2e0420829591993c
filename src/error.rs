//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a host query (cursor position, display list).
///
/// The polling loop never propagates these; a failed query skips one frame.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("cursor position unavailable: {0}")]
    Cursor(String),

    #[error("display query failed: {0}")]
    Displays(String),

    #[error("no host backend for this platform")]
    Unsupported,
}

/// Failure loading or saving the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this system")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A headless command line that could not be turned into an event.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("not a #rrggbb color: {0}")]
    InvalidColor(String),
}
