//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! editing limits, the geometry compensation coefficients and loop timings.

// === Visual Defaults ===

/// Default inner circle diameter in pixels.
pub const DEFAULT_INNER_SIZE: f64 = 650.0;

/// Default outer circle diameter in pixels.
pub const DEFAULT_OUTER_SIZE: f64 = 1000.0;

/// Default inner circle color.
pub const DEFAULT_INNER_COLOR: &str = "#d0723b";

/// Default outer circle color.
pub const DEFAULT_OUTER_COLOR: &str = "#e74b4b";

/// Alpha applied to both circle border colors.
pub const CIRCLE_OPACITY: f64 = 0.6;

/// Inner circle border width in pixels (render hint for surfaces).
pub const BORDER_WIDTH_INNER: f64 = 16.0;

/// Outer circle border width in pixels (render hint for surfaces).
pub const BORDER_WIDTH_OUTER: f64 = 60.0;

// === Editing Limits ===

/// Minimum diameter accepted by the editing helpers.
pub const MIN_SIZE: f64 = 1.0;

/// Maximum inner diameter accepted from user input.
pub const MAX_INNER_SIZE: f64 = 1000.0;

/// Maximum outer diameter accepted from user input.
pub const MAX_OUTER_SIZE: f64 = 1200.0;

/// Gap kept between inner and outer diameters when one pushes the other.
pub const SIZE_DIFFERENCE: f64 = 200.0;

// === Geometry Compensation ===
//
// Empirical tuning constants. Keep them exactly as they are.

/// Outer circle reference diameter; compensation is constant at or above it.
pub const OUTER_REFERENCE_SIZE: f64 = 600.0;

/// Inner circle reference diameter; compensation is constant at or above it.
pub const INNER_REFERENCE_SIZE: f64 = 400.0;

/// Outer circle drift coefficient.
pub const OUTER_DRIFT: f64 = 5.0;

/// Inner circle drift coefficient.
pub const INNER_DRIFT: f64 = 3.0;

/// Vertical lift applied to both circles.
pub const VERTICAL_LIFT: f64 = 30.0;

// === Loop Timings ===

/// Default frame rate of the polling loop.
pub const DEFAULT_FPS: u32 = 60;

/// How often the display list is re-read to detect topology changes.
pub const TOPOLOGY_CHECK_INTERVAL_MS: u64 = 500;

/// How often dirty settings are flushed to disk.
pub const PERSIST_INTERVAL_MS: u64 = 1000;

// === Persistence ===

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "EnoCursor";

/// Settings file name.
pub const CONFIG_FILE_NAME: &str = "eno-cursor-settings.json";
