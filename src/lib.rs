//! Cursor highlight overlay: two concentric circles that follow the mouse
//! across every display.
//!
//! Everything outside `platform` is free of OS FFI, so the core runs as
//! normal integration tests against a scripted host and a recording surface.

pub mod app;
pub mod color;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod input;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod storage;
pub mod tracking;

// Re-export the types most callers need
pub use app::{AppState, RuntimeOptions};
pub use error::{CommandError, ConfigError, HostError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Bounds, CircleSpec, CursorSample, DisplayDescriptor, Point};
