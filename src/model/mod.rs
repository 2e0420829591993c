//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including circle configuration, display topology types and constants.
//!
//! Persistence of these values lives in `storage`.

pub mod circle_spec;
pub mod constants;
pub mod display;

pub use circle_spec::CircleSpec;
pub use constants::*;
pub use display::{descriptors_from_bounds, Bounds, CursorSample, DisplayDescriptor, Point};
