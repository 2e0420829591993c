//! Host queries and render surfaces.
//!
//! The core consumes the host through two small traits: where the cursor is,
//! and which displays exist. Each platform has its own submodule:
//! - `macos`: CoreGraphics
//! - `windows`: Win32
//! - `simulated`: a scripted host that runs anywhere
//!
//! `tracing_surface` provides a headless render surface that records and
//! logs the geometry writes.

use crate::error::HostError;
use crate::model::{Bounds, DisplayDescriptor, Point};

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

pub mod simulated;
pub mod tracing_surface;

pub use simulated::SimulatedHost;
pub use tracing_surface::{SurfaceSnapshot, TracingSurface, TracingSurfaceFactory};

/// Global cursor position in desktop pixel space.
pub trait CursorSource {
    fn cursor_position(&self) -> Result<Point, HostError>;
}

/// Current display topology.
pub trait DisplaySource {
    /// All displays, indexed in host order.
    fn displays(&self) -> Result<Vec<DisplayDescriptor>, HostError>;

    /// Bounds of the display at `index`, `None` if there is no such display.
    fn display_bounds(&self, index: usize) -> Result<Option<Bounds>, HostError> {
        Ok(self
            .displays()?
            .into_iter()
            .find(|d| d.index == index)
            .map(|d| d.bounds))
    }
}

/// Both host queries.
pub trait Host: CursorSource + DisplaySource {}

impl<T: CursorSource + DisplaySource> Host for T {}

/// The native host for this platform.
#[cfg(target_os = "macos")]
pub fn native_host() -> Result<Box<dyn Host>, HostError> {
    Ok(Box::new(macos::CoreGraphicsHost::new()))
}

/// The native host for this platform.
#[cfg(target_os = "windows")]
pub fn native_host() -> Result<Box<dyn Host>, HostError> {
    Ok(Box::new(windows::Win32Host::new()))
}

/// The native host for this platform.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn native_host() -> Result<Box<dyn Host>, HostError> {
    Err(HostError::Unsupported)
}

impl<H: CursorSource + ?Sized> CursorSource for Box<H> {
    fn cursor_position(&self) -> Result<Point, HostError> {
        (**self).cursor_position()
    }
}

impl<H: DisplaySource + ?Sized> DisplaySource for Box<H> {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>, HostError> {
        (**self).displays()
    }

    fn display_bounds(&self, index: usize) -> Result<Option<Bounds>, HostError> {
        (**self).display_bounds(index)
    }
}
