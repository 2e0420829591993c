//! Overlay surfaces: per-display controllers, the render primitive they
//! write into, and the set that fans settings out to all of them.

pub mod controller;
pub mod fanout;
pub mod surface;

pub use controller::{OverlayController, OverlaySurfaceState, SurfacePhase};
pub use fanout::SurfaceSet;
pub use surface::{CircleElement, RenderSurface, SurfaceFactory, SurfaceId};
