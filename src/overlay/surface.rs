//! Render primitives the overlay controllers write into.
//!
//! Window creation belongs to the host; the core only needs a handle that can
//! place, show/hide and recolor the two circle elements of one display.

use crate::color::RgbaColor;
use crate::geometry::Rect;
use crate::model::{DisplayDescriptor, BORDER_WIDTH_INNER, BORDER_WIDTH_OUTER};

/// One of the two circle elements on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleElement {
    Inner,
    Outer,
}

impl CircleElement {
    pub const ALL: [CircleElement; 2] = [CircleElement::Inner, CircleElement::Outer];

    /// Stroke width of the ring, in pixels.
    pub fn border_width(self) -> f64 {
        match self {
            CircleElement::Inner => BORDER_WIDTH_INNER,
            CircleElement::Outer => BORDER_WIDTH_OUTER,
        }
    }
}

/// Identifies a surface within one generation of the surface set.
///
/// A new generation starts on every topology rebuild, so an id held across a
/// rebuild never matches a live surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId {
    pub generation: u64,
    pub index: usize,
}

/// A full-screen, input-transparent render target bound to one display.
pub trait RenderSurface {
    fn set_rect(&mut self, element: CircleElement, rect: Rect);
    fn set_visible(&mut self, element: CircleElement, visible: bool);
    fn set_border_color(&mut self, element: CircleElement, color: &RgbaColor);
}

/// Creates render surfaces for displays.
///
/// Surfaces may not be able to accept writes right away; the host signals
/// readiness later with `AppEvent::SurfaceReady(id)`.
pub trait SurfaceFactory {
    type Surface: RenderSurface;

    fn create(&mut self, id: SurfaceId, display: &DisplayDescriptor) -> Self::Surface;
}
