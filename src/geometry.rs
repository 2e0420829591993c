//! Circle geometry: maps a local cursor point and a `CircleSpec` to the two
//! pixel rectangles the overlay surface draws.
//!
//! Each circle is shifted by a size-dependent offset so that the rendered
//! ring stays optically centered on the pointer across the whole size range.
//! The rectangle center is therefore `(x + offset_x, y + offset_y)`, not the
//! cursor itself.

use crate::model::constants::*;
use crate::model::{CircleSpec, Point};

/// Axis-aligned rectangle in surface-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rectangles for both circles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircleRects {
    pub inner: Rect,
    pub outer: Rect,
}

/// Compensation offset for one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// `min(size / reference, 1)`.
fn ratio(size: f64, reference: f64) -> f64 {
    (size / reference).min(1.0)
}

fn offset(size: f64, reference: f64, drift: f64) -> Offset {
    let slack = drift * (1.0 - ratio(size, reference));
    Offset {
        x: slack,
        y: -(VERTICAL_LIFT - slack),
    }
}

/// Offset applied to the outer circle of the given diameter.
pub fn outer_offset(diameter: f64) -> Offset {
    offset(diameter, OUTER_REFERENCE_SIZE, OUTER_DRIFT)
}

/// Offset applied to the inner circle of the given diameter.
pub fn inner_offset(diameter: f64) -> Offset {
    offset(diameter, INNER_REFERENCE_SIZE, INNER_DRIFT)
}

fn circle_rect(at: Point, diameter: f64, off: Offset) -> Rect {
    Rect {
        left: at.x - diameter / 2.0 + off.x,
        top: at.y - diameter / 2.0 + off.y,
        width: diameter,
        height: diameter,
    }
}

/// Compute both circle rectangles for a surface-local cursor point.
///
/// Never fails. Non-positive diameters produce degenerate rectangles.
pub fn compute_rects(local: Point, spec: &CircleSpec) -> CircleRects {
    CircleRects {
        inner: circle_rect(
            local,
            spec.inner_diameter,
            inner_offset(spec.inner_diameter),
        ),
        outer: circle_rect(
            local,
            spec.outer_diameter,
            outer_offset(spec.outer_diameter),
        ),
    }
}
