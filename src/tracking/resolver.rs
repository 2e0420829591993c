//! Display ownership: which display contains a global point.

use crate::model::{DisplayDescriptor, Point};

/// Return the first display whose bounds contain `point`.
///
/// `None` means ownership cannot be determined (the point is outside every
/// known display, e.g. during a topology change). Overlapping bounds are
/// resolved in list order.
pub fn resolve(point: Point, displays: &[DisplayDescriptor]) -> Option<&DisplayDescriptor> {
    displays.iter().find(|d| d.bounds.contains(point))
}
