//! Global ↔ display-local coordinate translation.

use crate::model::{DisplayDescriptor, Point};

/// Translate a global point into `display`'s local space.
pub fn to_local(global: Point, display: &DisplayDescriptor) -> Point {
    Point::new(global.x - display.bounds.x, global.y - display.bounds.y)
}

/// Inverse of [`to_local`].
pub fn to_global(local: Point, display: &DisplayDescriptor) -> Point {
    Point::new(local.x + display.bounds.x, local.y + display.bounds.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bounds;

    #[test]
    fn test_second_display_local_point() {
        let d = DisplayDescriptor::new(1, Bounds::new(1920.0, 0.0, 1920.0, 1080.0));
        assert_eq!(to_local(Point::new(2000.0, 50.0), &d), Point::new(80.0, 50.0));
    }

    #[test]
    fn test_round_trip_recovers_the_global_point() {
        let displays = [
            DisplayDescriptor::new(0, Bounds::new(0.0, 0.0, 1920.0, 1080.0)),
            DisplayDescriptor::new(1, Bounds::new(-1280.0, 200.0, 1280.0, 1024.0)),
            DisplayDescriptor::new(2, Bounds::new(1920.0, -1440.0, 2560.0, 1440.0)),
        ];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(-640.0, 300.5),
            Point::new(5000.0, -3000.0),
        ];
        for d in &displays {
            for p in points {
                assert_eq!(to_global(to_local(p, d), d), p);
            }
        }
    }
}
