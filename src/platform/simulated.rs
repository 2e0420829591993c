//! Scripted host that runs on any platform.
//!
//! Displays are a fixed list; the cursor sweeps back and forth across the
//! combined desktop at mid height, one step per query. Used by `--simulate`
//! and on platforms without a native backend.

use std::cell::Cell;

use crate::error::HostError;
use crate::model::{descriptors_from_bounds, Bounds, DisplayDescriptor, Point};
use crate::platform::{CursorSource, DisplaySource};

/// Pixels the simulated cursor moves per query.
const DEFAULT_STEP: f64 = 12.0;

#[derive(Debug)]
pub struct SimulatedHost {
    displays: Vec<DisplayDescriptor>,
    step: f64,
    tick: Cell<u64>,
}

impl SimulatedHost {
    /// Two 1920x1080 displays side by side.
    pub fn dual_hd() -> Self {
        Self::with_displays([
            Bounds::new(0.0, 0.0, 1920.0, 1080.0),
            Bounds::new(1920.0, 0.0, 1920.0, 1080.0),
        ])
    }

    pub fn with_displays(bounds: impl IntoIterator<Item = Bounds>) -> Self {
        Self {
            displays: descriptors_from_bounds(bounds),
            step: DEFAULT_STEP,
            tick: Cell::new(0),
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Horizontal extent and vertical middle of the combined desktop.
    fn span(&self) -> Option<(f64, f64, f64)> {
        let first = self.displays.first()?;
        let mut left = first.bounds.x;
        let mut right = first.bounds.x + first.bounds.width;
        let mut top = first.bounds.y;
        let mut bottom = first.bounds.y + first.bounds.height;
        for d in &self.displays[1..] {
            left = left.min(d.bounds.x);
            right = right.max(d.bounds.x + d.bounds.width);
            top = top.min(d.bounds.y);
            bottom = bottom.max(d.bounds.y + d.bounds.height);
        }
        Some((left, right, (top + bottom) / 2.0))
    }
}

impl CursorSource for SimulatedHost {
    fn cursor_position(&self) -> Result<Point, HostError> {
        let (left, right, mid_y) = self
            .span()
            .ok_or_else(|| HostError::Cursor("no simulated displays".into()))?;
        let width = (right - left - 1.0).max(1.0);

        let t = self.tick.get();
        self.tick.set(t.wrapping_add(1));

        // Triangle wave over [0, width]
        let travelled = (t as f64 * self.step) % (2.0 * width);
        let x = if travelled <= width {
            travelled
        } else {
            2.0 * width - travelled
        };
        Ok(Point::new(left + x, mid_y))
    }
}

impl DisplaySource for SimulatedHost {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>, HostError> {
        Ok(self.displays.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_starts_at_left_edge() {
        let host = SimulatedHost::dual_hd();
        assert_eq!(host.cursor_position().unwrap(), Point::new(0.0, 540.0));
        assert_eq!(host.cursor_position().unwrap(), Point::new(12.0, 540.0));
    }

    #[test]
    fn test_sweep_stays_inside_the_desktop() {
        let host = SimulatedHost::dual_hd().with_step(500.0);
        for _ in 0..100 {
            let p = host.cursor_position().unwrap();
            assert!(p.x >= 0.0 && p.x < 3840.0, "x = {}", p.x);
        }
    }

    #[test]
    fn test_no_displays_is_a_cursor_error() {
        let host = SimulatedHost::with_displays([]);
        assert!(host.cursor_position().is_err());
        assert!(host.displays().unwrap().is_empty());
    }

    #[test]
    fn test_display_bounds_by_index() {
        let host = SimulatedHost::dual_hd();
        assert_eq!(host.display_bounds(1).unwrap().unwrap().x, 1920.0);
        assert!(host.display_bounds(2).unwrap().is_none());
    }
}
