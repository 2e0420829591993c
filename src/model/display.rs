//! Display topology and cursor sample types (pure Rust, no FFI).

/// A point in pixel space. Whether it is global or local depends on context.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display bounds in global pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edge pixels belong to the
    /// neighbouring display.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One physical display as seen during a single reconciliation pass.
///
/// `index` is only stable until the next topology change; consumers must
/// re-fetch descriptors after every rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDescriptor {
    pub index: usize,
    pub bounds: Bounds,
}

impl DisplayDescriptor {
    pub const fn new(index: usize, bounds: Bounds) -> Self {
        Self { index, bounds }
    }
}

/// Builds descriptors from a list of bounds, assigning indices in order.
pub fn descriptors_from_bounds(bounds: impl IntoIterator<Item = Bounds>) -> Vec<DisplayDescriptor> {
    bounds
        .into_iter()
        .enumerate()
        .map(|(index, bounds)| DisplayDescriptor::new(index, bounds))
        .collect()
}

/// A point-in-time cursor reading. Not retained once consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSample {
    pub global: Point,
    /// Index of the display containing the cursor, `None` when ownership
    /// could not be determined this tick.
    pub owner: Option<usize>,
}
