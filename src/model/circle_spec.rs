//! Circle configuration (pure Rust, no FFI).
//!
//! `CircleSpec` is the single authoritative size/color configuration. It is
//! owned by the application state and handed by value to every overlay
//! controller through the settings fan-out.

use super::constants::*;

/// Sizes and colors of the two highlight circles.
///
/// `outer_diameter > inner_diameter` is expected but not enforced here; the
/// renderer draws whatever it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
    /// Inner circle diameter in pixels.
    pub inner_diameter: f64,
    /// Outer circle diameter in pixels.
    pub outer_diameter: f64,
    /// Inner circle color, `#RRGGBB`.
    pub inner_color: String,
    /// Outer circle color, `#RRGGBB`.
    pub outer_color: String,
}

impl Default for CircleSpec {
    fn default() -> Self {
        Self {
            inner_diameter: DEFAULT_INNER_SIZE,
            outer_diameter: DEFAULT_OUTER_SIZE,
            inner_color: DEFAULT_INNER_COLOR.to_string(),
            outer_color: DEFAULT_OUTER_COLOR.to_string(),
        }
    }
}

impl CircleSpec {
    /// Sets the inner diameter, pushing the outer circle out if it would no
    /// longer be larger.
    pub fn with_inner_size(mut self, size: f64) -> Self {
        self.inner_diameter = size.max(MIN_SIZE);
        if self.outer_diameter <= self.inner_diameter {
            self.outer_diameter = self.inner_diameter + SIZE_DIFFERENCE;
        }
        self
    }

    /// Sets the outer diameter, pulling the inner circle in if it would no
    /// longer be smaller.
    ///
    /// The pulled-in inner size goes through [`CircleSpec::with_inner_size`],
    /// so an outer circle at the minimum size is pushed back out.
    pub fn with_outer_size(mut self, size: f64) -> Self {
        self.outer_diameter = size.max(MIN_SIZE);
        if self.inner_diameter >= self.outer_diameter {
            let inner = self.outer_diameter - SIZE_DIFFERENCE;
            return self.with_inner_size(inner);
        }
        self
    }

    pub fn with_inner_color(mut self, color: impl Into<String>) -> Self {
        self.inner_color = color.into();
        self
    }

    pub fn with_outer_color(mut self, color: impl Into<String>) -> Self {
        self.outer_color = color.into();
        self
    }

    /// True when the outer circle is strictly larger than the inner one.
    pub fn is_well_ordered(&self) -> bool {
        self.outer_diameter > self.inner_diameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growing_inner_pushes_outer() {
        let spec = CircleSpec::default().with_inner_size(1100.0);
        assert_eq!(spec.inner_diameter, 1100.0);
        assert_eq!(spec.outer_diameter, 1300.0);
    }

    #[test]
    fn test_shrinking_outer_pulls_inner() {
        let spec = CircleSpec::default().with_outer_size(500.0);
        assert_eq!(spec.outer_diameter, 500.0);
        assert_eq!(spec.inner_diameter, 300.0);
    }

    #[test]
    fn test_minimum_outer_pushes_back_out() {
        let spec = CircleSpec::default().with_outer_size(-5.0);
        assert_eq!(spec.inner_diameter, MIN_SIZE);
        assert_eq!(spec.outer_diameter, MIN_SIZE + SIZE_DIFFERENCE);
        assert!(spec.is_well_ordered());

        let spec = CircleSpec::default().with_outer_size(1.0);
        assert_eq!(spec.inner_diameter, 1.0);
        assert_eq!(spec.outer_diameter, 201.0);
    }

    #[test]
    fn test_small_outer_above_minimum_is_kept() {
        let spec = CircleSpec::default().with_outer_size(150.0);
        assert_eq!(spec.inner_diameter, MIN_SIZE);
        assert_eq!(spec.outer_diameter, 150.0);
    }

    #[test]
    fn test_unrelated_edit_leaves_other_circle_alone() {
        let spec = CircleSpec::default().with_inner_size(100.0);
        assert_eq!(spec.outer_diameter, DEFAULT_OUTER_SIZE);
    }
}
