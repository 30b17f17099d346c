// File: crates/temp-core/src/geometry.rs
// Summary: Plot rectangle and pixel math helpers.

use crate::types::Insets;

/// Inner plot area of a chart. Coordinates handed to scales and the hover
/// controller are plot-local: (0, 0) is the top-left corner of this area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub outer_width: f64,
    pub outer_height: f64,
    pub insets: Insets,
}

impl PlotRect {
    pub fn new(outer_width: u32, outer_height: u32, insets: Insets) -> Self {
        Self { outer_width: outer_width as f64, outer_height: outer_height as f64, insets }
    }

    /// Plot width, never below one pixel.
    pub fn width(&self) -> f64 {
        (self.outer_width - self.insets.hsum() as f64).max(1.0)
    }

    /// Plot height, never below one pixel.
    pub fn height(&self) -> f64 {
        (self.outer_height - self.insets.vsum() as f64).max(1.0)
    }

    /// Convert a position on the outer surface into plot-local coordinates.
    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.insets.left as f64, y - self.insets.top as f64)
    }

    /// Whether a plot-local point lies inside the plot area.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width() && y >= 0.0 && y <= self.height()
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
