// File: crates/temp-core/src/types.rs
// Summary: Shared constants and plot margins.

use serde::{Deserialize, Serialize};

/// Default outer chart width in pixels.
pub const WIDTH: u32 = 460;
/// Default outer chart height in pixels.
pub const HEIGHT: u32 = 400;

/// Full-scale reading of the raw light sensor.
pub const LIGHT_RAW_FULL_SCALE: f64 = 1000.0;

/// Ceiling of the temperature axis. Fixed so the axis does not jump between days.
pub const DEFAULT_TEMPERATURE_CEILING: f64 = 160.0;

/// Plot margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 30, 10, 30)
    }
}
