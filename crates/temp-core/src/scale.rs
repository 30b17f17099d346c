// File: crates/temp-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms between data and plot-local pixels.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::grid;

/// Time in milliseconds since the Unix epoch.
pub type Millis = f64;
/// Data value (temperature or light percent).
pub type Value = f64;

/// Linear map from `[start_ms, end_ms]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start_ms: Millis,
    pub end_ms: Millis,
    pub left_px: f64,
    pub right_px: f64,
    offset: FixedOffset,
}

impl TimeScale {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>, left_px: f64, right_px: f64) -> Self {
        Self {
            start_ms: start.timestamp_millis() as f64,
            end_ms: end.timestamp_millis() as f64,
            left_px,
            right_px,
            offset: *start.offset(),
        }
    }

    #[inline]
    fn span(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Pixel for a time. A zero-length domain pins everything to `left_px`.
    #[inline]
    pub fn to_px(&self, t: Millis) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return self.left_px;
        }
        self.left_px + (t - self.start_ms) / span * (self.right_px - self.left_px)
    }

    /// Inverse of [`to_px`](Self::to_px), unclamped.
    #[inline]
    pub fn from_px(&self, px: f64) -> Millis {
        let range = self.right_px - self.left_px;
        if range == 0.0 || self.span() == 0.0 {
            return self.start_ms;
        }
        self.start_ms + (px - self.left_px) / range * self.span()
    }

    pub fn datetime_px(&self, t: &DateTime<FixedOffset>) -> f64 {
        self.to_px(t.timestamp_millis() as f64)
    }

    /// Time under a pixel, in the offset of the domain start.
    pub fn invert(&self, px: f64) -> Option<DateTime<FixedOffset>> {
        self.offset.timestamp_millis_opt(self.from_px(px).round() as i64).single()
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Evenly spaced tick times across the domain.
    pub fn ticks(&self, count: usize) -> Vec<Millis> {
        if self.span() == 0.0 {
            return vec![self.start_ms];
        }
        grid::linspace(self.start_ms, self.end_ms, count)
    }
}

/// Linear map from `[vmin, vmax]` onto `[bottom_px, top_px]` (values grow upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Scale over `[vmin, vmax]` extended to tick boundaries.
    pub fn new_nice(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value, count: usize) -> Self {
        let (lo, hi) = grid::nice(vmin, vmax, count);
        Self::new_linear(top_px, bottom_px, lo, hi)
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        let span = self.vmax - self.vmin;
        self.bottom_px - (y - self.vmin) / span * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        let span = self.vmax - self.vmin;
        let range = self.bottom_px - self.top_px;
        if range == 0.0 {
            return self.vmin;
        }
        self.vmin + (self.bottom_px - py) / range * span
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.vmin, self.vmax, count)
    }
}
