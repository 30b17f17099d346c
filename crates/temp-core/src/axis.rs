// File: crates/temp-core/src/axis.rs
// Summary: Axis model with labels and pixel-placed ticks.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::scale::{TimeScale, ValueScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, plot-local pixels.
    pub px: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub position: AxisPosition,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Time axis with `HH:MM` tick labels in the scale's offset.
    pub fn time(label: impl Into<String>, scale: &TimeScale, count: usize) -> Self {
        let offset = scale.offset();
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|ms| Tick { value: ms, px: scale.to_px(ms), text: format_hm(offset, ms) })
            .collect();
        Self { label: label.into(), position: AxisPosition::Bottom, min: scale.start_ms, max: scale.end_ms, ticks }
    }

    pub fn value(label: impl Into<String>, position: AxisPosition, scale: &ValueScale, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { value: v, px: scale.to_px(v), text: format_value(v) })
            .collect();
        Self { label: label.into(), position, min: scale.vmin, max: scale.vmax, ticks }
    }
}

fn format_hm(offset: FixedOffset, ms: f64) -> String {
    offset
        .timestamp_millis_opt(ms.round() as i64)
        .single()
        .map(|t: DateTime<FixedOffset>| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_axis_ticks_are_placed() {
        let s = ValueScale::new_linear(0.0, 360.0, 0.0, 160.0);
        let a = Axis::value("°F", AxisPosition::Left, &s, 10);
        assert_eq!(a.ticks.first().map(|t| (t.text.as_str(), t.px)), Some(("0", 360.0)));
        assert_eq!(a.ticks.last().map(|t| (t.text.as_str(), t.px)), Some(("160", 0.0)));
    }

    #[test]
    fn time_axis_labels_use_local_clock() {
        let a = DateTime::parse_from_rfc3339("2022-06-29T08:00:00-04:00").unwrap();
        let b = DateTime::parse_from_rfc3339("2022-06-29T10:00:00-04:00").unwrap();
        let s = TimeScale::new(a, b, 0.0, 370.0);
        let axis = Axis::time("Time", &s, 5);
        let labels = axis.ticks.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["08:00", "08:30", "09:00", "09:30", "10:00"]);
    }
}
