// File: crates/temp-core/src/field.rs
// Summary: Closed set of tracked sensor fields with display labels and colors.

use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// One of the three series drawn on the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    Internal,
    External,
    Light,
}

/// Which value axis a field is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDisplayInfo {
    pub label: &'static str,
    /// CSS hex color.
    pub color: &'static str,
}

/// Display name used for the timestamp row of hover readouts.
pub const TIME_LABEL: &str = "Time";

impl SensorField {
    /// Drawing and readout order.
    pub const ALL: [SensorField; 3] = [SensorField::Internal, SensorField::External, SensorField::Light];

    pub const fn display_info(self) -> FieldDisplayInfo {
        match self {
            SensorField::Internal => FieldDisplayInfo { label: "Cabin Temp", color: "#e41a1c" },
            SensorField::External => FieldDisplayInfo { label: "Outside Temp", color: "#377eb8" },
            SensorField::Light => FieldDisplayInfo { label: "Light", color: "#4daf4a" },
        }
    }

    pub const fn axis(self) -> AxisSide {
        match self {
            SensorField::Internal | SensorField::External => AxisSide::Left,
            SensorField::Light => AxisSide::Right,
        }
    }

    /// Unit suffix appended to readout values.
    pub const fn unit(self) -> &'static str {
        match self {
            SensorField::Internal | SensorField::External => "°F",
            SensorField::Light => "%",
        }
    }

    #[inline]
    pub fn value(self, sample: &Sample) -> f64 {
        match self {
            SensorField::Internal => sample.internal_temp,
            SensorField::External => sample.external_temp,
            SensorField::Light => sample.light_percent,
        }
    }
}
