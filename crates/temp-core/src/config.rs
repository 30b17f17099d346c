// File: crates/temp-core/src/config.rs
// Summary: Chart, hover and ingestion settings with defaults; loadable from partial JSON.

use std::path::Path;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::geometry::PlotRect;
use crate::types::{Insets, DEFAULT_TEMPERATURE_CEILING, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer surface width in pixels, margins included.
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Upper bound of the temperature axis.
    pub temperature_ceiling: f64,
    /// Tick count hint used when nicing the light axis.
    pub nice_ticks: usize,
    pub time_ticks: usize,
    /// Cap on points per drawn line (LTTB); `None` draws every sample.
    pub max_points: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            temperature_ceiling: DEFAULT_TEMPERATURE_CEILING,
            nice_ticks: 10,
            time_ticks: 5,
            max_points: None,
        }
    }
}

impl ChartConfig {
    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::new(self.width, self.height, self.insets)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Vertical distance between stacked readout labels.
    pub line_height: f64,
    /// Horizontal gap between the hover line and its labels.
    pub label_offset: f64,
    /// Fraction of plot width past which labels flip to the left of the line.
    pub flip_fraction: f64,
    /// Fraction of plot height below which the label stack may not start.
    pub floor_fraction: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { line_height: 16.0, label_offset: 6.0, flip_fraction: 2.0 / 3.0, floor_fraction: 2.0 / 3.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub delimiter: char,
    /// Offset applied to timestamps that carry none, in minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self { delimiter: ',', utc_offset_minutes: 0 }
    }
}

impl IngestConfig {
    /// Offset for naive timestamps. Out-of-range values fall back to UTC.
    pub fn default_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| {
            tracing::warn!(minutes = self.utc_offset_minutes, "utc offset out of range; using UTC");
            Utc.fix()
        })
    }

    /// Delimiter as a byte. Non-ASCII delimiters fall back to `,`.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            tracing::warn!(delimiter = %self.delimiter, "non-ASCII delimiter; using ','");
            b','
        }
    }

    /// Reject settings the readers cannot honour.
    pub fn validate(&self) -> Result<(), String> {
        if FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).is_none() {
            return Err(format!("utc_offset_minutes {} is outside +/-24h", self.utc_offset_minutes));
        }
        if !self.delimiter.is_ascii() {
            return Err(format!("delimiter {:?} is not ASCII", self.delimiter));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub chart: ChartConfig,
    pub hover: HoverConfig,
    pub ingest: IngestConfig,
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.ingest.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let locator = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| FetchError::Io { locator: locator.clone(), source })?;
        Self::from_json_str(&text).map_err(|source| FetchError::Malformed { locator, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_overrides_defaults() {
        let cfg = DashboardConfig::from_json_str(r#"{"chart":{"temperature_ceiling":140},"ingest":{"utc_offset_minutes":-240}}"#).unwrap();
        assert_eq!(cfg.chart.temperature_ceiling, 140.0);
        assert_eq!(cfg.chart.width, WIDTH);
        assert_eq!(cfg.hover, HoverConfig::default());
        assert_eq!(cfg.ingest.default_offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn invalid_ingest_settings_are_rejected() {
        let err = DashboardConfig::from_json_str(r#"{"ingest":{"utc_offset_minutes":100000}}"#).unwrap_err();
        assert!(err.to_string().contains("utc_offset_minutes"), "{err}");
        let err = DashboardConfig::from_json_str(r#"{"ingest":{"delimiter":"é"}}"#).unwrap_err();
        assert!(err.to_string().contains("not ASCII"), "{err}");
        assert!(DashboardConfig::from_json_str(r#"{"ingest":{"delimiter":";","utc_offset_minutes":-240}}"#).is_ok());
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let cfg = IngestConfig { utc_offset_minutes: 100_000, ..IngestConfig::default() };
        assert_eq!(cfg.default_offset().local_minus_utc(), 0);
    }
}
