// File: crates/temp-core/src/sample.rs
// Summary: Raw and normalized sensor records, and the Dataset container.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::EmptyDatasetError;

/// One row of the delimited source, all fields still text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    /// Light sensor reading on its 0..1000 raw scale.
    pub photocell: String,
    /// Cabin (internal) temperature.
    pub sensor_1: String,
    /// Exterior temperature.
    pub sensor_2: String,
}

impl RawRecord {
    pub fn new(
        date: impl Into<String>,
        photocell: impl Into<String>,
        sensor_1: impl Into<String>,
        sensor_2: impl Into<String>,
    ) -> Self {
        Self { date: date.into(), photocell: photocell.into(), sensor_1: sensor_1.into(), sensor_2: sensor_2.into() }
    }
}

/// One normalized sensor reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<FixedOffset>,
    /// Light level in percent of full scale (0..100).
    pub light_percent: f64,
    pub internal_temp: f64,
    pub external_temp: f64,
}

impl Sample {
    /// Milliseconds since the Unix epoch, the unit the time scale works in.
    #[inline]
    pub fn time_ms(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

/// One day's readings in source order.
/// Contract: `samples` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    label: String,
    source: String,
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        samples: Vec<Sample>,
    ) -> Result<Self, EmptyDatasetError> {
        if samples.is_empty() {
            return Err(EmptyDatasetError);
        }
        Ok(Self { label: label.into(), source: source.into(), samples })
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn source(&self) -> &str { &self.source }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }

    /// A dataset always holds at least one sample.
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn first(&self) -> &Sample { &self.samples[0] }
    pub fn last(&self) -> &Sample { &self.samples[self.samples.len() - 1] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_empty() {
        assert_eq!(Dataset::new("6/29/2022", "x.csv", Vec::new()), Err(EmptyDatasetError));
    }

    #[test]
    fn dataset_keeps_positional_ends() {
        let t0 = DateTime::parse_from_rfc3339("2022-06-29T10:00:00-04:00").unwrap();
        let t1 = DateTime::parse_from_rfc3339("2022-06-29T09:00:00-04:00").unwrap();
        let mk = |t| Sample { timestamp: t, light_percent: 0.0, internal_temp: 1.0, external_temp: 2.0 };
        let ds = Dataset::new("d", "s", vec![mk(t0), mk(t1)]).unwrap();
        assert_eq!(ds.first().timestamp, t0);
        assert_eq!(ds.last().timestamp, t1);
        assert_eq!(ds.len(), 2);
    }
}
