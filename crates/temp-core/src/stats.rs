// File: crates/temp-core/src/stats.rs
// Summary: Descriptive statistics over a sample sequence (dataset metadata).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::EmptyDatasetError;
use crate::sample::Sample;

/// Summary of one dataset. Recomputed from scratch whenever the dataset changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Timestamp of the first sample in sequence order.
    pub start_timestamp: DateTime<FixedOffset>,
    /// Timestamp of the last sample in sequence order.
    pub end_timestamp: DateTime<FixedOffset>,
    pub external_max: f64,
    pub internal_max: f64,
    pub internal_min: f64,
    /// Mean rounded to two decimals, half away from zero.
    pub internal_mean: f64,
    pub internal_median: f64,
    /// Most frequent whole-degree reading.
    pub internal_mode: i64,
}

impl DatasetMetadata {
    pub fn compute(samples: &[Sample]) -> Result<Self, EmptyDatasetError> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(EmptyDatasetError),
        };
        let internal = samples.iter().map(|s| s.internal_temp).collect::<Vec<_>>();
        let external = samples.iter().map(|s| s.external_temp).collect::<Vec<_>>();

        let meta = Self {
            start_timestamp: first.timestamp,
            end_timestamp: last.timestamp,
            external_max: max(&external)?,
            internal_max: max(&internal)?,
            internal_min: min(&internal)?,
            internal_mean: round_to(mean(&internal)?, 2),
            internal_median: median(&internal)?,
            internal_mode: mode_rounded(&internal)?,
        };
        tracing::debug!(samples = samples.len(), ?meta, "computed dataset metadata");
        Ok(meta)
    }
}

pub fn max(values: &[f64]) -> Result<f64, EmptyDatasetError> {
    values.iter().copied().reduce(f64::max).ok_or(EmptyDatasetError)
}

pub fn min(values: &[f64]) -> Result<f64, EmptyDatasetError> {
    values.iter().copied().reduce(f64::min).ok_or(EmptyDatasetError)
}

pub fn mean(values: &[f64]) -> Result<f64, EmptyDatasetError> {
    if values.is_empty() {
        return Err(EmptyDatasetError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sorted midpoint; the mean of the two middle values on even counts.
pub fn median(values: &[f64]) -> Result<f64, EmptyDatasetError> {
    if values.is_empty() {
        return Err(EmptyDatasetError);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Mode of the values rounded to whole numbers.
/// Ties go to the value that first appears in input order.
pub fn mode_rounded(values: &[f64]) -> Result<i64, EmptyDatasetError> {
    // (value, count) in first-seen order
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for v in values {
        let key = v.round() as i64;
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, c)) => *c += 1,
            None => counts.push((key, 1)),
        }
    }
    let mut best: Option<(i64, usize)> = None;
    for &(k, c) in &counts {
        if best.map_or(true, |(_, bc)| c > bc) {
            best = Some((k, c));
        }
    }
    best.map(|(k, _)| k).ok_or(EmptyDatasetError)
}

/// Round to `decimals` places, half away from zero.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(median(&[7.5]).unwrap(), 7.5);
    }

    #[test]
    fn mode_ties_go_to_first_seen() {
        assert_eq!(mode_rounded(&[3.2, 1.0, 2.9, 1.1]).unwrap(), 3);
        assert_eq!(mode_rounded(&[1.0, 3.2, 2.9, 1.1]).unwrap(), 1);
        assert_eq!(mode_rounded(&[5.0, 6.0, 7.0]).unwrap(), 5);
    }

    #[test]
    fn mode_counts_rounded_values() {
        assert_eq!(mode_rounded(&[104.6, 99.0, 105.4, 98.2]).unwrap(), 105);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.125, 2), 1.13);
        assert_eq!(round_to(94.44, 2), 94.44);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(max(&[]), Err(EmptyDatasetError));
        assert_eq!(min(&[]), Err(EmptyDatasetError));
        assert_eq!(mean(&[]), Err(EmptyDatasetError));
        assert_eq!(median(&[]), Err(EmptyDatasetError));
        assert_eq!(mode_rounded(&[]), Err(EmptyDatasetError));
        assert_eq!(DatasetMetadata::compute(&[]), Err(EmptyDatasetError));
    }
}
