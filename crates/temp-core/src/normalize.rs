// File: crates/temp-core/src/normalize.rs
// Summary: Record normalizer; text rows into typed, unit-corrected samples.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::config::IngestConfig;
use crate::error::ParseError;
use crate::sample::{RawRecord, Sample};
use crate::types::LIGHT_RAW_FULL_SCALE;

/// Naive layouts accepted after RFC 3339 fails; read at the configured offset.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
];

/// Convert a raw light reading (0..1000) into percent.
#[inline]
pub fn light_percent(raw: f64) -> f64 {
    (raw / LIGHT_RAW_FULL_SCALE) * 100.0
}

/// Normalize every record, in order. The first malformed row aborts the load.
pub fn normalize_records(records: &[RawRecord], cfg: &IngestConfig) -> Result<Vec<Sample>, ParseError> {
    let offset = cfg.default_offset();
    records
        .iter()
        .enumerate()
        .map(|(row, rec)| normalize_record(row, rec, offset))
        .collect()
}

pub fn normalize_record(row: usize, rec: &RawRecord, offset: FixedOffset) -> Result<Sample, ParseError> {
    let timestamp = parse_timestamp(&rec.date, offset).ok_or_else(|| ParseError::Timestamp {
        row,
        field: "date",
        text: rec.date.clone(),
    })?;
    let light = parse_number(row, "photocell", &rec.photocell)?;
    Ok(Sample {
        timestamp,
        light_percent: light_percent(light),
        internal_temp: parse_number(row, "sensor_1", &rec.sensor_1)?,
        external_temp: parse_number(row, "sensor_2", &rec.sensor_2)?,
    })
}

/// Parse a timestamp, trying RFC 3339 first and then the naive layouts.
pub fn parse_timestamp(text: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t);
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
}

fn parse_number(row: usize, field: &'static str, text: &str) -> Result<f64, ParseError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Number { row, field, text: text.to_string() }),
    }
}
