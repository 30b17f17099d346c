// File: crates/temp-core/src/listings.rs
// Summary: Dataset catalog and precomputed daily maxima; builder for the batch generator.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::IngestConfig;
use crate::error::{FetchError, LoadError};
use crate::stats;

/// Catalog entry pointing at one day's raw readings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetListing {
    /// Day label, `M/D/YYYY`.
    pub date: String,
    pub url: String,
}

/// Precomputed peak cabin temperature for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaxTemperatureListing {
    pub date: String,
    pub temperature: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureListings {
    /// Newest first.
    pub datasets: Vec<DatasetListing>,
    pub max_temperatures: Vec<MaxTemperatureListing>,
}

impl TemperatureListings {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Most recent dataset, if any.
    pub fn latest(&self) -> Option<&DatasetListing> {
        self.datasets.first()
    }

    pub fn dataset_for(&self, date: &str) -> Option<&DatasetListing> {
        self.datasets.iter().find(|d| d.date == date)
    }

    /// Known peak temperature for a day label.
    pub fn max_temperature_for(&self, date: &str) -> Option<f64> {
        self.max_temperatures.iter().find(|m| m.date == date).map(|m| m.temperature)
    }
}

/// Parse the leading `YYYYMMDD` of a raw data file name.
pub fn date_from_file_name(file_name: &str) -> Option<NaiveDate> {
    let prefix = file_name.get(0..8)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y%m%d").ok()
}

/// Day label in the listings' `M/D/YYYY` form (no zero padding).
pub fn date_label(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Accumulates per-day results of the batch scan into a listings document.
#[derive(Debug, Default)]
pub struct ListingsBuilder {
    base_url: String,
    days: Vec<(NaiveDate, DatasetListing, MaxTemperatureListing)>,
}

impl ListingsBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), days: Vec::new() }
    }

    /// Record one day's file. Returns false (and records nothing) when the
    /// file name carries no `YYYYMMDD` prefix.
    pub fn add_day(&mut self, file_name: &str, max_temperature: f64) -> bool {
        let Some(date) = date_from_file_name(file_name) else {
            return false;
        };
        let label = date_label(date);
        let url = if self.base_url.is_empty() { file_name.to_string() } else { format!("{}/{}", self.base_url, file_name) };
        self.days.push((
            date,
            DatasetListing { date: label.clone(), url },
            MaxTemperatureListing { date: label, temperature: max_temperature },
        ));
        true
    }

    /// Datasets newest-first; maxima stay in the order they were added.
    pub fn build(self) -> TemperatureListings {
        let max_temperatures = self.days.iter().map(|(_, _, m)| m.clone()).collect();
        let mut dated = self.days.into_iter().map(|(d, l, _)| (d, l)).collect::<Vec<_>>();
        dated.sort_by(|a, b| b.0.cmp(&a.0));
        TemperatureListings { datasets: dated.into_iter().map(|(_, l)| l).collect(), max_temperatures }
    }
}

/// File names in `dir` matching `YYYYMMDD*.csv`, sorted by name.
pub fn daily_files(dir: &Path) -> Result<Vec<String>, FetchError> {
    let io = |source: std::io::Error| FetchError::Io { locator: dir.display().to_string(), source };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".csv") && date_from_file_name(&name).is_some() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Build the listings document from the daily files in `dir`.
///
/// Each day's maximum is the largest cabin (`sensor_1`) reading. Files that
/// fail to parse or hold no readings are skipped with a warning; only an
/// unreadable directory or file aborts the scan.
pub fn scan_dir(dir: &Path, base_url: &str, cfg: &IngestConfig) -> Result<TemperatureListings, LoadError> {
    let files = daily_files(dir)?;
    tracing::info!(dir = %dir.display(), files = files.len(), "scanning daily files");

    let mut builder = ListingsBuilder::new(base_url);
    for name in &files {
        let path = dir.join(name);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| FetchError::Io { locator: path.display().to_string(), source })?;
        let samples = match crate::samples_from_text(&text, cfg) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "skipping unparsable file");
                continue;
            }
        };
        let internal = samples.iter().map(|s| s.internal_temp).collect::<Vec<_>>();
        match stats::max(&internal) {
            Ok(max) => {
                builder.add_day(name, max);
                tracing::debug!(file = %name, samples = samples.len(), max, "processed");
            }
            Err(e) => tracing::warn!(file = %name, error = %e, "skipping file"),
        }
    }
    Ok(builder.build())
}
