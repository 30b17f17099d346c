// File: crates/temp-core/src/fetch.rs
// Summary: Resource fetching seam and async loaders for datasets, listings and guesses.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::config::IngestConfig;
use crate::error::{FetchError, LoadError};
use crate::ingest::read_records;
use crate::listings::{DatasetListing, TemperatureListings};
use crate::normalize::normalize_records;
use crate::ranking::Guess;
use crate::sample::Dataset;

/// Fetch a text resource by locator.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch_text(&self, locator: &str) -> Result<String, FetchError>;
}

/// Resolves locators to files below a root directory.
///
/// Only the path portion of a locator is used: `//host/dir/20220629.csv` and
/// `https://host/dir/20220629.csv` both resolve to `<root>/20220629.csv`,
/// plain relative paths resolve under `root` as given.
#[derive(Clone, Debug)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, locator: &str) -> PathBuf {
        let remote = locator.starts_with("//") || locator.contains("://");
        if remote {
            let name = locator.rsplit('/').next().unwrap_or(locator);
            self.root.join(name)
        } else {
            self.root.join(locator.trim_start_matches('/'))
        }
    }
}

impl Fetcher for FsFetcher {
    async fn fetch_text(&self, locator: &str) -> Result<String, FetchError> {
        let path = self.resolve(locator);
        tracing::debug!(locator, path = %path.display(), "fetching");
        tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(locator.to_string())
            } else {
                FetchError::Io { locator: locator.to_string(), source }
            }
        })
    }
}

/// Fetch, parse and normalize one day's readings.
pub async fn load_dataset<F: Fetcher>(fetcher: &F, listing: &DatasetListing, cfg: &IngestConfig) -> Result<Dataset, LoadError> {
    let text = fetcher.fetch_text(&listing.url).await?;
    let records = read_records(&text, cfg.delimiter_byte())?;
    let samples = normalize_records(&records, cfg)?;
    let dataset = Dataset::new(listing.date.clone(), listing.url.clone(), samples)?;
    tracing::info!(date = %listing.date, samples = dataset.len(), "loaded dataset");
    Ok(dataset)
}

pub async fn load_listings<F: Fetcher>(fetcher: &F, locator: &str) -> Result<TemperatureListings, FetchError> {
    let listings: TemperatureListings = fetch_json(fetcher, locator).await?;
    tracing::info!(datasets = listings.datasets.len(), maxima = listings.max_temperatures.len(), "loaded listings");
    Ok(listings)
}

pub async fn load_guesses<F: Fetcher>(fetcher: &F, locator: &str) -> Result<Vec<Guess>, FetchError> {
    fetch_json(fetcher, locator).await
}

async fn fetch_json<F: Fetcher, T: DeserializeOwned>(fetcher: &F, locator: &str) -> Result<T, FetchError> {
    let text = fetcher.fetch_text(locator).await?;
    serde_json::from_str(&text).map_err(|source| FetchError::Malformed { locator: locator.to_string(), source })
}
