// File: crates/temp-core/src/lib.rs
// Summary: Core library entry point; sample normalization, statistics, guess ranking, chart geometry and hover state.

pub mod axis;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod fetch;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod ingest;
pub mod listings;
pub mod normalize;
pub mod ranking;
pub mod sample;
pub mod scale;
pub mod session;
pub mod stats;
pub mod svg;
pub mod types;

pub use axis::Axis;
pub use chart::{ChartModel, LinePath};
pub use config::{ChartConfig, DashboardConfig, HoverConfig, IngestConfig};
pub use downsample::lttb;
pub use error::{EmptyDatasetError, FetchError, LoadError, ParseError};
pub use fetch::{Fetcher, FsFetcher};
pub use field::SensorField;
pub use hover::{HoverController, HoverReadout, HoverState};
pub use listings::{DatasetListing, MaxTemperatureListing, TemperatureListings};
pub use ranking::{rank_guesses, Guess, RankedGuess};
pub use sample::{Dataset, RawRecord, Sample};
pub use session::{recompute, ActiveView, ApplyOutcome, DashboardSession};
pub use stats::DatasetMetadata;

/// Parse delimited text and normalize it into samples in one call.
pub fn samples_from_text(text: &str, cfg: &IngestConfig) -> Result<Vec<Sample>, ParseError> {
    let records = ingest::read_records(text, cfg.delimiter_byte())?;
    normalize::normalize_records(&records, cfg)
}
