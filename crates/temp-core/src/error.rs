// File: crates/temp-core/src/error.rs
// Summary: Error taxonomy for ingestion, statistics and resource fetching.

use thiserror::Error;

/// A malformed row or field encountered while normalizing a dataset.
/// `row` is the zero-based data row (header excluded).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("row {row}: cannot parse {field} timestamp from {text:?}")]
    Timestamp { row: usize, field: &'static str, text: String },

    #[error("row {row}: cannot parse {field} as a number from {text:?}")]
    Number { row: usize, field: &'static str, text: String },

    #[error("row {row}: malformed delimited record: {message}")]
    Row { row: usize, message: String },
}

/// Statistics or geometry requested over zero samples.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dataset contains no samples")]
pub struct EmptyDatasetError;

/// An external resource could not be read or decoded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to read {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {locator}: {source}")]
    Malformed {
        locator: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure of a single load-and-recompute attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Empty(#[from] EmptyDatasetError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
