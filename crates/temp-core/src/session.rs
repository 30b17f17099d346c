// File: crates/temp-core/src/session.rs
// Summary: Selected-dataset state; load tickets, stale-load rejection and atomic recompute.

use crate::chart::ChartModel;
use crate::config::{ChartConfig, DashboardConfig};
use crate::error::{EmptyDatasetError, FetchError, LoadError};
use crate::fetch::{self, Fetcher};
use crate::hover::HoverController;
use crate::listings::{DatasetListing, TemperatureListings};
use crate::ranking::{rank_guesses, Guess, RankedGuess};
use crate::sample::Dataset;
use crate::stats::DatasetMetadata;

/// Dataset on display together with everything derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveView {
    pub dataset: Dataset,
    pub metadata: DatasetMetadata,
    pub chart: ChartModel,
}

/// Derive metadata and chart geometry for a dataset in one step.
pub fn recompute(dataset: &Dataset, cfg: &ChartConfig) -> Result<(DatasetMetadata, ChartModel), EmptyDatasetError> {
    let metadata = DatasetMetadata::compute(dataset.samples())?;
    let chart = ChartModel::build(dataset.samples(), cfg)?;
    Ok((metadata, chart))
}

/// Identifies one dataset selection. Only the most recent ticket may apply.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    id: u64,
    listing: DatasetListing,
}

impl LoadTicket {
    pub fn listing(&self) -> &DatasetListing {
        &self.listing
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The loaded dataset replaced the active view.
    Applied,
    /// A newer selection was made meanwhile; the result was dropped.
    Stale,
}

pub struct DashboardSession {
    config: DashboardConfig,
    listings: Option<TemperatureListings>,
    active: Option<ActiveView>,
    next_ticket: u64,
    pending: Option<u64>,
}

impl DashboardSession {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config, listings: None, active: None, next_ticket: 0, pending: None }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn listings(&self) -> Option<&TemperatureListings> {
        self.listings.as_ref()
    }

    pub fn set_listings(&mut self, listings: TemperatureListings) {
        self.listings = Some(listings);
    }

    pub fn active(&self) -> Option<&ActiveView> {
        self.active.as_ref()
    }

    /// Whether a selection is still waiting for its result.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a selection. Any earlier outstanding ticket becomes stale.
    pub fn begin_load(&mut self, listing: &DatasetListing) -> LoadTicket {
        self.next_ticket += 1;
        if let Some(old) = self.pending.replace(self.next_ticket) {
            tracing::debug!(superseded = old, by = self.next_ticket, "dataset selection superseded");
        }
        LoadTicket { id: self.next_ticket, listing: listing.clone() }
    }

    /// Apply the result of a load. Stale results are dropped whatever they hold;
    /// failures leave the current view in place.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<Dataset, LoadError>) -> Result<ApplyOutcome, LoadError> {
        if self.pending != Some(ticket.id) {
            tracing::debug!(ticket = ticket.id, date = %ticket.listing.date, "ignoring stale dataset load");
            return Ok(ApplyOutcome::Stale);
        }
        self.pending = None;

        let view = result.and_then(|dataset| {
            let (metadata, chart) = recompute(&dataset, &self.config.chart)?;
            Ok(ActiveView { dataset, metadata, chart })
        });
        match view {
            Ok(view) => {
                tracing::info!(date = %view.dataset.label(), samples = view.dataset.len(), "dataset selected");
                self.active = Some(view);
                Ok(ApplyOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(date = %ticket.listing.date, error = %e, "dataset load failed; keeping previous view");
                Err(e)
            }
        }
    }

    /// Fetch and apply a dataset selection.
    pub async fn select<F: Fetcher>(&mut self, fetcher: &F, listing: &DatasetListing) -> Result<ApplyOutcome, LoadError> {
        let ticket = self.begin_load(listing);
        let result = fetch::load_dataset(fetcher, ticket.listing(), &self.config.ingest).await;
        self.apply_load(ticket, result)
    }

    /// Fetch the listings document. On failure the previous listings stay.
    pub async fn load_listings<F: Fetcher>(&mut self, fetcher: &F, locator: &str) -> Result<&TemperatureListings, FetchError> {
        match fetch::load_listings(fetcher, locator).await {
            Ok(l) => Ok(&*self.listings.insert(l)),
            Err(e) => {
                tracing::warn!(locator, error = %e, "listings load failed");
                Err(e)
            }
        }
    }

    /// Precomputed peak for the active dataset's day.
    pub fn known_maximum(&self) -> Option<f64> {
        let day = self.active.as_ref()?.dataset.label();
        self.listings.as_ref()?.max_temperature_for(day)
    }

    /// Leaderboard against the active day's known peak.
    pub fn leaderboard(&self, guesses: &[Guess]) -> Option<Vec<RankedGuess>> {
        self.known_maximum().map(|max| rank_guesses(max, guesses))
    }

    /// Hover controller bound to the active chart.
    pub fn hover(&self) -> Option<HoverController<'_>> {
        let view = self.active.as_ref()?;
        Some(HoverController::new(&view.chart, view.dataset.samples(), self.config.hover.clone()))
    }
}
