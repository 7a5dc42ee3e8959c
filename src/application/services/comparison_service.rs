//! # Basket Comparison Service
//!
//! Orchestrates snapshot loading and basket comparison.
//!
//! This module provides the [`BasketComparisonService`] which fetches the
//! price snapshot for a request from a [`PriceSnapshotProvider`] under a
//! deadline and hands it to the pure domain engines.

use crate::application::error::{ApplicationError, ApplicationResult, InfrastructureError};
use crate::domain::entities::PriceSnapshot;
use crate::domain::services::{
    BasketComparisonEngine, ComparisonResult, ItemPriceSummarizer, ItemPriceSummary,
};
use crate::domain::value_objects::{Currency, ReferenceItemId};
use crate::infrastructure::persistence::PriceSnapshotProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Default snapshot load deadline in milliseconds.
pub const DEFAULT_SNAPSHOT_TIMEOUT_MS: u64 = 5000;

/// Configuration for the comparison service.
#[derive(Debug, Clone)]
pub struct ComparisonServiceConfig {
    /// Deadline for loading a snapshot in milliseconds.
    pub snapshot_timeout_ms: u64,
    /// Currency assumed for listings that state none.
    pub default_currency: Currency,
}

impl Default for ComparisonServiceConfig {
    fn default() -> Self {
        Self {
            snapshot_timeout_ms: DEFAULT_SNAPSHOT_TIMEOUT_MS,
            default_currency: Currency::default(),
        }
    }
}

impl ComparisonServiceConfig {
    /// Creates a configuration with the given snapshot deadline.
    #[must_use]
    pub fn with_timeout(snapshot_timeout_ms: u64) -> Self {
        Self {
            snapshot_timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the default currency.
    #[must_use]
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }
}

/// Application service behind the comparison endpoints.
#[derive(Debug, Clone)]
pub struct BasketComparisonService {
    provider: Arc<dyn PriceSnapshotProvider>,
    engine: BasketComparisonEngine,
    summarizer: ItemPriceSummarizer,
    config: ComparisonServiceConfig,
}

impl BasketComparisonService {
    /// Creates a new service.
    #[must_use]
    pub fn new(provider: Arc<dyn PriceSnapshotProvider>, config: ComparisonServiceConfig) -> Self {
        Self {
            provider,
            engine: BasketComparisonEngine::with_currency(config.default_currency.clone()),
            summarizer: ItemPriceSummarizer::new(config.default_currency.clone()),
            config,
        }
    }

    /// Creates a service with default configuration.
    #[must_use]
    pub fn with_defaults(provider: Arc<dyn PriceSnapshotProvider>) -> Self {
        Self::new(provider, ComparisonServiceConfig::default())
    }

    /// Compares the basket across all active markets.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `reference_item_ids` is empty, names unknown items or only inactive ones
    /// - the snapshot cannot be loaded before the deadline
    /// - the snapshot provider fails
    #[tracing::instrument(skip(self, reference_item_ids), fields(items = reference_item_ids.len()))]
    pub async fn compare(
        &self,
        reference_item_ids: &[ReferenceItemId],
    ) -> ApplicationResult<ComparisonResult> {
        let snapshot = self.load(reference_item_ids).await?;
        let result = self.engine.compare(reference_item_ids, &snapshot)?;

        tracing::info!(
            markets = result.market_comparisons.len(),
            excluded = result.excluded_markets.len(),
            cheapest = result.cheapest_market_id.as_ref().map(|id| id.as_str()),
            ranking = self.engine.ranking_strategy_name(),
            "basket compared"
        );

        Ok(result)
    }

    /// Summarizes each item's price spread across active markets.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::compare`].
    #[tracing::instrument(skip(self, reference_item_ids), fields(items = reference_item_ids.len()))]
    pub async fn summarize_prices(
        &self,
        reference_item_ids: &[ReferenceItemId],
    ) -> ApplicationResult<Vec<ItemPriceSummary>> {
        let snapshot = self.load(reference_item_ids).await?;
        let summaries = self.summarizer.summarize(reference_item_ids, &snapshot)?;

        tracing::info!(
            items = summaries.len(),
            flagged = summaries.iter().filter(|s| s.flagged_reason.is_some()).count(),
            "item prices summarized"
        );

        Ok(summaries)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ComparisonServiceConfig {
        &self.config
    }

    async fn load(&self, reference_item_ids: &[ReferenceItemId]) -> ApplicationResult<PriceSnapshot> {
        // reject before touching the provider
        if reference_item_ids.is_empty() {
            return Err(ApplicationError::validation(
                "referenceItemIds must not be empty",
            ));
        }

        let deadline = Duration::from_millis(self.config.snapshot_timeout_ms);
        match timeout(deadline, self.provider.load_snapshot(reference_item_ids)).await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "snapshot load failed");
                Err(InfrastructureError::from(e).into())
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.snapshot_timeout_ms,
                    "snapshot load timed out"
                );
                Err(ApplicationError::timeout(format!(
                    "snapshot load exceeded {}ms",
                    self.config.snapshot_timeout_ms
                )))
            }
        }
    }
}
