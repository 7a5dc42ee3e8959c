//! # In-Memory Price Snapshot Provider
//!
//! In-memory implementation of [`PriceSnapshotProvider`].
//!
//! Records are kept in thread-safe `HashMap`s keyed by id. The store can be
//! seeded from a JSON document shaped like [`PriceSnapshot`]
//! (`{ "referenceItems": [...], "markets": [...], "marketItems": [...] }`).

use crate::domain::entities::{Market, MarketItem, PriceSnapshot, ReferenceItem};
use crate::domain::value_objects::{MarketId, MarketItemId, ReferenceItemId};
use crate::infrastructure::persistence::traits::{
    PriceSnapshotProvider, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Catalog {
    reference_items: HashMap<ReferenceItemId, ReferenceItem>,
    markets: HashMap<MarketId, Market>,
    market_items: HashMap<MarketItemId, MarketItem>,
}

/// In-memory implementation of [`PriceSnapshotProvider`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceSnapshotProvider {
    storage: Arc<RwLock<Catalog>>,
}

impl InMemoryPriceSnapshotProvider {
    /// Creates a new empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider holding every record of `snapshot`.
    ///
    /// Later records replace earlier ones with the same id.
    #[must_use]
    pub fn from_snapshot(snapshot: PriceSnapshot) -> Self {
        let catalog = Catalog {
            reference_items: snapshot
                .reference_items
                .into_iter()
                .map(|item| (item.id().clone(), item))
                .collect(),
            markets: snapshot
                .markets
                .into_iter()
                .map(|market| (market.id().clone(), market))
                .collect(),
            market_items: snapshot
                .market_items
                .into_iter()
                .map(|item| (item.id().clone(), item))
                .collect(),
        };
        Self {
            storage: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Parses a JSON snapshot document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if the document is not a
    /// valid snapshot.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let snapshot: PriceSnapshot = serde_json::from_str(json)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Reads and parses a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read and
    /// `RepositoryError::Serialization` if it cannot be parsed.
    pub async fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            RepositoryError::io(format!("cannot read {}: {e}", path.display()))
        })?;
        let provider = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            reference_items = provider.counts().await.0,
            "price snapshot loaded"
        );
        Ok(provider)
    }

    /// Inserts or replaces a reference item.
    pub async fn upsert_reference_item(&self, item: ReferenceItem) {
        let mut storage = self.storage.write().await;
        storage.reference_items.insert(item.id().clone(), item);
    }

    /// Inserts or replaces a market.
    pub async fn upsert_market(&self, market: Market) {
        let mut storage = self.storage.write().await;
        storage.markets.insert(market.id().clone(), market);
    }

    /// Inserts or replaces a market item.
    pub async fn upsert_market_item(&self, item: MarketItem) {
        let mut storage = self.storage.write().await;
        storage.market_items.insert(item.id().clone(), item);
    }

    /// Returns `(reference_items, markets, market_items)` counts.
    pub async fn counts(&self) -> (usize, usize, usize) {
        let storage = self.storage.read().await;
        (
            storage.reference_items.len(),
            storage.markets.len(),
            storage.market_items.len(),
        )
    }

    /// Clears all records.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        *storage = Catalog::default();
    }
}

#[async_trait]
impl PriceSnapshotProvider for InMemoryPriceSnapshotProvider {
    async fn load_snapshot(
        &self,
        reference_item_ids: &[ReferenceItemId],
    ) -> RepositoryResult<PriceSnapshot> {
        let wanted: HashSet<&ReferenceItemId> = reference_item_ids.iter().collect();
        let storage = self.storage.read().await;

        let reference_items = wanted
            .iter()
            .filter_map(|id| storage.reference_items.get(*id))
            .cloned()
            .collect();
        let markets = storage
            .markets
            .values()
            .filter(|market| market.is_active())
            .cloned()
            .collect();
        let market_items = storage
            .market_items
            .values()
            .filter(|item| wanted.contains(item.reference_item_id()))
            .cloned()
            .collect();

        Ok(PriceSnapshot::new(reference_items, markets, market_items))
    }
}
