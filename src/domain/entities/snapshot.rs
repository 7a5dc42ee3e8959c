//! # Price Snapshot
//!
//! Materialized view of the catalog handed to the comparison engine.

use crate::domain::entities::{Market, MarketItem, ReferenceItem};
use serde::{Deserialize, Serialize};

/// Immutable input for one comparison.
///
/// Supplied fresh by the data layer for each request and discarded after
/// the response is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    /// Catalog entries.
    #[serde(default)]
    pub reference_items: Vec<ReferenceItem>,
    /// Markets, active or not.
    #[serde(default)]
    pub markets: Vec<Market>,
    /// Market listings with their current prices.
    #[serde(default)]
    pub market_items: Vec<MarketItem>,
}

impl PriceSnapshot {
    /// Creates a snapshot from its three collections.
    #[must_use]
    pub fn new(
        reference_items: Vec<ReferenceItem>,
        markets: Vec<Market>,
        market_items: Vec<MarketItem>,
    ) -> Self {
        Self {
            reference_items,
            markets,
            market_items,
        }
    }

    /// Returns the active markets only.
    pub fn active_markets(&self) -> impl Iterator<Item = &Market> {
        self.markets.iter().filter(|m| m.is_active())
    }

    /// Returns true if the snapshot holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reference_items.is_empty() && self.markets.is_empty() && self.market_items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn active_markets_filters_inactive() {
        let snapshot = PriceSnapshot::new(
            vec![],
            vec![
                Market::new("a", "A"),
                Market::new("b", "B").with_active(false),
            ],
            vec![],
        );
        let ids: Vec<&str> = snapshot.active_markets().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn deserializes_partial_document() {
        let snapshot: PriceSnapshot =
            serde_json::from_str(r#"{"markets":[{"id":"a","name":"A","active":true}]}"#).unwrap();
        assert_eq!(snapshot.markets.len(), 1);
        assert!(snapshot.market_items.is_empty());
        assert!(!snapshot.is_empty());
    }
}
