//! # Item Price Summary
//!
//! Per-item price spread across active markets.
//!
//! For each requested reference item this reports the lowest and highest
//! current price among active markets and the market offering the lowest
//! one. Items whose prices are quoted in several currencies are flagged
//! rather than summarized.

use crate::domain::entities::PriceSnapshot;
use crate::domain::errors::DomainResult;
use crate::domain::services::basket_comparison::active_markets_by_id;
use crate::domain::services::listing_index::ListingIndex;
use crate::domain::value_objects::{Basket, Currency, MarketId, Price, ReferenceItemId};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Price spread of one item across markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    /// Lowest current price.
    pub min_price: Price,
    /// Highest current price.
    pub max_price: Price,
    /// Market offering the lowest price (lowest id on ties).
    pub cheapest_market_id: MarketId,
    /// Name of that market.
    pub cheapest_market_name: String,
    /// Number of active markets with a current price.
    pub priced_market_count: usize,
    /// Currency of all observed prices.
    pub currency: Currency,
}

/// Summary for one requested item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPriceSummary {
    /// Requested reference item.
    pub reference_item_id: ReferenceItemId,
    /// Catalog name.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Spread, absent when no active market prices the item or when the
    /// item is flagged.
    pub price_range: Option<PriceRange>,
    /// Why no spread could be computed despite prices being present.
    pub flagged_reason: Option<String>,
}

/// Computes per-item price spreads.
#[derive(Debug, Clone, Default)]
pub struct ItemPriceSummarizer {
    default_currency: Currency,
}

impl ItemPriceSummarizer {
    /// Creates a summarizer assuming `default_currency` for listings that
    /// state none.
    #[must_use]
    pub fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }

    /// Summarizes prices for the requested items.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `reference_item_ids` is empty,
    /// names an unknown reference item, or names only inactive ones.
    pub fn summarize(
        &self,
        reference_item_ids: &[ReferenceItemId],
        snapshot: &PriceSnapshot,
    ) -> DomainResult<Vec<ItemPriceSummary>> {
        let basket = Basket::new(reference_item_ids.iter().cloned())?;
        let requested = basket.resolve(&snapshot.reference_items)?;

        let wanted: HashSet<&ReferenceItemId> = basket.item_ids().iter().collect();
        let listings = ListingIndex::build(&snapshot.market_items, &wanted);
        let markets = active_markets_by_id(&snapshot.markets);

        let summaries = requested
            .into_iter()
            .map(|item| {
                // markets iterate in id order, so the first minimum is the lowest id
                let offers: Vec<_> = markets
                    .values()
                    .filter_map(|market| {
                        let listing = listings.get(market.id(), item.id())?;
                        let price = listing.comparable_price()?;
                        let currency = listing.effective_currency(&self.default_currency);
                        Some((*market, price, currency))
                    })
                    .collect();

                let currencies: BTreeSet<&Currency> = offers.iter().map(|(_, _, c)| *c).collect();

                let (price_range, flagged_reason) = if currencies.len() > 1 {
                    let codes: Vec<&str> = currencies.iter().map(|c| c.code()).collect();
                    (
                        None,
                        Some(format!(
                            "prices quoted in multiple currencies: {}",
                            codes.join(", ")
                        )),
                    )
                } else {
                    let range = offers
                        .iter()
                        .min_by_key(|(_, price, _)| *price)
                        .zip(offers.iter().map(|(_, price, _)| *price).max())
                        .map(|((market, min_price, currency), max_price)| PriceRange {
                            min_price: *min_price,
                            max_price,
                            cheapest_market_id: market.id().clone(),
                            cheapest_market_name: market.name().to_string(),
                            priced_market_count: offers.len(),
                            currency: (*currency).clone(),
                        });
                    (range, None)
                };

                ItemPriceSummary {
                    reference_item_id: item.id().clone(),
                    name: item.name().to_string(),
                    category: item.category().to_string(),
                    price_range,
                    flagged_reason,
                }
            })
            .collect();

        Ok(summaries)
    }
}
