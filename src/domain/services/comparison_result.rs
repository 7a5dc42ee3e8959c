//! # Comparison Result
//!
//! Output of the basket comparison engine.
//!
//! Amounts are kept at full decimal precision; rounding to two decimals
//! happens when the result is rendered for the wire.

use crate::domain::value_objects::{
    Currency, MarketId, MarketItemId, Price, ReferenceItemId,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A requested item with its resolved display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketItem {
    /// Requested reference item.
    pub reference_item_id: ReferenceItemId,
    /// Catalog name.
    pub name: String,
    /// Catalog category.
    pub category: String,
}

/// One basket line as priced (or not) by one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPrice {
    /// Requested reference item.
    pub reference_item_id: ReferenceItemId,
    /// Catalog name of the reference item.
    pub reference_item_name: String,
    /// Chosen listing, if the market lists the item at all.
    pub market_item_id: Option<MarketItemId>,
    /// Market-specific name of the listing.
    pub market_item_name: Option<String>,
    /// Brand of the listing.
    pub brand: Option<String>,
    /// Current price; `None` when the item is unavailable.
    pub price: Option<Price>,
    /// Pre-promotion price.
    pub original_price: Option<Price>,
    /// Discount against the original price, in percent.
    pub discount_percentage: Option<Decimal>,
    /// Currency of the line.
    pub currency: Currency,
    /// Promotion flag of the listing.
    pub is_promotion: bool,
    /// True if the market has a current price for the item.
    pub available: bool,
}

/// Basket evaluation for a single market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketComparison {
    /// Market identifier.
    pub market_id: MarketId,
    /// Market name.
    pub market_name: String,
    /// Market logo reference.
    pub market_logo_url: Option<String>,
    /// Sum of current prices of the available items.
    pub total_price: Decimal,
    /// Currency all summed prices are quoted in.
    pub currency: Currency,
    /// True if every basket item is available.
    pub all_items_available: bool,
    /// Position among fully-available markets (1 = cheapest).
    pub rank: Option<usize>,
    /// Per-item breakdown in basket order.
    pub item_prices: Vec<ItemPrice>,
    /// Items the market cannot supply, in basket order.
    pub missing_items: Vec<ReferenceItemId>,
    /// Number of items with a current price.
    pub available_item_count: usize,
    /// Number of items in the basket.
    pub total_item_count: usize,
}

impl MarketComparison {
    /// Returns true if this market is ranked first.
    #[must_use]
    pub fn is_cheapest(&self) -> bool {
        self.rank == Some(1)
    }
}

impl fmt::Display for MarketComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MarketComparison({} total={} {} items={}/{})",
            self.market_id,
            self.total_price,
            self.currency,
            self.available_item_count,
            self.total_item_count
        )
    }
}

/// A market left out of the comparison because its data is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedMarket {
    /// Market identifier.
    pub market_id: MarketId,
    /// Market name.
    pub market_name: String,
    /// Why the market could not be compared.
    pub reason: String,
}

/// Full result of a basket comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Requested items in first-seen order.
    pub basket_items: Vec<BasketItem>,
    /// Per-market evaluations, ordered by the ranking strategy.
    pub market_comparisons: Vec<MarketComparison>,
    /// Markets skipped because of data-integrity errors.
    pub excluded_markets: Vec<ExcludedMarket>,
    /// Cheapest fully-available market.
    pub cheapest_market_id: Option<MarketId>,
    /// Name of the cheapest fully-available market.
    pub cheapest_market_name: Option<String>,
    /// Lowest total among fully-available markets, zero if none.
    pub lowest_total: Decimal,
    /// Highest total among fully-available markets, zero if none.
    pub highest_total: Decimal,
    /// Spread between highest and lowest total; zero with fewer than two
    /// fully-available markets.
    pub potential_savings: Decimal,
}

impl ComparisonResult {
    /// Returns the markets that can supply the whole basket.
    pub fn fully_available(&self) -> impl Iterator<Item = &MarketComparison> {
        self.market_comparisons
            .iter()
            .filter(|m| m.all_items_available)
    }

    /// Returns the comparison for a market, if it was compared.
    #[must_use]
    pub fn market(&self, market_id: &MarketId) -> Option<&MarketComparison> {
        self.market_comparisons
            .iter()
            .find(|m| &m.market_id == market_id)
    }

    /// Returns the cheapest market's comparison.
    #[must_use]
    pub fn cheapest(&self) -> Option<&MarketComparison> {
        self.cheapest_market_id
            .as_ref()
            .and_then(|id| self.market(id))
    }
}
