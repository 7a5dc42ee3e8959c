//! # Domain Services
//!
//! Stateless computations over catalog snapshots.
//!
//! - [`BasketComparisonEngine`]: per-market basket totals and cheapest market
//! - [`MarketRankingStrategy`]: ordering of compared markets
//! - [`ItemPriceSummarizer`]: per-item price spread across markets

pub mod basket_comparison;
pub mod comparison_result;
pub mod listing_index;
pub mod market_ranking;
pub mod price_summary;

pub use basket_comparison::{BasketComparisonEngine, compare_baskets};
pub use comparison_result::{
    BasketItem, ComparisonResult, ExcludedMarket, ItemPrice, MarketComparison,
};
pub use listing_index::ListingIndex;
pub use market_ranking::{CheapestBasketStrategy, MarketRankingStrategy};
pub use price_summary::{ItemPriceSummarizer, ItemPriceSummary, PriceRange};
