//! # Market Ranking
//!
//! Strategies for ordering market comparisons.
//!
//! This module provides the [`MarketRankingStrategy`] trait and the default
//! [`CheapestBasketStrategy`]. Only markets that can supply the whole basket
//! receive a rank; partial markets are listed after them, unranked.

use crate::domain::services::comparison_result::MarketComparison;
use std::cmp::Ordering;
use std::fmt;

/// Trait for market ranking strategies.
///
/// Implementations order the evaluated markets and assign ranks to the
/// fully-available ones. The output must not depend on input order.
pub trait MarketRankingStrategy: Send + Sync + fmt::Debug {
    /// Orders the comparisons and fills in `rank`.
    ///
    /// # Arguments
    ///
    /// * `comparisons` - One evaluation per compared market
    ///
    /// # Returns
    ///
    /// The same comparisons, best first.
    fn rank(&self, comparisons: Vec<MarketComparison>) -> Vec<MarketComparison>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Cheapest-basket ranking.
///
/// Orders markets as follows:
/// - fully-available markets first, by total ascending, then market id
/// - partial markets next, by available item count descending, then total
///   ascending, then market id
#[derive(Debug, Clone, Default)]
pub struct CheapestBasketStrategy;

impl CheapestBasketStrategy {
    /// Creates a new cheapest-basket strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn compare_markets(a: &MarketComparison, b: &MarketComparison) -> Ordering {
    // full availability sorts first
    b.all_items_available
        .cmp(&a.all_items_available)
        .then_with(|| {
            if a.all_items_available {
                Ordering::Equal
            } else {
                b.available_item_count.cmp(&a.available_item_count)
            }
        })
        .then_with(|| a.total_price.cmp(&b.total_price))
        .then_with(|| a.market_id.cmp(&b.market_id))
}

impl MarketRankingStrategy for CheapestBasketStrategy {
    fn rank(&self, mut comparisons: Vec<MarketComparison>) -> Vec<MarketComparison> {
        comparisons.sort_by(compare_markets);

        let mut next_rank = 1;
        for comparison in &mut comparisons {
            if comparison.all_items_available {
                comparison.rank = Some(next_rank);
                next_rank += 1;
            } else {
                comparison.rank = None;
            }
        }

        comparisons
    }

    fn name(&self) -> &'static str {
        "CheapestBasket"
    }
}
