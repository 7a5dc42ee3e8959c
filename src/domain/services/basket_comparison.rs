//! # Basket Comparison Engine
//!
//! Prices a basket of reference items at every active market and picks the
//! cheapest market that can supply the whole basket.
//!
//! The engine is a pure computation over a [`PriceSnapshot`]: it performs no
//! I/O and keeps no state between calls, so one instance can serve any
//! number of concurrent requests.
//!
//! # Comparability
//!
//! A market missing even one requested item never competes for "cheapest":
//! its partial total is reported, but `lowest_total`, `highest_total` and
//! `potential_savings` are computed over fully-available markets only.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::entities::{Market, MarketItem, PriceSnapshot, ReferenceItem};
//! use smart_basket::domain::services::BasketComparisonEngine;
//! use smart_basket::domain::value_objects::{Price, ReferenceItemId};
//!
//! let snapshot = PriceSnapshot::new(
//!     vec![ReferenceItem::new("milk", "Milk", "Dairy")],
//!     vec![Market::new("a", "Market A"), Market::new("b", "Market B")],
//!     vec![
//!         MarketItem::new("a-milk", "a", "milk", "Milk").with_current_price(Price::from_cents(200).unwrap()),
//!         MarketItem::new("b-milk", "b", "milk", "Milk").with_current_price(Price::from_cents(150).unwrap()),
//!     ],
//! );
//!
//! let engine = BasketComparisonEngine::default();
//! let result = engine.compare(&[ReferenceItemId::new("milk")], &snapshot).unwrap();
//! assert_eq!(result.cheapest_market_id.unwrap().as_str(), "b");
//! assert_eq!(result.potential_savings.to_string(), "0.50");
//! ```

use crate::domain::entities::{Market, MarketItem, PriceSnapshot, ReferenceItem};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::comparison_result::{
    BasketItem, ComparisonResult, ExcludedMarket, ItemPrice, MarketComparison,
};
use crate::domain::services::listing_index::ListingIndex;
use crate::domain::services::market_ranking::{CheapestBasketStrategy, MarketRankingStrategy};
use crate::domain::value_objects::{
    Basket, CheckedArithmetic, Currency, MarketId, ReferenceItemId, checked_sum,
};
use rust_decimal::Decimal;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

/// Stateless engine comparing basket totals across markets.
#[derive(Debug, Clone)]
pub struct BasketComparisonEngine {
    default_currency: Currency,
    ranking_strategy: Arc<dyn MarketRankingStrategy>,
}

impl Default for BasketComparisonEngine {
    fn default() -> Self {
        Self::new(Currency::default(), Arc::new(CheapestBasketStrategy::new()))
    }
}

impl BasketComparisonEngine {
    /// Creates an engine.
    ///
    /// # Arguments
    ///
    /// * `default_currency` - Currency assumed for listings that state none
    /// * `ranking_strategy` - Ordering applied to the market comparisons
    #[must_use]
    pub fn new(default_currency: Currency, ranking_strategy: Arc<dyn MarketRankingStrategy>) -> Self {
        Self {
            default_currency,
            ranking_strategy,
        }
    }

    /// Creates an engine with the default ranking and the given currency.
    #[must_use]
    pub fn with_currency(default_currency: Currency) -> Self {
        Self::new(default_currency, Arc::new(CheapestBasketStrategy::new()))
    }

    /// Returns the default currency.
    #[must_use]
    pub fn default_currency(&self) -> &Currency {
        &self.default_currency
    }

    /// Returns the ranking strategy name.
    #[must_use]
    pub fn ranking_strategy_name(&self) -> &'static str {
        self.ranking_strategy.name()
    }

    /// Compares a basket against a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `reference_item_ids` is empty,
    /// names an unknown reference item, or names only inactive ones.
    pub fn compare(
        &self,
        reference_item_ids: &[ReferenceItemId],
        snapshot: &PriceSnapshot,
    ) -> DomainResult<ComparisonResult> {
        self.compare_parts(
            reference_item_ids,
            &snapshot.market_items,
            &snapshot.markets,
            &snapshot.reference_items,
        )
    }

    /// Compares a basket against separately supplied collections.
    ///
    /// Markets whose priced items disagree on currency are not compared;
    /// they are reported in `excluded_markets` with the reason.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `reference_item_ids` is empty,
    /// names an unknown reference item, or names only inactive ones.
    pub fn compare_parts(
        &self,
        reference_item_ids: &[ReferenceItemId],
        market_items: &[MarketItem],
        markets: &[Market],
        reference_items: &[ReferenceItem],
    ) -> DomainResult<ComparisonResult> {
        let basket = Basket::new(reference_item_ids.iter().cloned())?;
        let requested = basket.resolve(reference_items)?;

        let wanted: HashSet<&ReferenceItemId> = basket.item_ids().iter().collect();
        let listings = ListingIndex::build(market_items, &wanted);

        let mut comparisons = Vec::new();
        let mut excluded_markets = Vec::new();

        for market in active_markets_by_id(markets).into_values() {
            match self.evaluate_market(market, &requested, &listings) {
                Ok(comparison) => comparisons.push(comparison),
                Err(err) => {
                    tracing::warn!(
                        market_id = %market.id(),
                        error = %err,
                        "market excluded from basket comparison"
                    );
                    excluded_markets.push(ExcludedMarket {
                        market_id: market.id().clone(),
                        market_name: market.name().to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let market_comparisons = self.ranking_strategy.rank(comparisons);
        let Summary {
            cheapest,
            fully_available,
            lowest_total,
            highest_total,
            potential_savings,
        } = summarize(&market_comparisons)?;

        let (cheapest_market_id, cheapest_market_name) = match cheapest {
            Some(m) => (Some(m.market_id.clone()), Some(m.market_name.clone())),
            None => (None, None),
        };

        tracing::debug!(
            basket_size = basket.len(),
            markets = market_comparisons.len(),
            fully_available,
            excluded = excluded_markets.len(),
            duplicate_listings = listings.duplicate_count(),
            cheapest = cheapest_market_id.as_ref().map_or("none", MarketId::as_str),
            "basket comparison computed"
        );

        Ok(ComparisonResult {
            basket_items: requested
                .iter()
                .map(|item| BasketItem {
                    reference_item_id: item.id().clone(),
                    name: item.name().to_string(),
                    category: item.category().to_string(),
                })
                .collect(),
            excluded_markets,
            cheapest_market_id,
            cheapest_market_name,
            lowest_total,
            highest_total,
            potential_savings,
            market_comparisons,
        })
    }

    /// Evaluates the basket at one market.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CurrencyMismatch` if the summed items are quoted
    /// in more than one currency, or an arithmetic error on overflow.
    pub fn evaluate_market(
        &self,
        market: &Market,
        requested: &[&ReferenceItem],
        listings: &ListingIndex<'_>,
    ) -> DomainResult<MarketComparison> {
        let mut lines = Vec::with_capacity(requested.len());
        let mut currencies = BTreeSet::new();

        for item in requested {
            let listing = listings.get(market.id(), item.id());
            let price = listing.and_then(MarketItem::comparable_price);
            let currency = listing
                .filter(|_| price.is_some())
                .map(|l| l.effective_currency(&self.default_currency).clone());
            if let Some(currency) = &currency {
                currencies.insert(currency.clone());
            }
            lines.push((*item, listing, price, currency));
        }

        if currencies.len() > 1 {
            return Err(DomainError::CurrencyMismatch {
                market_id: market.id().clone(),
                currencies: currencies.into_iter().collect(),
            });
        }
        let market_currency = currencies
            .into_iter()
            .next()
            .unwrap_or_else(|| self.default_currency.clone());

        let total_price = checked_sum(
            lines
                .iter()
                .filter_map(|(_, _, price, _)| price.map(|p| p.get())),
        )?;

        let mut item_prices = Vec::with_capacity(lines.len());
        let mut missing_items = Vec::new();

        for (item, listing, price, currency) in lines {
            let available = price.is_some();
            if !available {
                missing_items.push(item.id().clone());
            }
            item_prices.push(ItemPrice {
                reference_item_id: item.id().clone(),
                reference_item_name: item.name().to_string(),
                market_item_id: listing.map(|l| l.id().clone()),
                market_item_name: listing.map(|l| l.name().to_string()),
                brand: listing.and_then(|l| l.brand().map(str::to_string)),
                price,
                original_price: listing.and_then(MarketItem::original_price),
                discount_percentage: listing.and_then(MarketItem::discount_percentage),
                currency: currency.unwrap_or_else(|| market_currency.clone()),
                is_promotion: listing.is_some_and(MarketItem::is_promotion),
                available,
            });
        }

        let total_item_count = requested.len();
        let available_item_count = total_item_count - missing_items.len();

        Ok(MarketComparison {
            market_id: market.id().clone(),
            market_name: market.name().to_string(),
            market_logo_url: market.logo_url().map(str::to_string),
            total_price,
            currency: market_currency,
            all_items_available: missing_items.is_empty(),
            rank: None,
            item_prices,
            missing_items,
            available_item_count,
            total_item_count,
        })
    }
}

/// Compares a basket using the default engine.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if `reference_item_ids` is empty,
/// names an unknown reference item, or names only inactive ones.
pub fn compare_baskets(
    reference_item_ids: &[ReferenceItemId],
    market_items: &[MarketItem],
    markets: &[Market],
    reference_items: &[ReferenceItem],
) -> DomainResult<ComparisonResult> {
    BasketComparisonEngine::default().compare_parts(
        reference_item_ids,
        market_items,
        markets,
        reference_items,
    )
}

/// Active markets keyed by id. A repeated id keeps the record with the
/// lowest name, whatever the snapshot order.
pub(crate) fn active_markets_by_id(markets: &[Market]) -> BTreeMap<&MarketId, &Market> {
    let mut by_id: BTreeMap<&MarketId, &Market> = BTreeMap::new();
    for market in markets.iter().filter(|m| m.is_active()) {
        match by_id.entry(market.id()) {
            Entry::Vacant(slot) => {
                slot.insert(market);
            }
            Entry::Occupied(mut slot) => {
                tracing::warn!(market_id = %market.id(), "duplicate market record in snapshot");
                if market_key(market) < market_key(slot.get()) {
                    slot.insert(market);
                }
            }
        }
    }
    by_id
}

fn market_key(market: &Market) -> (&str, Option<&str>) {
    (market.name(), market.logo_url())
}

struct Summary<'a> {
    cheapest: Option<&'a MarketComparison>,
    fully_available: usize,
    lowest_total: Decimal,
    highest_total: Decimal,
    potential_savings: Decimal,
}

fn summarize(comparisons: &[MarketComparison]) -> DomainResult<Summary<'_>> {
    let full: Vec<&MarketComparison> = comparisons
        .iter()
        .filter(|m| m.all_items_available)
        .collect();

    let cheapest = full
        .iter()
        .copied()
        .min_by(|a, b| {
            a.total_price
                .cmp(&b.total_price)
                .then_with(|| a.market_id.cmp(&b.market_id))
        });
    let lowest_total = cheapest.map_or(Decimal::ZERO, |m| m.total_price);
    let highest_total = full
        .iter()
        .map(|m| m.total_price)
        .max()
        .unwrap_or(Decimal::ZERO);

    let potential_savings = if full.len() >= 2 {
        highest_total.safe_sub(lowest_total)?
    } else {
        Decimal::ZERO
    };

    let currencies: BTreeSet<&Currency> = full.iter().map(|m| &m.currency).collect();
    if currencies.len() > 1 {
        tracing::warn!(
            currencies = ?currencies.iter().map(|c| c.code()).collect::<Vec<_>>(),
            "fully-available markets quote different currencies; totals are not converted"
        );
    }

    Ok(Summary {
        cheapest,
        fully_available: full.len(),
        lowest_total,
        highest_total,
        potential_savings,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Price;

    fn price(cents: i64) -> Price {
        Price::from_cents(cents).unwrap()
    }

    fn listing(market: &str, item: &str, cents: i64) -> MarketItem {
        MarketItem::new(format!("{market}-{item}"), market, item, item.to_uppercase())
            .with_current_price(price(cents))
    }

    fn ids(raw: &[&str]) -> Vec<ReferenceItemId> {
        raw.iter().map(|s| ReferenceItemId::new(*s)).collect()
    }

    fn catalog() -> Vec<ReferenceItem> {
        vec![
            ReferenceItem::new("milk", "Milk", "Dairy"),
            ReferenceItem::new("bread", "Bread", "Bakery"),
            ReferenceItem::new("eggs", "Eggs", "Dairy"),
        ]
    }

    #[test]
    fn partial_market_never_cheapest() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A"), Market::new("B", "Market B")],
            vec![
                listing("A", "milk", 200),
                listing("A", "bread", 300),
                listing("B", "milk", 150),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread"]), &snapshot)
            .unwrap();

        assert_eq!(result.cheapest_market_id, Some(MarketId::new("A")));
        assert_eq!(result.cheapest_market_name.as_deref(), Some("Market A"));
        assert_eq!(result.lowest_total, Decimal::new(500, 2));
        assert_eq!(result.highest_total, Decimal::new(500, 2));
        assert_eq!(result.potential_savings, Decimal::ZERO);

        let b = result.market(&MarketId::new("B")).unwrap();
        assert!(!b.all_items_available);
        assert_eq!(b.missing_items, ids(&["bread"]));
        assert_eq!(b.total_price, Decimal::new(150, 2));
        assert_eq!(b.available_item_count, 1);
        assert_eq!(b.total_item_count, 2);
        assert_eq!(b.rank, None);
    }

    #[test]
    fn savings_between_two_full_markets() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A"), Market::new("B", "Market B")],
            vec![listing("A", "milk", 1000), listing("B", "milk", 800)],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk"]), &snapshot)
            .unwrap();

        assert_eq!(result.cheapest_market_id, Some(MarketId::new("B")));
        assert_eq!(result.potential_savings, Decimal::new(200, 2));
        assert_eq!(result.market_comparisons[0].market_id.as_str(), "B");
        assert_eq!(result.market_comparisons[0].rank, Some(1));
        assert_eq!(result.market_comparisons[1].rank, Some(2));
    }

    #[test]
    fn no_full_market_reports_zeroes() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A"), Market::new("B", "Market B")],
            vec![listing("A", "milk", 200), listing("B", "bread", 300)],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread"]), &snapshot)
            .unwrap();

        assert!(result.cheapest_market_id.is_none());
        assert!(result.cheapest_market_name.is_none());
        assert_eq!(result.lowest_total, Decimal::ZERO);
        assert_eq!(result.highest_total, Decimal::ZERO);
        assert_eq!(result.potential_savings, Decimal::ZERO);
        assert_eq!(result.market_comparisons.len(), 2);
    }

    #[test]
    fn empty_basket_is_invalid_input() {
        let err = BasketComparisonEngine::default()
            .compare(&[], &PriceSnapshot::default())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn unknown_item_is_invalid_input() {
        let snapshot = PriceSnapshot::new(catalog(), vec![Market::new("A", "A")], vec![]);
        let err = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "caviar"]), &snapshot)
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("caviar"));
    }

    #[test]
    fn inactive_markets_are_ignored_even_when_cheaper() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![
                Market::new("A", "Market A"),
                Market::new("Z", "Closed").with_active(false),
            ],
            vec![listing("A", "milk", 300), listing("Z", "milk", 10)],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk"]), &snapshot)
            .unwrap();

        assert_eq!(result.market_comparisons.len(), 1);
        assert_eq!(result.cheapest_market_id, Some(MarketId::new("A")));
    }

    #[test]
    fn inactive_reference_items_are_dropped() {
        let mut items = catalog();
        items.push(ReferenceItem::new("old", "Old Stock", "Dairy").with_active(false));
        let snapshot = PriceSnapshot::new(
            items,
            vec![Market::new("A", "Market A")],
            vec![listing("A", "milk", 200), listing("A", "old", 50)],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "old"]), &snapshot)
            .unwrap();

        assert_eq!(result.basket_items.len(), 1);
        let a = &result.market_comparisons[0];
        assert!(a.all_items_available);
        assert_eq!(a.total_item_count, 1);
        assert_eq!(a.total_price, Decimal::new(200, 2));
    }

    #[test]
    fn only_inactive_reference_items_is_invalid_input() {
        let mut items = catalog();
        items.push(ReferenceItem::new("old", "Old Stock", "Dairy").with_active(false));
        let snapshot = PriceSnapshot::new(items, vec![Market::new("A", "A")], vec![]);

        let err = BasketComparisonEngine::default()
            .compare(&ids(&["old"]), &snapshot)
            .unwrap_err();

        assert!(err.is_invalid_input());
    }

    #[test]
    fn duplicate_market_records_resolve_regardless_of_order() {
        let markets = vec![
            Market::new("A", "Market A (old)"),
            Market::new("A", "Market A"),
        ];
        let mut reversed = markets.clone();
        reversed.reverse();

        let picked: Vec<String> = [markets, reversed]
            .iter()
            .map(|markets| {
                let snapshot =
                    PriceSnapshot::new(catalog(), markets.clone(), vec![listing("A", "milk", 100)]);
                let result = BasketComparisonEngine::default()
                    .compare(&ids(&["milk"]), &snapshot)
                    .unwrap();
                assert_eq!(result.market_comparisons.len(), 1);
                result.market_comparisons[0].market_name.clone()
            })
            .collect();

        assert_eq!(picked, vec!["Market A", "Market A"]);
    }

    #[test]
    fn duplicate_ids_collapse() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![listing("A", "milk", 250)],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "milk", "milk"]), &snapshot)
            .unwrap();

        assert_eq!(result.basket_items.len(), 1);
        assert_eq!(result.market_comparisons[0].total_price, Decimal::new(250, 2));
        assert_eq!(result.market_comparisons[0].total_item_count, 1);
    }

    #[test]
    fn unpriced_and_zero_priced_listings_are_missing() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![
                MarketItem::new("a-milk", "A", "milk", "Fresh Milk").with_brand("Dairyland"),
                MarketItem::new("a-bread", "A", "bread", "Bread").with_current_price(Price::ZERO),
                listing("A", "eggs", 120),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread", "eggs"]), &snapshot)
            .unwrap();

        let a = &result.market_comparisons[0];
        assert_eq!(a.missing_items, ids(&["milk", "bread"]));
        assert_eq!(a.total_price, Decimal::new(120, 2));

        let milk = &a.item_prices[0];
        assert!(!milk.available);
        assert!(milk.price.is_none());
        assert_eq!(milk.market_item_name.as_deref(), Some("Fresh Milk"));
        assert_eq!(milk.brand.as_deref(), Some("Dairyland"));
        assert_eq!(milk.currency.code(), "JOD");
    }

    #[test]
    fn tie_breaks_by_lowest_market_id() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![
                Market::new("m-2", "Second"),
                Market::new("m-1", "First"),
                Market::new("m-3", "Third"),
            ],
            vec![
                listing("m-2", "milk", 100),
                listing("m-1", "milk", 100),
                listing("m-3", "milk", 100),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk"]), &snapshot)
            .unwrap();

        assert_eq!(result.cheapest_market_id, Some(MarketId::new("m-1")));
        assert_eq!(result.potential_savings, Decimal::ZERO);
    }

    #[test]
    fn currency_mismatch_excludes_only_that_market() {
        let eur = Currency::new("EUR").unwrap();
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A"), Market::new("B", "Market B")],
            vec![
                listing("A", "milk", 200),
                listing("A", "bread", 300).with_currency(eur),
                listing("B", "milk", 250),
                listing("B", "bread", 250),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread"]), &snapshot)
            .unwrap();

        assert_eq!(result.market_comparisons.len(), 1);
        assert_eq!(result.excluded_markets.len(), 1);
        let excluded = &result.excluded_markets[0];
        assert_eq!(excluded.market_id.as_str(), "A");
        assert!(excluded.reason.contains("currency mismatch"));
        assert_eq!(result.cheapest_market_id, Some(MarketId::new("B")));
    }

    #[test]
    fn evaluate_market_surfaces_currency_mismatch() {
        let usd = Currency::new("USD").unwrap();
        let catalog = catalog();
        let items = vec![
            listing("A", "milk", 200).with_currency(usd),
            listing("A", "bread", 300),
        ];
        let basket = Basket::new(ids(&["milk", "bread"])).unwrap();
        let requested = basket.resolve(&catalog).unwrap();
        let wanted: HashSet<&ReferenceItemId> = basket.item_ids().iter().collect();
        let listings = ListingIndex::build(&items, &wanted);

        let err = BasketComparisonEngine::default()
            .evaluate_market(&Market::new("A", "Market A"), &requested, &listings)
            .unwrap_err();

        assert!(matches!(err, DomainError::CurrencyMismatch { .. }));
    }

    #[test]
    fn stated_currency_applies_to_market() {
        let usd = Currency::new("usd").unwrap();
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![listing("A", "milk", 200).with_currency(usd.clone())],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread"]), &snapshot)
            .unwrap();

        let a = &result.market_comparisons[0];
        assert_eq!(a.currency, usd);
        // the missing bread line is reported in the market's currency
        assert_eq!(a.item_prices[1].currency, usd);
    }

    #[test]
    fn promotion_details_are_carried() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![
                listing("A", "milk", 150)
                    .with_original_price(price(200))
                    .with_promotion(true),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk"]), &snapshot)
            .unwrap();

        let line = &result.market_comparisons[0].item_prices[0];
        assert!(line.is_promotion);
        assert_eq!(line.original_price, Some(price(200)));
        assert_eq!(line.discount_percentage, Some(Decimal::new(2500, 2)));
    }

    #[test]
    fn sums_are_exact() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![
                MarketItem::new("1", "A", "milk", "Milk")
                    .with_current_price(Price::new(Decimal::new(1, 1)).unwrap()),
                MarketItem::new("2", "A", "bread", "Bread")
                    .with_current_price(Price::new(Decimal::new(2, 1)).unwrap()),
            ],
        );

        let result = BasketComparisonEngine::default()
            .compare(&ids(&["milk", "bread"]), &snapshot)
            .unwrap();

        assert_eq!(result.lowest_total, Decimal::new(3, 1));
    }

    #[test]
    fn basket_items_keep_first_seen_order() {
        let snapshot = PriceSnapshot::new(catalog(), vec![], vec![]);
        let result = BasketComparisonEngine::default()
            .compare(&ids(&["eggs", "milk", "eggs"]), &snapshot)
            .unwrap();

        let names: Vec<&str> = result.basket_items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Milk"]);
        assert!(result.market_comparisons.is_empty());
    }

    #[test]
    fn default_engine_reports_its_ranking() {
        let engine = BasketComparisonEngine::default();
        assert_eq!(engine.ranking_strategy_name(), CheapestBasketStrategy::new().name());
        assert_eq!(engine.default_currency().code(), "JOD");
    }

    #[test]
    fn free_function_matches_engine() {
        let snapshot = PriceSnapshot::new(
            catalog(),
            vec![Market::new("A", "Market A")],
            vec![listing("A", "milk", 200)],
        );
        let via_fn = compare_baskets(
            &ids(&["milk"]),
            &snapshot.market_items,
            &snapshot.markets,
            &snapshot.reference_items,
        )
        .unwrap();
        let via_engine = BasketComparisonEngine::default()
            .compare(&ids(&["milk"]), &snapshot)
            .unwrap();
        assert_eq!(via_fn, via_engine);
    }
}
