//! # REST DTOs
//!
//! Wire types for the REST API.
//!
//! Monetary amounts leave the service as decimal strings with exactly two
//! fraction digits (`"5.00"`); the domain keeps full precision until here.

use crate::domain::services::{
    BasketItem, ComparisonResult, ExcludedMarket, ItemPrice, ItemPriceSummary, MarketComparison,
};
use crate::domain::value_objects::{Price, ReferenceItemId, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body shared by the basket and price summary endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketRequest {
    /// Reference items in the basket.
    pub reference_item_ids: Vec<ReferenceItemId>,
}

/// Basket item response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItemResponse {
    /// Reference item id.
    pub reference_item_id: String,
    /// Catalog name.
    pub name: String,
    /// Catalog category.
    pub category: String,
}

impl From<BasketItem> for BasketItemResponse {
    fn from(item: BasketItem) -> Self {
        Self {
            reference_item_id: item.reference_item_id.into_inner(),
            name: item.name,
            category: item.category,
        }
    }
}

/// Per-item line response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceResponse {
    /// Reference item id.
    pub reference_item_id: String,
    /// Catalog name.
    pub reference_item_name: String,
    /// Chosen listing id.
    pub market_item_id: Option<String>,
    /// Listing name.
    pub market_item_name: Option<String>,
    /// Listing brand.
    pub brand: Option<String>,
    /// Current price; null when unavailable.
    pub price: Option<Decimal>,
    /// Pre-promotion price.
    pub original_price: Option<Decimal>,
    /// Discount in percent.
    pub discount_percentage: Option<Decimal>,
    /// ISO currency code.
    pub currency: String,
    /// Promotion flag.
    pub is_promotion: bool,
    /// Whether the market prices the item.
    pub available: bool,
}

fn money(price: Option<Price>) -> Option<Decimal> {
    price.map(|p| p.rounded())
}

impl From<ItemPrice> for ItemPriceResponse {
    fn from(line: ItemPrice) -> Self {
        Self {
            reference_item_id: line.reference_item_id.into_inner(),
            reference_item_name: line.reference_item_name,
            market_item_id: line.market_item_id.map(|id| id.into_inner()),
            market_item_name: line.market_item_name,
            brand: line.brand,
            price: money(line.price),
            original_price: money(line.original_price),
            discount_percentage: line.discount_percentage.map(round_money),
            currency: line.currency.code().to_string(),
            is_promotion: line.is_promotion,
            available: line.available,
        }
    }
}

/// Per-market response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparisonResponse {
    /// Market id.
    pub market_id: String,
    /// Market name.
    pub market_name: String,
    /// Logo reference.
    pub market_logo_url: Option<String>,
    /// Basket total at this market.
    pub total_price: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Whether every item is available.
    pub all_items_available: bool,
    /// 1-based rank among fully-available markets.
    pub rank: Option<usize>,
    /// Per-item lines.
    pub item_prices: Vec<ItemPriceResponse>,
    /// Unavailable reference item ids.
    pub missing_items: Vec<String>,
    /// Priced item count.
    pub available_item_count: usize,
    /// Basket size.
    pub total_item_count: usize,
}

impl From<MarketComparison> for MarketComparisonResponse {
    fn from(market: MarketComparison) -> Self {
        Self {
            market_id: market.market_id.into_inner(),
            market_name: market.market_name,
            market_logo_url: market.market_logo_url,
            total_price: round_money(market.total_price),
            currency: market.currency.code().to_string(),
            all_items_available: market.all_items_available,
            rank: market.rank,
            item_prices: market.item_prices.into_iter().map(Into::into).collect(),
            missing_items: market
                .missing_items
                .into_iter()
                .map(ReferenceItemId::into_inner)
                .collect(),
            available_item_count: market.available_item_count,
            total_item_count: market.total_item_count,
        }
    }
}

/// Excluded market response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedMarketResponse {
    /// Market id.
    pub market_id: String,
    /// Market name.
    pub market_name: String,
    /// Exclusion reason.
    pub reason: String,
}

impl From<ExcludedMarket> for ExcludedMarketResponse {
    fn from(market: ExcludedMarket) -> Self {
        Self {
            market_id: market.market_id.into_inner(),
            market_name: market.market_name,
            reason: market.reason,
        }
    }
}

/// Basket comparison response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    /// Requested items in first-seen order.
    pub basket_items: Vec<BasketItemResponse>,
    /// Compared markets, best first.
    pub market_comparisons: Vec<MarketComparisonResponse>,
    /// Markets left out with their reason.
    pub excluded_markets: Vec<ExcludedMarketResponse>,
    /// Cheapest fully-available market.
    pub cheapest_market_id: Option<String>,
    /// Its name.
    pub cheapest_market_name: Option<String>,
    /// Lowest fully-available total.
    pub lowest_total: Decimal,
    /// Highest fully-available total.
    pub highest_total: Decimal,
    /// Highest minus lowest total.
    pub potential_savings: Decimal,
}

impl From<ComparisonResult> for ComparisonResponse {
    /// Savings are taken from the rendered totals so that the response obeys
    /// `potentialSavings == highestTotal - lowestTotal` to the cent.
    fn from(result: ComparisonResult) -> Self {
        let lowest_total = round_money(result.lowest_total);
        let highest_total = round_money(result.highest_total);
        Self {
            basket_items: result.basket_items.into_iter().map(Into::into).collect(),
            market_comparisons: result
                .market_comparisons
                .into_iter()
                .map(Into::into)
                .collect(),
            excluded_markets: result.excluded_markets.into_iter().map(Into::into).collect(),
            cheapest_market_id: result.cheapest_market_id.map(|id| id.into_inner()),
            cheapest_market_name: result.cheapest_market_name,
            lowest_total,
            highest_total,
            potential_savings: highest_total.saturating_sub(lowest_total),
        }
    }
}

/// One item of the price summary response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceSummaryResponse {
    /// Reference item id.
    pub reference_item_id: String,
    /// Catalog name.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Lowest current price.
    pub min_price: Option<Decimal>,
    /// Highest current price.
    pub max_price: Option<Decimal>,
    /// Market with the lowest price.
    pub cheapest_market_id: Option<String>,
    /// Its name.
    pub cheapest_market_name: Option<String>,
    /// Number of active markets pricing the item.
    pub priced_market_count: usize,
    /// ISO currency code of the range.
    pub currency: Option<String>,
    /// Why no range was computed.
    pub flagged_reason: Option<String>,
}

impl From<ItemPriceSummary> for ItemPriceSummaryResponse {
    fn from(summary: ItemPriceSummary) -> Self {
        let range = summary.price_range;
        Self {
            reference_item_id: summary.reference_item_id.into_inner(),
            name: summary.name,
            category: summary.category,
            min_price: range.as_ref().map(|r| r.min_price.rounded()),
            max_price: range.as_ref().map(|r| r.max_price.rounded()),
            cheapest_market_id: range
                .as_ref()
                .map(|r| r.cheapest_market_id.as_str().to_string()),
            cheapest_market_name: range.as_ref().map(|r| r.cheapest_market_name.clone()),
            priced_market_count: range.as_ref().map_or(0, |r| r.priced_market_count),
            currency: range.map(|r| r.currency.code().to_string()),
            flagged_reason: summary.flagged_reason,
        }
    }
}

/// Price summary response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummaryResponse {
    /// Summaries in request order.
    pub items: Vec<ItemPriceSummaryResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Currency, MarketId};

    fn market(total: Decimal) -> MarketComparison {
        MarketComparison {
            market_id: MarketId::new("a"),
            market_name: "Market A".to_string(),
            market_logo_url: None,
            total_price: total,
            currency: Currency::default(),
            all_items_available: true,
            rank: Some(1),
            item_prices: vec![ItemPrice {
                reference_item_id: ReferenceItemId::new("milk"),
                reference_item_name: "Milk".to_string(),
                market_item_id: None,
                market_item_name: None,
                brand: None,
                price: None,
                original_price: None,
                discount_percentage: None,
                currency: Currency::default(),
                is_promotion: false,
                available: false,
            }],
            missing_items: vec![ReferenceItemId::new("milk")],
            available_item_count: 0,
            total_item_count: 1,
        }
    }

    #[test]
    fn money_renders_two_fraction_digits() {
        let response = MarketComparisonResponse::from(market(Decimal::new(5, 0)));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalPrice"], "5.00");
    }

    #[test]
    fn money_rounds_half_away_from_zero() {
        let response = MarketComparisonResponse::from(market(Decimal::new(12345, 3)));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalPrice"], "12.35");
    }

    #[test]
    fn missing_line_price_is_null() {
        let response = MarketComparisonResponse::from(market(Decimal::ZERO));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["itemPrices"][0]["price"].is_null());
        assert_eq!(json["itemPrices"][0]["currency"], "JOD");
        assert_eq!(json["missingItems"][0], "milk");
    }

    #[test]
    fn rendered_savings_match_rendered_totals() {
        use crate::domain::entities::{Market, MarketItem, PriceSnapshot, ReferenceItem};
        use crate::domain::services::BasketComparisonEngine;

        let listing = |market: &str, mills: i64| {
            MarketItem::new(format!("{market}-milk"), market, "milk", "Milk")
                .with_current_price(Price::new(Decimal::new(mills, 3)).unwrap())
        };
        let snapshot = PriceSnapshot::new(
            vec![ReferenceItem::new("milk", "Milk", "Dairy")],
            vec![Market::new("a", "Market A"), Market::new("b", "Market B")],
            vec![listing("a", 1004), listing("b", 995)],
        );
        let result = BasketComparisonEngine::default()
            .compare(&[ReferenceItemId::new("milk")], &snapshot)
            .unwrap();

        let response = ComparisonResponse::from(result);

        assert_eq!(response.lowest_total, Decimal::new(100, 2));
        assert_eq!(response.highest_total, Decimal::new(100, 2));
        assert_eq!(
            response.potential_savings,
            response.highest_total - response.lowest_total
        );
        assert_eq!(response.market_comparisons[0].total_price, response.lowest_total);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["potentialSavings"], "0.00");
    }

    #[test]
    fn savings_without_full_markets_render_as_zero() {
        let response = ComparisonResponse::from(ComparisonResult {
            basket_items: Vec::new(),
            market_comparisons: vec![market(Decimal::new(5, 0))],
            excluded_markets: Vec::new(),
            cheapest_market_id: None,
            cheapest_market_name: None,
            lowest_total: Decimal::ZERO,
            highest_total: Decimal::ZERO,
            potential_savings: Decimal::ZERO,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["lowestTotal"], "0.00");
        assert_eq!(json["potentialSavings"], "0.00");
    }

    #[test]
    fn request_uses_camel_case() {
        let request: BasketRequest =
            serde_json::from_str(r#"{"referenceItemIds": ["milk", "bread"]}"#).unwrap();
        assert_eq!(request.reference_item_ids.len(), 2);
    }

    #[test]
    fn health_reports_version() {
        let health = HealthResponse::default();
        assert_eq!(health.status, "ok");
        assert!(!health.version.is_empty());
    }
}
