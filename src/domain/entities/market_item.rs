//! # Market Item Entity
//!
//! A market's listing of a reference item, carrying its current price.
//!
//! The current price is denormalized onto the listing by the ingestion
//! pipeline; price history lives elsewhere and is never read here.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::entities::MarketItem;
//! use smart_basket::domain::value_objects::Price;
//!
//! let item = MarketItem::new("mi-1", "m-1", "milk", "Milk 1L")
//!     .with_current_price(Price::from_cents(180).unwrap())
//!     .with_original_price(Price::from_cents(200).unwrap());
//!
//! assert!(item.is_priced());
//! assert_eq!(item.discount_percentage().unwrap().to_string(), "10.00");
//! ```

use crate::domain::value_objects::{
    CheckedArithmetic, Currency, MarketId, MarketItemId, Price, ReferenceItemId, round_money,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The binding of one reference item to one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    id: MarketItemId,
    market_id: MarketId,
    reference_item_id: ReferenceItemId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    barcode: Option<String>,
    #[serde(default)]
    current_price: Option<Price>,
    #[serde(default)]
    original_price: Option<Price>,
    #[serde(default)]
    currency: Option<Currency>,
    #[serde(default)]
    is_promotion: bool,
    #[serde(default)]
    last_price_update: Option<DateTime<Utc>>,
}

impl MarketItem {
    /// Creates an unpriced listing.
    #[must_use]
    pub fn new(
        id: impl Into<MarketItemId>,
        market_id: impl Into<MarketId>,
        reference_item_id: impl Into<ReferenceItemId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            market_id: market_id.into(),
            reference_item_id: reference_item_id.into(),
            name: name.into(),
            brand: None,
            barcode: None,
            current_price: None,
            original_price: None,
            currency: None,
            is_promotion: false,
            last_price_update: None,
        }
    }

    /// Sets the current price.
    #[must_use]
    pub fn with_current_price(mut self, price: Price) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the pre-promotion price.
    #[must_use]
    pub fn with_original_price(mut self, price: Price) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Sets the quoted currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the brand label.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the barcode.
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Sets the promotion flag.
    #[must_use]
    pub fn with_promotion(mut self, is_promotion: bool) -> Self {
        self.is_promotion = is_promotion;
        self
    }

    /// Sets the time of the last price update.
    #[must_use]
    pub fn with_last_price_update(mut self, at: DateTime<Utc>) -> Self {
        self.last_price_update = Some(at);
        self
    }

    /// Returns the listing id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &MarketItemId {
        &self.id
    }

    /// Returns the owning market id.
    #[inline]
    #[must_use]
    pub fn market_id(&self) -> &MarketId {
        &self.market_id
    }

    /// Returns the reference item this listing prices.
    #[inline]
    #[must_use]
    pub fn reference_item_id(&self) -> &ReferenceItemId {
        &self.reference_item_id
    }

    /// Returns the market-specific name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brand, if any.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Returns the barcode, if any.
    #[must_use]
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    /// Returns the raw current price.
    #[must_use]
    pub fn current_price(&self) -> Option<Price> {
        self.current_price
    }

    /// Returns the pre-promotion price.
    #[must_use]
    pub fn original_price(&self) -> Option<Price> {
        self.original_price
    }

    /// Returns the stated currency, if any.
    #[must_use]
    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    /// Returns the stated currency or `default` when none is stated.
    #[must_use]
    pub fn effective_currency<'a>(&'a self, default: &'a Currency) -> &'a Currency {
        self.currency.as_ref().unwrap_or(default)
    }

    /// Returns true if the listing is on promotion.
    #[must_use]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// Returns the time of the last price update.
    #[must_use]
    pub fn last_price_update(&self) -> Option<DateTime<Utc>> {
        self.last_price_update
    }

    /// Returns the price usable for comparison.
    ///
    /// A zero price counts as "not currently priced".
    #[must_use]
    pub fn comparable_price(&self) -> Option<Price> {
        self.current_price.filter(|price| !price.is_zero())
    }

    /// Returns true if the listing has a usable current price.
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.comparable_price().is_some()
    }

    /// Percentage discount of the current price against the original price.
    ///
    /// Only present when both prices are known and the current price is
    /// strictly lower.
    #[must_use]
    pub fn discount_percentage(&self) -> Option<Decimal> {
        let current = self.comparable_price()?.get();
        let original = self.original_price?.get();
        if original <= current {
            return None;
        }
        let pct = original
            .safe_sub(current)
            .and_then(|diff| diff.safe_div(original))
            .and_then(|ratio| ratio.safe_mul(Decimal::ONE_HUNDRED))
            .ok()?;
        Some(round_money(pct))
    }
}

impl fmt::Display for MarketItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_price {
            Some(price) => write!(
                f,
                "MarketItem({} {}@{} {})",
                self.id, self.reference_item_id, self.market_id, price
            ),
            None => write!(
                f,
                "MarketItem({} {}@{} unpriced)",
                self.id, self.reference_item_id, self.market_id
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing() -> MarketItem {
        MarketItem::new("mi-1", "m-1", "milk", "Milk 1L")
    }

    #[test]
    fn unpriced_by_default() {
        let item = listing();
        assert!(!item.is_priced());
        assert!(item.comparable_price().is_none());
    }

    #[test]
    fn zero_price_is_not_comparable() {
        let item = listing().with_current_price(Price::ZERO);
        assert_eq!(item.current_price(), Some(Price::ZERO));
        assert!(!item.is_priced());
    }

    #[test]
    fn effective_currency_falls_back() {
        let default = Currency::default();
        let item = listing();
        assert_eq!(item.effective_currency(&default).code(), "JOD");

        let usd = Currency::new("USD").unwrap();
        let item = listing().with_currency(usd.clone());
        assert_eq!(item.effective_currency(&default), &usd);
    }

    #[test]
    fn discount_only_when_cheaper_than_original() {
        let item = listing()
            .with_current_price(Price::from_cents(300).unwrap())
            .with_original_price(Price::from_cents(300).unwrap());
        assert!(item.discount_percentage().is_none());

        let item = listing()
            .with_current_price(Price::from_cents(200).unwrap())
            .with_original_price(Price::from_cents(300).unwrap());
        assert_eq!(item.discount_percentage().unwrap().to_string(), "33.33");
    }

    #[test]
    fn deserializes_snapshot_record() {
        let json = r#"{
            "id": "mi-9",
            "marketId": "m-1",
            "referenceItemId": "bread",
            "name": "White Bread",
            "brand": "Bakers",
            "currentPrice": "0.85",
            "originalPrice": null,
            "currency": "jod",
            "isPromotion": true,
            "lastPriceUpdate": "2026-01-15T10:00:00Z"
        }"#;
        let item: MarketItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.current_price().unwrap().get(), Decimal::new(85, 2));
        assert_eq!(item.currency().unwrap().code(), "JOD");
        assert!(item.is_promotion());
        assert!(item.last_price_update().is_some());
        assert_eq!(item.brand(), Some("Bakers"));
    }
}
