//! # Price
//!
//! Non-negative decimal price value object.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::value_objects::Price;
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(250, 2)).unwrap();
//! assert_eq!(price.rounded().to_string(), "2.50");
//! assert!(Price::new(Decimal::new(-1, 0)).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount, kept at full decimal precision.
///
/// Rounding to display precision happens only through [`Price::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_price(format!(
                "price must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a price from an integer number of minor units (cents).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `cents` is negative.
    pub fn from_cents(cents: i64) -> DomainResult<Self> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the value rounded to two fraction digits.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round_money(self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
