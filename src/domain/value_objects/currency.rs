//! # Currency
//!
//! Normalized currency code.
//!
//! Codes are trimmed and upper-cased on construction so that `"jod"` and
//! `" JOD "` compare equal. No conversion between currencies is performed
//! anywhere in the crate.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used when a listing does not state one.
pub const DEFAULT_CURRENCY_CODE: &str = "JOD";

/// A normalized, non-empty currency code.
///
/// # Examples
///
/// ```
/// use smart_basket::domain::value_objects::Currency;
///
/// let c = Currency::new(" usd ").unwrap();
/// assert_eq!(c.code(), "USD");
/// assert!(Currency::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from a code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrency` if the code is blank or
    /// contains non-alphabetic characters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = code.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_currency("currency code is empty"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_currency(format!(
                "currency code must be alphabetic, got '{trimmed}'"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY_CODE.to_string())
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
