//! # Domain Errors
//!
//! Errors raised by domain validation and the comparison engine.

use crate::domain::value_objects::{ArithmeticError, Currency, MarketId};
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The request itself is malformed (empty basket, unknown item).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// More than one currency was observed where one is required.
    #[error("currency mismatch in market {market_id}: {}", format_currencies(currencies))]
    CurrencyMismatch {
        /// Market whose priced items disagree on currency.
        market_id: MarketId,
        /// Distinct currencies observed, sorted.
        currencies: Vec<Currency>,
    },

    /// A price value is invalid.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A currency code is invalid.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

fn format_currencies(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(Currency::code)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(message: impl Into<String>) -> Self {
        Self::InvalidCurrency(message.into())
    }

    /// Returns true if the error was caused by the caller's input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns true if the error reflects inconsistent snapshot data.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Self::CurrencyMismatch { .. } | Self::InvalidPrice(_) | Self::InvalidCurrency(_)
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
