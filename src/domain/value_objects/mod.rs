//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ReferenceItemId`], [`MarketId`], [`MarketItemId`]: opaque string identifiers
//!
//! ## Request Types
//!
//! - [`Basket`]: Deduplicated, non-empty set of requested items
//!
//! ## Monetary Types
//!
//! - [`Price`]: Non-negative decimal price
//! - [`Currency`]: Normalized currency code
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`round_money`]: Two-decimal rendering

pub mod arithmetic;
pub mod basket;
pub mod currency;
pub mod ids;
pub mod price;

pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic, MONEY_SCALE, checked_sum, round_money,
};
pub use basket::Basket;
pub use currency::{Currency, DEFAULT_CURRENCY_CODE};
pub use ids::{MarketId, MarketItemId, ReferenceItemId};
pub use price::Price;
