//! # Domain Entities
//!
//! Catalog entities supplied by the external data layer.
//!
//! - [`ReferenceItem`]: canonical catalog product
//! - [`Market`]: seller location
//! - [`MarketItem`]: a market's listing and current price of a reference item
//! - [`PriceSnapshot`]: the three collections bundled for one comparison

pub mod market;
pub mod market_item;
pub mod reference_item;
pub mod snapshot;

pub use market::Market;
pub use market_item::MarketItem;
pub use reference_item::ReferenceItem;
pub use snapshot::PriceSnapshot;
