//! # Smart Basket
//!
//! Basket comparison engine for grocery price comparison across markets.
//!
//! Given a basket of reference items, the engine prices the basket at every
//! active market, reports which items each market cannot supply, ranks the
//! markets that carry the whole basket and computes the potential savings
//! of shopping at the cheapest one.
//!
//! # Architecture
//!
//! ```text
//! api/rest        axum handlers, wire DTOs, HTTP error mapping
//! application     BasketComparisonService, error hierarchy
//! domain          entities, value objects, comparison engines (pure)
//! infrastructure  PriceSnapshotProvider port and in-memory adapter
//! ```
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
//!         MarketItem::new("b-milk", "b", "milk", "Milk").with_current_price(Price::from_cents(180).unwrap()),
//!     ],
//! );
//!
//! let result = BasketComparisonEngine::default()
//!     .compare(&[ReferenceItemId::new("milk")], &snapshot)
//!     .unwrap();
//!
//! assert_eq!(result.cheapest_market_id.unwrap().as_str(), "b");
//! assert_eq!(result.potential_savings.to_string(), "0.20");
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
