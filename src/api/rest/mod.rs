//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Baskets
//! - `POST /api/v1/baskets/compare` - Compare a basket across active markets
//!
//! ## Items
//! - `POST /api/v1/items/price-summary` - Per-item price spread
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use smart_basket::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(comparison_service));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    BasketRequest, ComparisonResponse, ErrorResponse, HealthResponse, PriceSummaryResponse,
};
pub use handlers::AppState;
pub use routes::create_router;
