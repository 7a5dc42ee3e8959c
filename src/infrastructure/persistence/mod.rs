//! # Persistence Layer
//!
//! Ports and adapters for catalog data.
//!
//! ## Ports
//!
//! - [`PriceSnapshotProvider`]: per-request catalog snapshot
//!
//! ## Implementations
//!
//! - `in_memory`: thread-safe store, seedable from JSON

pub mod in_memory;
pub mod traits;

pub use traits::{PriceSnapshotProvider, RepositoryError, RepositoryResult};
