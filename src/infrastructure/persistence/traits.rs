//! # Repository Traits
//!
//! Port definitions for the catalog data the comparison engine reads.
//!
//! The engine never fetches data itself. A [`PriceSnapshotProvider`]
//! materializes everything one comparison needs, and the application layer
//! hands that snapshot to the engine.
//!
//! # Examples
//!
//! ```ignore
//! use smart_basket::infrastructure::persistence::traits::PriceSnapshotProvider;
//!
//! async fn load(provider: &impl PriceSnapshotProvider, ids: &[ReferenceItemId]) {
//!     let snapshot = provider.load_snapshot(ids).await.unwrap();
//!     println!("{} markets", snapshot.markets.len());
//! }
//! ```

use crate::domain::entities::PriceSnapshot;
use crate::domain::value_objects::ReferenceItemId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing source could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The backing source holds malformed data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Source of current catalog and price data.
///
/// Implementations return, for the requested reference items:
/// - the matching reference item records (unknown ids are simply absent)
/// - every active market
/// - every market item listing one of the requested reference items
#[async_trait]
pub trait PriceSnapshotProvider: Send + Sync + fmt::Debug {
    /// Loads the snapshot for one comparison.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the backing store cannot be read.
    async fn load_snapshot(
        &self,
        reference_item_ids: &[ReferenceItemId],
    ) -> RepositoryResult<PriceSnapshot>;
}
