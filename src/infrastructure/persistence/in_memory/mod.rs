//! # In-Memory Stores
//!
//! In-memory implementations for local runs and tests.
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<..>>` for thread-safe access.

pub mod snapshot_provider;

pub use snapshot_provider::InMemoryPriceSnapshotProvider;
