//! # Application Services
//!
//! Use-case orchestration on top of the domain engines.
//!
//! - [`BasketComparisonService`]: loads a snapshot and runs a comparison

pub mod comparison_service;

pub use comparison_service::{
    BasketComparisonService, ComparisonServiceConfig, DEFAULT_SNAPSHOT_TIMEOUT_MS,
};
