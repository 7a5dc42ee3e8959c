//! # Application Layer
//!
//! Use cases and the error types they surface to the API layer.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InfrastructureError};
pub use services::{BasketComparisonService, ComparisonServiceConfig};
