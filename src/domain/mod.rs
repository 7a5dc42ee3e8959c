//! # Domain Layer
//!
//! Catalog entities, value objects and the basket comparison engine.
//!
//! Nothing in this layer performs I/O; every computation is a pure
//! function of the snapshot it is handed.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
