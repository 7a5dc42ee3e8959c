//! # Infrastructure Layer
//!
//! Adapters to the outside world.

pub mod persistence;
