//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides the pieces every other Tally crate agrees on:
//! - The money error taxonomy and its result alias
//! - The opaque `Currency` identifier
//! - Settings for building a money context

pub mod config;
pub mod error;
pub mod types;

pub use config::MoneySettings;
pub use error::{ConversionError, MoneyError, MoneyResult};
pub use types::Currency;
