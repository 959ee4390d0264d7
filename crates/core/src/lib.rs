//! Exact decimal money for Tally.
//!
//! This crate is pure computation: no I/O, no global state. Every value is
//! created against a [`money::MoneyContext`] that carries the default
//! currency, default precision, and currency converter.
//!
//! # Modules
//!
//! - `decimal` - Fixed-point primitives; truncation only, never rounding
//! - `currency` - The converter capability and the shipped converters
//! - `money` - `Money`, `MutableMoney`, and the algorithms they share

pub mod currency;
pub mod decimal;
pub mod money;

pub use currency::{CurrencyConverter, ExchangeRate, ExchangeRateBook, RateTable};
pub use money::{MonetaryValue, Money, MoneyContext, MutableMoney};
pub use tally_shared::{ConversionError, Currency, MoneyError, MoneyResult};

/// Everything needed to create and combine money.
pub mod prelude {
    pub use crate::currency::CurrencyConverter;
    pub use crate::money::{AmountInput, MonetaryValue, Money, MoneyContext, MutableMoney};
    pub use tally_shared::{Currency, MoneyError, MoneyResult};
}
