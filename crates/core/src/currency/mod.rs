//! Currency conversion capability and the converters that ship with it.
//!
//! The money types never know where rates come from. They hold a
//! [`CurrencyConverter`] and consult it only when a non-zero amount has to
//! change currency.

pub mod conversion;
pub mod converter;
pub mod exchange;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use converter::CurrencyConverter;
pub use exchange::{ExchangeRate, ExchangeRateBook};
pub use rates::RateTable;
