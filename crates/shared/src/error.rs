//! Money error types.
//!
//! Every failure is fatal to the operation that raised it: there are no
//! partial results and nothing is retried. Callers validate up front or
//! handle the error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, comparison, and conversion.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// An argument has the wrong shape: a non-text amount handed to the strict
    /// factory, a malformed literal, or a fractional multiplier.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A non-zero amount with an unknown currency took part in an operation
    /// that needs its currency.
    #[error("Cannot {operation} money with unknown currency (amount={amount})")]
    UnknownCurrencyOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// The offending amount, as text.
        amount: String,
    },

    /// Two non-zero values with different precisions were compared.
    #[error("Precisions don't match (this.precision={left}, argument.precision={right})")]
    PrecisionMismatch {
        /// Precision of the receiver.
        left: u32,
        /// Precision of the argument.
        right: u32,
    },

    /// A conversion was needed but the context has no converter.
    #[error("Cannot convert money from {from} to {to}: no currency converter configured")]
    ConversionUnavailable {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// The converter could not resolve the currency pair or its rate.
    #[error("Currency converter failed for {from} to {to}: {source}")]
    ConverterLookupFailure {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// The converter's own error.
        #[source]
        source: ConversionError,
    },

    /// The value does not fit the exact decimal representation.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::UnknownCurrencyOperation { .. } => "UNKNOWN_CURRENCY_OPERATION",
            Self::PrecisionMismatch { .. } => "PRECISION_MISMATCH",
            Self::ConversionUnavailable { .. } => "CONVERSION_UNAVAILABLE",
            Self::ConverterLookupFailure { .. } => "CONVERTER_LOOKUP_FAILURE",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
        }
    }
}

/// Errors reported by a currency converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The converter has no rate for this currency.
    #[error("Cannot find currency ratio (currency: {0})")]
    UnknownCurrency(String),

    /// The converter has no rate for this currency pair.
    #[error("No exchange rate found for {from} to {to}")]
    MissingRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// A configured rate is unusable (zero or negative).
    #[error("Invalid rate {rate} for currency {currency}")]
    InvalidRate {
        /// Currency the rate belongs to.
        currency: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Any other failure inside the rate provider.
    #[error("Rate provider error: {0}")]
    Provider(String),
}
