//! Monetary values: immutable [`Money`] and in-place [`MutableMoney`].
//!
//! Both types wrap the same [`MoneyState`] record and run the same
//! algorithms over it; they differ only in the [`ResultSink`] that
//! materializes each result. Read-only behavior is shared through the
//! [`MonetaryValue`] trait, so either type can be the argument of the
//! other's binary operations.

pub mod context;
pub mod input;
pub mod mutable;
pub mod sink;
pub mod state;
pub mod value;

#[cfg(test)]
mod props;

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyResult};

pub use context::{MoneyContext, MoneyContextBuilder};
pub use input::AmountInput;
pub use mutable::MutableMoney;
pub use sink::{InPlace, NewValue, ResultSink};
pub use state::MoneyState;
pub use value::Money;

/// Read-only view shared by [`Money`] and [`MutableMoney`].
///
/// None of these methods change the receiver or the argument.
pub trait MonetaryValue {
    /// The value's field record.
    fn state(&self) -> &MoneyState;

    /// The context the value was created against.
    fn context(&self) -> &MoneyContext;

    /// Exact amount, at scale [`precision`](Self::precision).
    fn amount(&self) -> Decimal {
        self.state().amount()
    }

    /// Currency; empty when unknown.
    fn currency(&self) -> &Currency {
        self.state().currency()
    }

    /// Digits kept after the decimal point.
    fn precision(&self) -> u32 {
        self.state().precision()
    }

    /// Returns true if the amount is zero. Currency is ignored.
    fn is_zero(&self) -> bool {
        self.state().is_zero()
    }

    /// Returns false for the undefined marker.
    fn is_defined(&self) -> bool {
        self.state().is_defined()
    }

    /// Returns true for the undefined marker.
    fn is_undefined(&self) -> bool {
        !self.state().is_defined()
    }

    /// Sign of the amount against zero. Currency is ignored.
    fn compare_to_zero(&self) -> Ordering {
        self.state().compare_to_zero()
    }

    /// Orders this value against `other`.
    ///
    /// If either side is zero only the signs matter, whatever the
    /// currencies and precisions. Otherwise both precisions must match and
    /// `other` is converted into this currency before comparing.
    ///
    /// # Errors
    ///
    /// `PrecisionMismatch`, `UnknownCurrencyOperation`, or any conversion
    /// error.
    fn compare<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<Ordering> {
        self.state().compare(other.state(), self.context())
    }

    /// `compare(other) == Equal`.
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn is_equal<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_eq())
    }

    /// Alias of [`is_equal`](Self::is_equal).
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn eq_money<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        self.is_equal(other)
    }

    /// `compare(other) != Greater`.
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn le<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_le())
    }

    /// `compare(other) == Less`.
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn lt<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_lt())
    }

    /// `compare(other) != Less`.
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn ge<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_ge())
    }

    /// `compare(other) == Greater`.
    ///
    /// # Errors
    ///
    /// Same as [`compare`](Self::compare).
    fn gt<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_gt())
    }

    /// Identical amount, currency and precision; no conversion.
    ///
    /// An undefined value is exactly equal only to another undefined value.
    fn is_equal_exact<O: MonetaryValue + ?Sized>(&self, other: &O) -> bool {
        self.state().is_equal_exact(other.state())
    }

    /// [`is_equal_exact`](Self::is_equal_exact) after truncating both sides
    /// to `precision`. Used to accept conversion round trips.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `precision` is out of range.
    fn is_equal_exact_at<O: MonetaryValue + ?Sized>(
        &self,
        other: &O,
        precision: u32,
    ) -> MoneyResult<bool> {
        self.state().is_equal_exact_at(other.state(), precision)
    }

    /// `"{amount} {currency}"`, or `"undefined {currency}"`.
    fn to_display_string(&self) -> String {
        self.state().to_display_string()
    }
}
