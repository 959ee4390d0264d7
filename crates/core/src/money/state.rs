//! The field record behind both money types and the algorithms over it.
//!
//! Every operation here is pure: it reads one or two records and returns a
//! new one. How that record reaches the caller (a fresh `Money`, or an
//! in-place update of a `MutableMoney`) is decided by a result sink.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyError, MoneyResult};
use tracing::{debug, trace, warn};

use super::context::MoneyContext;
use super::input::AmountInput;
use crate::decimal;

/// Amount, currency, precision and definedness of a monetary value.
///
/// The amount's scale always equals `precision`. An undefined record holds
/// a zero amount, so it behaves as zero in arithmetic and comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyState {
    amount: Decimal,
    currency: Currency,
    precision: u32,
    defined: bool,
    sign: Ordering,
}

impl MoneyState {
    /// `amount` must already be at scale `precision`.
    fn new(amount: Decimal, currency: Currency, precision: u32, defined: bool) -> Self {
        Self {
            amount,
            currency,
            precision,
            defined,
            sign: decimal::signum(amount),
        }
    }

    pub(crate) fn undefined(
        ctx: &MoneyContext,
        currency: Currency,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let precision = ctx.resolve_precision(precision)?;
        Ok(Self::new(
            decimal::zero(precision),
            ctx.resolve_currency(currency),
            precision,
            false,
        ))
    }

    /// Strict construction: only text or a missing amount is accepted.
    pub(crate) fn create(
        ctx: &MoneyContext,
        input: AmountInput<'_>,
        currency: Currency,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        match input {
            AmountInput::Missing => Self::undefined(ctx, currency, precision),
            AmountInput::Literal(text) if text.is_empty() => {
                Self::undefined(ctx, currency, precision)
            }
            AmountInput::Literal(text) => {
                let precision = ctx.resolve_precision(precision)?;
                let amount = decimal::parse_literal(text, precision)?;
                Ok(Self::new(amount, ctx.resolve_currency(currency), precision, true))
            }
            other => Err(MoneyError::InvalidArgument(format!(
                "amount must be decimal text such as \"123.45\", got {}",
                other.kind()
            ))),
        }
    }

    /// Permissive construction: numbers are rendered as literals first.
    pub(crate) fn create_from_numeric(
        ctx: &MoneyContext,
        input: AmountInput<'_>,
        currency: Currency,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let places = ctx.resolve_precision(precision)?;
        match input.to_literal(places)? {
            Some(literal) => Self::create(ctx, AmountInput::Literal(&literal), currency, precision),
            None => Self::undefined(ctx, currency, precision),
        }
    }

    /// Exact amount, at scale [`precision`](Self::precision).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency; empty when unknown.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Digits kept after the decimal point.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns false for the undefined marker.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Returns true if the amount is zero at its own precision.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Ordering::Equal
    }

    /// Sign of the amount against zero. Currency is ignored.
    #[must_use]
    pub fn compare_to_zero(&self) -> Ordering {
        self.sign
    }

    pub(crate) fn add(&self, other: &Self, ctx: &MoneyContext) -> MoneyResult<Self> {
        self.combine(other, ctx, "add", decimal::add)
    }

    pub(crate) fn subtract(&self, other: &Self, ctx: &MoneyContext) -> MoneyResult<Self> {
        self.combine(other, ctx, "subtract", decimal::sub)
    }

    fn combine(
        &self,
        other: &Self,
        ctx: &MoneyContext,
        operation: &'static str,
        op: fn(Decimal, Decimal, u32) -> MoneyResult<Decimal>,
    ) -> MoneyResult<Self> {
        if self.currency.is_unknown() && !self.is_zero() {
            return Err(self.unknown_currency(operation));
        }

        let currency = if self.currency.is_unknown() {
            other.currency.clone()
        } else {
            self.currency.clone()
        };
        let precision = self.precision.max(other.precision);
        trace!(
            operation,
            left = self.precision,
            right = other.precision,
            precision,
            "Reconciled precision"
        );

        let right = other.convert_to(&currency, ctx)?;
        let amount = op(self.amount, right.amount, precision)?;

        Ok(Self::new(amount, currency, precision, true))
    }

    pub(crate) fn multiply_by_integer(&self, factor: Decimal) -> MoneyResult<Self> {
        let amount = decimal::mul_integer(self.amount, factor, self.precision)?;
        Ok(Self::new(amount, self.currency.clone(), self.precision, true))
    }

    pub(crate) fn negate(&self) -> Self {
        Self::new(
            decimal::negate(self.amount),
            self.currency.clone(),
            self.precision,
            true,
        )
    }

    /// Orders `self` against `other`.
    ///
    /// A zero on either side is compared by sign alone, ignoring currency
    /// and precision. Otherwise precisions must match and `other` is
    /// converted into this currency first.
    pub(crate) fn compare(&self, other: &Self, ctx: &MoneyContext) -> MoneyResult<Ordering> {
        if self.is_zero() {
            return Ok(other.sign.reverse());
        }
        if other.is_zero() {
            return Ok(self.sign);
        }
        if self.currency.is_unknown() {
            return Err(self.unknown_currency("compare"));
        }
        if self.precision != other.precision {
            return Err(MoneyError::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            });
        }

        let other = other.convert_to(&self.currency, ctx)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Structural equality: amount, currency and precision all identical.
    ///
    /// Undefined records are equal only to each other.
    pub(crate) fn is_equal_exact(&self, other: &Self) -> bool {
        if !self.defined || !other.defined {
            return self.defined == other.defined;
        }
        self.amount == other.amount
            && self.currency == other.currency
            && self.precision == other.precision
    }

    /// [`is_equal_exact`](Self::is_equal_exact) after truncating both sides to `precision`.
    pub(crate) fn is_equal_exact_at(&self, other: &Self, precision: u32) -> MoneyResult<bool> {
        if !self.defined || !other.defined {
            return Ok(self.defined == other.defined);
        }
        Ok(self
            .to_precision(precision)?
            .is_equal_exact(&other.to_precision(precision)?))
    }

    pub(crate) fn convert_to(&self, target: &Currency, ctx: &MoneyContext) -> MoneyResult<Self> {
        if self.currency == *target {
            return Ok(self.clone());
        }

        let Some(converter) = ctx.converter() else {
            return Err(MoneyError::ConversionUnavailable {
                from: self.currency.clone(),
                to: target.clone(),
            });
        };

        if self.is_zero() {
            debug!(from = %self.currency, to = %target, "Re-tagging zero amount");
            return Ok(Self {
                currency: target.clone(),
                ..self.clone()
            });
        }

        if self.currency.is_unknown() {
            return Err(self.unknown_currency("convert"));
        }

        debug!(from = %self.currency, to = %target, amount = %self.amount, "Converting amount");
        let converted = converter
            .convert(self.amount, &self.currency, target)
            .map_err(|source| {
                warn!(from = %self.currency, to = %target, error = %source, "Currency converter failed");
                MoneyError::ConverterLookupFailure {
                    from: self.currency.clone(),
                    to: target.clone(),
                    source,
                }
            })?;

        let amount = decimal::truncate(converted, self.precision)?;
        Ok(Self::new(amount, target.clone(), self.precision, true))
    }

    pub(crate) fn to_precision(&self, precision: u32) -> MoneyResult<Self> {
        let amount = decimal::truncate(self.amount, precision)?;
        Ok(Self::new(amount, self.currency.clone(), precision, self.defined))
    }

    /// `"{amount} {currency}"`, or `"undefined {currency}"`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let amount = if self.defined {
            self.amount.to_string()
        } else {
            "undefined".to_string()
        };
        if self.currency.is_unknown() {
            amount
        } else {
            format!("{amount} {}", self.currency)
        }
    }

    fn unknown_currency(&self, operation: &'static str) -> MoneyError {
        MoneyError::UnknownCurrencyOperation {
            operation,
            amount: self.amount.to_string(),
        }
    }
}
