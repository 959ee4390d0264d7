//! Immutable money.

use std::fmt;

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyResult};

use super::context::MoneyContext;
use super::input::AmountInput;
use super::sink::{NewValue, ResultSink};
use super::state::MoneyState;
use super::MonetaryValue;

/// An amount tagged with a currency and a fixed decimal precision.
///
/// `Money` is a value: every operation returns a new instance and leaves the
/// receiver untouched. Equality (`==`) is exact equality: same amount, same
/// currency, same precision, no conversion.
///
/// # Example
///
/// ```
/// use tally_core::money::{MonetaryValue, Money, MoneyContext};
///
/// let ctx = MoneyContext::default();
/// let a = Money::create(&ctx, "-10.50", "USD", Some(2)).unwrap();
/// let b = Money::create(&ctx, "12.55987", "USD", Some(4)).unwrap();
///
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.to_display_string(), "2.0598 USD");
/// assert_eq!(sum.precision(), 4);
/// ```
#[derive(Clone)]
pub struct Money {
    state: MoneyState,
    context: MoneyContext,
}

impl Money {
    pub(crate) fn from_parts(state: MoneyState, context: MoneyContext) -> Self {
        Self { state, context }
    }

    /// Creates money from a decimal literal.
    ///
    /// An empty or missing amount yields an undefined value. Fractional
    /// digits beyond `precision` are dropped, never rounded. An empty
    /// currency falls back to the context default; a missing precision to
    /// the context's default precision.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a numeric or malformed amount and
    /// `AmountOutOfRange` when the literal cannot be held exactly.
    pub fn create<'a>(
        ctx: &MoneyContext,
        amount: impl Into<AmountInput<'a>>,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state = MoneyState::create(ctx, amount.into(), currency.into(), precision)?;
        Ok(NewValue(ctx).materialize(state))
    }

    /// Like [`create`](Self::create), but integers and floats are accepted.
    ///
    /// Numbers are rendered with `precision` fractional digits before
    /// parsing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a non-finite float or malformed text.
    pub fn create_from_numeric<'a>(
        ctx: &MoneyContext,
        amount: impl Into<AmountInput<'a>>,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state =
            MoneyState::create_from_numeric(ctx, amount.into(), currency.into(), precision)?;
        Ok(NewValue(ctx).materialize(state))
    }

    /// Creates the undefined marker: zero for all arithmetic, but not a
    /// defined zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `precision` is out of range.
    pub fn undefined(
        ctx: &MoneyContext,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state = MoneyState::undefined(ctx, currency.into(), precision)?;
        Ok(NewValue(ctx).materialize(state))
    }

    /// Adds `other`, converting it into this currency first.
    ///
    /// The result has the larger of the two precisions. If this currency is
    /// unknown (only allowed for a zero amount) the result takes `other`'s.
    ///
    /// # Errors
    ///
    /// `UnknownCurrencyOperation` if this is a non-zero amount of unknown
    /// currency, or any conversion error.
    pub fn add<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<Self> {
        let state = self.state.add(other.state(), &self.context)?;
        Ok(NewValue(&self.context).materialize(state))
    }

    /// Subtracts `other` under the same rules as [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn subtract<O: MonetaryValue + ?Sized>(&self, other: &O) -> MoneyResult<Self> {
        let state = self.state.subtract(other.state(), &self.context)?;
        Ok(NewValue(&self.context).materialize(state))
    }

    /// Multiplies by a whole number, truncating to this precision.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `factor` has a fractional part.
    pub fn multiply_by_integer(&self, factor: impl Into<Decimal>) -> MoneyResult<Self> {
        let state = self.state.multiply_by_integer(factor.into())?;
        Ok(NewValue(&self.context).materialize(state))
    }

    /// Returns the amount with its sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        NewValue(&self.context).materialize(self.state.negate())
    }

    /// Converts into `currency` through the context's converter.
    ///
    /// Zero amounts are re-tagged without consulting the converter.
    ///
    /// # Errors
    ///
    /// `ConversionUnavailable`, `UnknownCurrencyOperation` or
    /// `ConverterLookupFailure`.
    pub fn convert_to(&self, currency: impl Into<Currency>) -> MoneyResult<Self> {
        let state = self.state.convert_to(&currency.into(), &self.context)?;
        Ok(NewValue(&self.context).materialize(state))
    }

    /// Truncates (or zero-extends) the amount to `precision` digits.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `precision` is out of range.
    pub fn to_precision(&self, precision: u32) -> MoneyResult<Self> {
        let state = self.state.to_precision(precision)?;
        Ok(NewValue(&self.context).materialize(state))
    }
}

impl MonetaryValue for Money {
    fn state(&self) -> &MoneyState {
        &self.state
    }

    fn context(&self) -> &MoneyContext {
        &self.context
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.state.is_equal_exact(&other.state)
    }
}

impl Eq for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state.to_display_string())
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.state.amount())
            .field("currency", self.state.currency())
            .field("precision", &self.state.precision())
            .field("defined", &self.state.is_defined())
            .finish()
    }
}
