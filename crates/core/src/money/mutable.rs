//! Money updated in place.

use std::fmt;

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyResult};

use super::context::MoneyContext;
use super::input::AmountInput;
use super::sink::{InPlace, ResultSink};
use super::state::MoneyState;
use super::value::Money;
use super::MonetaryValue;

/// A single-owner accumulator with the same rules as [`Money`].
///
/// Operations overwrite this instance and return it, so calls chain. A
/// failed operation leaves the instance as it was. Read-only operations
/// never change the receiver or the argument.
///
/// # Example
///
/// ```
/// use tally_core::money::{MonetaryValue, Money, MoneyContext, MutableMoney};
///
/// let ctx = MoneyContext::default();
/// let mut total = MutableMoney::create(&ctx, "0.00", "LTL", Some(2)).unwrap();
/// for price in ["15.33", "10.33"] {
///     total.add(&Money::create(&ctx, price, "LTL", Some(2)).unwrap()).unwrap();
/// }
/// assert_eq!(total.to_display_string(), "25.66 LTL");
/// ```
pub struct MutableMoney {
    state: MoneyState,
    context: MoneyContext,
}

impl MutableMoney {
    /// See [`Money::create`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::create`].
    pub fn create<'a>(
        ctx: &MoneyContext,
        amount: impl Into<AmountInput<'a>>,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state = MoneyState::create(ctx, amount.into(), currency.into(), precision)?;
        Ok(Self::with_state(state, ctx.clone()))
    }

    /// See [`Money::create_from_numeric`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::create_from_numeric`].
    pub fn create_from_numeric<'a>(
        ctx: &MoneyContext,
        amount: impl Into<AmountInput<'a>>,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state =
            MoneyState::create_from_numeric(ctx, amount.into(), currency.into(), precision)?;
        Ok(Self::with_state(state, ctx.clone()))
    }

    /// See [`Money::undefined`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::undefined`].
    pub fn undefined(
        ctx: &MoneyContext,
        currency: impl Into<Currency>,
        precision: Option<u32>,
    ) -> MoneyResult<Self> {
        let state = MoneyState::undefined(ctx, currency.into(), precision)?;
        Ok(Self::with_state(state, ctx.clone()))
    }

    /// Copies any monetary value into a fresh mutable instance.
    #[must_use]
    pub fn from_money<V: MonetaryValue + ?Sized>(value: &V) -> Self {
        Self::with_state(value.state().clone(), value.context().clone())
    }

    /// Independent immutable copy of the current value.
    #[must_use]
    pub fn snapshot(&self) -> Money {
        Money::from_parts(self.state.clone(), self.context.clone())
    }

    fn with_state(state: MoneyState, context: MoneyContext) -> Self {
        Self { state, context }
    }

    pub(crate) fn replace_state(&mut self, state: MoneyState) {
        self.state = state;
    }

    /// Adds `other` in place. See [`Money::add`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::add`].
    pub fn add<O: MonetaryValue + ?Sized>(&mut self, other: &O) -> MoneyResult<&mut Self> {
        let state = self.state.add(other.state(), &self.context)?;
        Ok(InPlace(self).materialize(state))
    }

    /// Subtracts `other` in place. See [`Money::subtract`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::subtract`].
    pub fn subtract<O: MonetaryValue + ?Sized>(&mut self, other: &O) -> MoneyResult<&mut Self> {
        let state = self.state.subtract(other.state(), &self.context)?;
        Ok(InPlace(self).materialize(state))
    }

    /// Multiplies in place. See [`Money::multiply_by_integer`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::multiply_by_integer`].
    pub fn multiply_by_integer(&mut self, factor: impl Into<Decimal>) -> MoneyResult<&mut Self> {
        let state = self.state.multiply_by_integer(factor.into())?;
        Ok(InPlace(self).materialize(state))
    }

    /// Flips the sign in place.
    pub fn negate(&mut self) -> &mut Self {
        let state = self.state.negate();
        InPlace(self).materialize(state)
    }

    /// Converts in place. See [`Money::convert_to`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::convert_to`].
    pub fn convert_to(&mut self, currency: impl Into<Currency>) -> MoneyResult<&mut Self> {
        let state = self.state.convert_to(&currency.into(), &self.context)?;
        Ok(InPlace(self).materialize(state))
    }

    /// Rescales in place. See [`Money::to_precision`].
    ///
    /// # Errors
    ///
    /// Same as [`Money::to_precision`].
    pub fn to_precision(&mut self, precision: u32) -> MoneyResult<&mut Self> {
        let state = self.state.to_precision(precision)?;
        Ok(InPlace(self).materialize(state))
    }
}

impl MonetaryValue for MutableMoney {
    fn state(&self) -> &MoneyState {
        &self.state
    }

    fn context(&self) -> &MoneyContext {
        &self.context
    }
}

impl From<&Money> for MutableMoney {
    fn from(money: &Money) -> Self {
        Self::from_money(money)
    }
}

impl fmt::Display for MutableMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state.to_display_string())
    }
}

impl fmt::Debug for MutableMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableMoney")
            .field("amount", &self.state.amount())
            .field("currency", self.state.currency())
            .field("precision", &self.state.precision())
            .field("defined", &self.state.is_defined())
            .finish()
    }
}
