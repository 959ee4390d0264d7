//! Result sinks: how a computed record reaches the caller.

use super::context::MoneyContext;
use super::mutable::MutableMoney;
use super::state::MoneyState;
use super::value::Money;

/// Materializes the record produced by an operation.
pub trait ResultSink {
    /// What the operation hands back.
    type Output;

    /// Turns `state` into the operation's output.
    fn materialize(self, state: MoneyState) -> Self::Output;
}

/// Builds a fresh immutable [`Money`] bound to the given context.
#[derive(Debug, Clone, Copy)]
pub struct NewValue<'a>(pub &'a MoneyContext);

impl ResultSink for NewValue<'_> {
    type Output = Money;

    fn materialize(self, state: MoneyState) -> Money {
        Money::from_parts(state, self.0.clone())
    }
}

/// Overwrites the receiver's fields and hands the receiver back.
#[derive(Debug)]
pub struct InPlace<'a>(pub &'a mut MutableMoney);

impl<'a> ResultSink for InPlace<'a> {
    type Output = &'a mut MutableMoney;

    fn materialize(self, state: MoneyState) -> &'a mut MutableMoney {
        self.0.replace_state(state);
        self.0
    }
}
