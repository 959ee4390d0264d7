//! What a factory may be handed as an amount.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::{MoneyError, MoneyResult};

/// An amount as supplied by a caller.
///
/// The strict factories accept only [`Missing`](Self::Missing) and
/// [`Literal`](Self::Literal). Numeric variants are for the permissive
/// factories, which render them as literals first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountInput<'a> {
    /// No amount: the value is undefined.
    Missing,
    /// Dot-separated decimal text, e.g. `"123.45"`.
    Literal(&'a str),
    /// A whole number.
    Integer(i128),
    /// A binary floating point number.
    Float(f64),
}

impl AmountInput<'_> {
    /// Human-readable kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Literal(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
        }
    }

    /// Renders a numeric input as a literal with `precision` fractional digits.
    ///
    /// `Missing` stays `None`, text passes through untouched. Floats are
    /// rounded half away from zero at `precision`.
    pub(crate) fn to_literal(self, precision: u32) -> MoneyResult<Option<String>> {
        match self {
            Self::Missing => Ok(None),
            Self::Literal(text) if text.is_empty() => Ok(None),
            Self::Literal(text) => Ok(Some(text.to_string())),
            Self::Integer(value) => Ok(Some(value.to_string())),
            Self::Float(value) => {
                let decimal = Decimal::from_f64(value).ok_or_else(|| {
                    MoneyError::InvalidArgument(format!(
                        "amount must be a finite number in range, got {value}"
                    ))
                })?;
                let mut rounded =
                    decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(precision);
                Ok(Some(rounded.to_string()))
            }
        }
    }
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(text: &'a str) -> Self {
        if text.is_empty() {
            Self::Missing
        } else {
            Self::Literal(text)
        }
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::from(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for AmountInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Self::Missing, Self::from)
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AmountInput<'_> {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for AmountInput<'_> {
    // usize is at most 64 bits wide on every supported target.
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<f64> for AmountInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
