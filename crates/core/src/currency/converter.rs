//! The converter capability.

use rust_decimal::Decimal;
use tally_shared::{ConversionError, Currency};

/// Converts an amount between two currencies.
///
/// Implementations must be deterministic and free of side effects as far as
/// the money types can tell: the same input always yields the same output.
/// They are configured once, shared behind an `Arc`, and may be called from
/// any thread.
///
/// Any closure with the right signature is a converter:
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tally_core::currency::CurrencyConverter;
/// use tally_shared::{ConversionError, Currency};
///
/// let flat = |amount: Decimal, _: &Currency, _: &Currency| -> Result<Decimal, ConversionError> {
///     Ok(amount * dec!(2))
/// };
/// let converted = flat.convert(dec!(1.50), &"EUR".into(), &"USD".into()).unwrap();
/// assert_eq!(converted, dec!(3.00));
/// ```
pub trait CurrencyConverter: Send + Sync {
    /// Converts `amount` from `from` into `to`.
    ///
    /// The result may carry any number of fractional digits; callers truncate
    /// it to the precision they need.
    fn convert(&self, amount: Decimal, from: &Currency, to: &Currency)
    -> Result<Decimal, ConversionError>;
}

impl<F> CurrencyConverter for F
where
    F: Fn(Decimal, &Currency, &Currency) -> Result<Decimal, ConversionError> + Send + Sync,
{
    fn convert(
        &self,
        amount: Decimal,
        from: &Currency,
        to: &Currency,
    ) -> Result<Decimal, ConversionError> {
        self(amount, from, to)
    }
}
