//! Rate arithmetic shared by the shipped converters.
//!
//! Converters own their rounding policy; the money types truncate whatever
//! comes back. Both converters here use banker's rounding (round half to
//! even) at their configured output scale to keep round trips unbiased.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tally_shared::ConversionError;

/// Converts an amount using a direct rate (1 source = `rate` target).
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
) -> Result<Decimal, ConversionError> {
    let converted = amount
        .checked_mul(rate)
        .ok_or_else(|| ConversionError::Provider(format!("{amount} * {rate} overflows")))?;
    Ok(converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven))
}

/// Converts an amount through a common base currency.
///
/// `from_ratio` and `to_ratio` are units of each currency per unit of the
/// base; the amount is first expressed in the base, then in the target.
pub fn convert_via_base(
    amount: Decimal,
    from_ratio: Decimal,
    to_ratio: Decimal,
    decimal_places: u32,
) -> Result<Decimal, ConversionError> {
    let in_base = amount
        .checked_div(from_ratio)
        .ok_or_else(|| ConversionError::Provider(format!("{amount} / {from_ratio} is undefined")))?;
    convert_amount(in_base, to_ratio, decimal_places)
}
