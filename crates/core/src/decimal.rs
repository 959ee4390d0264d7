//! Exact fixed-point decimal primitives.
//!
//! CRITICAL: amounts never pass through binary floating point.
//! Every value handed out of this module has a scale equal to the precision
//! it was produced for, and every reduction of scale truncates toward zero.
//! Rounding to nearest is never applied here.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::{MoneyError, MoneyResult};

/// Largest precision the decimal representation can hold.
pub const MAX_PRECISION: u32 = 28;

/// Precision applied when none is supplied.
pub const DEFAULT_PRECISION: u32 = 4;

/// Rejects precisions the representation cannot hold.
pub fn check_precision(precision: u32) -> MoneyResult<u32> {
    if precision > MAX_PRECISION {
        return Err(MoneyError::InvalidArgument(format!(
            "precision {precision} exceeds the maximum of {MAX_PRECISION}"
        )));
    }
    Ok(precision)
}

/// Parses a decimal literal and truncates it to `precision` fractional digits.
///
/// Accepted grammar: `[+-]?digits[.digits]`, where either side of the dot may
/// be empty but not both. Excess fractional digits are cut from the text
/// before any arithmetic, so truncation is exact for literals of any length.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::decimal::parse_literal;
///
/// let amount = parse_literal("999999.536", 2).unwrap();
/// assert_eq!(amount, dec!(999999.53));
/// assert_eq!(amount.to_string(), "999999.53");
/// ```
pub fn parse_literal(literal: &str, precision: u32) -> MoneyResult<Decimal> {
    check_precision(precision)?;

    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return Err(MoneyError::InvalidArgument(format!(
            "`{literal}` is not a decimal literal (expected e.g. \"123.45\")"
        )));
    }

    let kept = &frac_part[..frac_part.len().min(precision as usize)];
    let digits = format!("{}{kept}", int_part.trim_start_matches('0'));
    let out_of_range = || MoneyError::AmountOutOfRange(format!("`{literal}` is too large"));

    let mantissa: i128 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| out_of_range())?
    };
    let mantissa = if negative { -mantissa } else { mantissa };

    // `kept` is at most MAX_PRECISION characters long.
    #[allow(clippy::cast_possible_truncation)]
    let scale = kept.len() as u32;
    let value = Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| out_of_range())?;

    truncate(value, precision)
}

/// Rescales `value` to exactly `precision` fractional digits.
///
/// Extra digits are dropped (toward zero); missing digits are filled with
/// zeros.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::decimal::truncate;
///
/// assert_eq!(truncate(dec!(-1120.4266), 1).unwrap().to_string(), "-1120.4");
/// assert_eq!(truncate(dec!(0.1), 4).unwrap().to_string(), "0.1000");
/// ```
pub fn truncate(value: Decimal, precision: u32) -> MoneyResult<Decimal> {
    check_precision(precision)?;

    let mut out = value.round_dp_with_strategy(precision, RoundingStrategy::ToZero);
    out.rescale(precision);
    if out.scale() != precision {
        return Err(MoneyError::AmountOutOfRange(format!(
            "{value} cannot be held with {precision} fractional digits"
        )));
    }

    Ok(normalize_zero(out))
}

/// Exact sum of `left` and `right` at `precision`.
pub fn add(left: Decimal, right: Decimal, precision: u32) -> MoneyResult<Decimal> {
    let sum = left
        .checked_add(right)
        .ok_or_else(|| MoneyError::AmountOutOfRange(format!("{left} + {right} overflows")))?;
    truncate(sum, precision)
}

/// Exact difference of `left` and `right` at `precision`.
pub fn sub(left: Decimal, right: Decimal, precision: u32) -> MoneyResult<Decimal> {
    let difference = left
        .checked_sub(right)
        .ok_or_else(|| MoneyError::AmountOutOfRange(format!("{left} - {right} overflows")))?;
    truncate(difference, precision)
}

/// Scales `value` by a whole-number `factor`, truncated to `precision`.
///
/// A factor with a non-zero fractional part is rejected.
pub fn mul_integer(value: Decimal, factor: Decimal, precision: u32) -> MoneyResult<Decimal> {
    if !factor.fract().is_zero() {
        return Err(MoneyError::InvalidArgument(format!(
            "cannot multiply money by {factor}, only integer value is acceptable"
        )));
    }
    let product = value
        .checked_mul(factor)
        .ok_or_else(|| MoneyError::AmountOutOfRange(format!("{value} * {factor} overflows")))?;
    truncate(product, precision)
}

/// Negates `value`. Zero stays positive zero.
#[must_use]
pub fn negate(value: Decimal) -> Decimal {
    normalize_zero(-value)
}

/// Sign of `value` against zero.
#[must_use]
pub fn signum(value: Decimal) -> Ordering {
    if value.is_zero() {
        Ordering::Equal
    } else if value.is_sign_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// A zero amount at `precision` (`0.0000` for precision 4).
#[must_use]
pub fn zero(precision: u32) -> Decimal {
    Decimal::new(0, precision)
}

fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}
