//! Property-based tests for the money laws.
//!
//! - Truncation: construction drops digits beyond the precision
//! - Reconciliation: sums take the larger precision and the known currency
//! - Zero ignores currency and precision in comparison
//! - Undefined values are numerically zero but never exactly equal to zero
//! - MutableMoney agrees with Money

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;

/// Strategy to generate decimal literals with up to 8 fractional digits.
fn literal() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u64..10_000_000, "[0-9]{0,8}").prop_map(|(negative, int, frac)| {
        let sign = if negative { "-" } else { "" };
        if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        }
    })
}

fn precision() -> impl Strategy<Value = u32> {
    0u32..=6
}

fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "LTL", "USD", "XXX"])
}

/// Expected text of `literal` truncated to `precision` places.
fn truncated_text(literal: &str, precision: u32) -> String {
    let (int, frac) = literal.split_once('.').unwrap_or((literal, ""));
    let mut kept: String = frac.chars().take(precision as usize).collect();
    while kept.len() < precision as usize {
        kept.push('0');
    }
    if precision == 0 {
        int.to_string()
    } else {
        format!("{int}.{kept}")
    }
}

fn ctx() -> MoneyContext {
    MoneyContext::default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Construction keeps exactly `precision` digits and never rounds.
    #[test]
    fn prop_create_truncates(literal in literal(), precision in precision()) {
        let value = Money::create(&ctx(), literal.as_str(), "LTL", Some(precision)).unwrap();
        let expected: Decimal = truncated_text(&literal, precision).parse().unwrap();

        prop_assert_eq!(value.amount(), expected);
        prop_assert_eq!(value.amount().scale(), precision);
        prop_assert!(value.amount().abs() <= literal.parse::<Decimal>().unwrap().abs());
    }

    /// Sum precision is the larger one; currency is the left one if known.
    #[test]
    fn prop_add_reconciles(
        a in literal(),
        pa in precision(),
        b in literal(),
        pb in precision(),
        ca in prop::sample::select(vec!["", "LTL"]),
    ) {
        let ctx = ctx();
        let left_literal = if ca.is_empty() { "0" } else { a.as_str() };
        let left = Money::create(&ctx, left_literal, ca, Some(pa)).unwrap();
        let right = Money::create(&ctx, b.as_str(), "LTL", Some(pb)).unwrap();

        let sum = left.add(&right).unwrap();
        prop_assert_eq!(sum.precision(), pa.max(pb));
        prop_assert_eq!(sum.currency(), "LTL");
        prop_assert_eq!(sum.amount(), left.amount() + right.amount());
    }

    /// Zero literals are zero whatever the currency or precision.
    #[test]
    fn prop_zero_ignores_currency(
        zeros in "0{1,4}(\\.0{0,6})?",
        currency in currency(),
        precision in precision(),
    ) {
        let value = Money::create(&ctx(), zeros.as_str(), currency, Some(precision)).unwrap();
        prop_assert!(value.is_zero());
        prop_assert_eq!(value.compare_to_zero(), Ordering::Equal);
    }

    /// compare_to_zero agrees with comparing against a zero of the same kind.
    #[test]
    fn prop_compare_to_zero_consistent(
        literal in literal(),
        currency in currency(),
        precision in precision(),
    ) {
        let ctx = ctx();
        let value = Money::create(&ctx, literal.as_str(), currency, Some(precision)).unwrap();
        let zero = Money::create(&ctx, "0", currency, Some(precision)).unwrap();
        prop_assert_eq!(value.compare(&zero).unwrap(), value.compare_to_zero());
    }

    /// With a zero on one side, swapping operands flips the result.
    #[test]
    fn prop_zero_comparison_symmetric(
        literal in literal(),
        pa in precision(),
        pz in precision(),
        ca in currency(),
        cz in currency(),
    ) {
        let ctx = ctx();
        let value = Money::create(&ctx, literal.as_str(), ca, Some(pa)).unwrap();
        let zero = Money::create(&ctx, "0", cz, Some(pz)).unwrap();
        prop_assert_eq!(
            value.compare(&zero).unwrap(),
            zero.compare(&value).unwrap().reverse()
        );
    }

    /// Undefined behaves like zero in arithmetic but is not exactly zero.
    #[test]
    fn prop_undefined_distinct(
        literal in literal(),
        precision in precision(),
    ) {
        let ctx = ctx();
        let undefined = Money::undefined(&ctx, "LTL", Some(precision)).unwrap();
        let zero = Money::create(&ctx, "0", "LTL", Some(precision)).unwrap();
        let value = Money::create(&ctx, literal.as_str(), "LTL", Some(precision)).unwrap();

        prop_assert!(undefined.is_zero() && zero.is_zero());
        prop_assert!(!undefined.is_equal_exact(&zero));
        prop_assert_eq!(value.add(&undefined).unwrap(), value.add(&zero).unwrap());
        prop_assert_eq!(value.subtract(&undefined).unwrap(), value.subtract(&zero).unwrap());
    }

    /// The in-place variant computes what the immutable one does.
    #[test]
    fn prop_mutable_matches_immutable(
        a in literal(),
        b in literal(),
        factor in -1000i64..1000,
        precision in precision(),
    ) {
        let ctx = ctx();
        let left = Money::create(&ctx, a.as_str(), "USD", Some(precision)).unwrap();
        let right = Money::create(&ctx, b.as_str(), "USD", Some(precision)).unwrap();

        let expected = left
            .add(&right)
            .and_then(|v| v.multiply_by_integer(factor))
            .map(|v| v.negate())
            .unwrap();

        let mut mutable = MutableMoney::from_money(&left);
        mutable.add(&right).unwrap().multiply_by_integer(factor).unwrap().negate();

        prop_assert!(mutable.is_equal_exact(&expected));
        prop_assert!(left.is_equal_exact(&Money::create(&ctx, a.as_str(), "USD", Some(precision)).unwrap()));
    }
}
