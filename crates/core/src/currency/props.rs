//! Property-based tests for the shipped converters.
//!
//! - Conversions emit at most the configured number of fractional digits
//! - Conversions are deterministic
//! - Sign is preserved across conversion
//! - Round trips through a ratio table stay within one unit of the last place

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::converter::CurrencyConverter;
use super::exchange::{ExchangeRate, ExchangeRateBook};
use super::rates::RateTable;

/// Strategy to generate signed amounts with two decimal places (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive ratios (0.0001 to 100.0000).
fn positive_ratio() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["LTL", "USD", "EUR", "LVL"])
}

fn table() -> RateTable {
    RateTable::new(4)
        .with_ratio("LTL", dec!(1.0))
        .and_then(|t| t.with_ratio("USD", dec!(0.4)))
        .and_then(|t| t.with_ratio("EUR", dec!(0.28962)))
        .and_then(|t| t.with_ratio("LVL", dec!(0.2035461)))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The ratio table rounds to its configured scale.
    #[test]
    fn prop_table_respects_scale(
        amount in amount(),
        ratio in positive_ratio(),
        scale in 0u32..=6,
    ) {
        let table = RateTable::new(scale)
            .with_ratio("AAA", dec!(1))
            .and_then(|t| t.with_ratio("BBB", ratio))
            .unwrap();
        let converted = table.convert(amount, &"AAA".into(), &"BBB".into()).unwrap();
        prop_assert!(converted.scale() <= scale, "{} has more than {} places", converted, scale);
    }

    /// Same input, same output.
    #[test]
    fn prop_table_is_deterministic(
        amount in amount(),
        from in currency(),
        to in currency(),
    ) {
        let table = table();
        let first = table.convert(amount, &from.into(), &to.into()).unwrap();
        let second = table.convert(amount, &from.into(), &to.into()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Positive ratios never flip the sign of an amount.
    #[test]
    fn prop_table_preserves_sign(
        amount in amount(),
        from in currency(),
        to in currency(),
    ) {
        let converted = table().convert(amount, &from.into(), &to.into()).unwrap();
        prop_assert!(
            converted.is_zero() || converted.is_sign_negative() == amount.is_sign_negative(),
            "{} became {}", amount, converted
        );
    }

    /// A round trip through LTL lands within a small tolerance of the start.
    #[test]
    fn prop_table_round_trip_is_close(
        amount in amount(),
        to in currency(),
    ) {
        let table = table();
        let there = table.convert(amount, &"LTL".into(), &to.into()).unwrap();
        let back = table.convert(there, &to.into(), &"LTL".into()).unwrap();
        // One unit in the fourth place, amplified by the largest inverse ratio (< 5).
        prop_assert!((back - amount).abs() <= dec!(0.0005), "{} came back as {}", amount, back);
    }

    /// The book answers a reverse lookup with the inverted quote.
    #[test]
    fn prop_book_reverse_lookup_inverts(rate in positive_ratio()) {
        let book = ExchangeRateBook::new(8)
            .with_rate(ExchangeRate::new("AAA", "BBB", rate))
            .unwrap();
        let reverse = book.rate_for(&"BBB".into(), &"AAA".into()).unwrap();
        prop_assert_eq!(reverse.rate, Decimal::ONE / rate);
    }
}
