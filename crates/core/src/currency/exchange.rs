//! Exchange rate quotes and a converter built from them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::{ConversionError, Currency};

use super::conversion::convert_amount;
use super::converter::CurrencyConverter;

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: Currency,
    /// Target currency code.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from_currency: impl Into<Currency>, to_currency: impl Into<Currency>, rate: Decimal) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }

    /// Returns the inverse rate, or `None` for a zero rate.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: Decimal::ONE.checked_div(self.rate)?,
        })
    }
}

/// A converter backed by directed exchange rate quotes.
///
/// Lookup tries the direct quote first and falls back to the inverse of the
/// reverse quote. Results are rounded to `decimal_places` with banker's
/// rounding.
#[derive(Debug, Clone)]
pub struct ExchangeRateBook {
    rates: HashMap<(Currency, Currency), Decimal>,
    decimal_places: u32,
}

impl ExchangeRateBook {
    /// Creates an empty book emitting `decimal_places` fractional digits.
    #[must_use]
    pub fn new(decimal_places: u32) -> Self {
        Self {
            rates: HashMap::new(),
            decimal_places,
        }
    }

    /// Adds or replaces a quote. Non-positive rates are rejected.
    pub fn insert(&mut self, rate: ExchangeRate) -> Result<(), ConversionError> {
        if rate.rate <= Decimal::ZERO {
            return Err(ConversionError::InvalidRate {
                currency: rate.from_currency.to_string(),
                rate: rate.rate,
            });
        }
        self.rates
            .insert((rate.from_currency, rate.to_currency), rate.rate);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_rate(mut self, rate: ExchangeRate) -> Result<Self, ConversionError> {
        self.insert(rate)?;
        Ok(self)
    }

    /// Number of quotes in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the book has no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Resolves the rate for `from` -> `to`.
    pub fn rate_for(&self, from: &Currency, to: &Currency) -> Result<ExchangeRate, ConversionError> {
        if from == to {
            return Ok(ExchangeRate::new(from, to, Decimal::ONE));
        }
        if let Some(rate) = self.rates.get(&(from.clone(), to.clone())) {
            return Ok(ExchangeRate::new(from, to, *rate));
        }
        self.rates
            .get(&(to.clone(), from.clone()))
            .and_then(|rate| ExchangeRate::new(to, from, *rate).inverse())
            .ok_or_else(|| ConversionError::MissingRate {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

impl CurrencyConverter for ExchangeRateBook {
    fn convert(
        &self,
        amount: Decimal,
        from: &Currency,
        to: &Currency,
    ) -> Result<Decimal, ConversionError> {
        let rate = self.rate_for(from, to)?;
        convert_amount(amount, rate.rate, self.decimal_places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book() -> ExchangeRateBook {
        ExchangeRateBook::new(4)
            .with_rate(ExchangeRate::new("USD", "IDR", dec!(15000)))
            .unwrap()
            .with_rate(ExchangeRate::new("EUR", "USD", dec!(1.10)))
            .unwrap()
    }

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::new("EUR", "USD", dec!(1.25));
        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.from_currency, "USD");
        assert_eq!(inverse.to_currency, "EUR");
        assert_eq!(inverse.rate, dec!(0.8));
        assert!(ExchangeRate::new("EUR", "USD", Decimal::ZERO).inverse().is_none());
    }

    #[test]
    fn test_direct_quote() {
        let converted = book()
            .convert(dec!(100), &"USD".into(), &"IDR".into())
            .unwrap();
        assert_eq!(converted, dec!(1500000));
    }

    #[test]
    fn test_reverse_quote_is_inverted() {
        let converted = book()
            .convert(dec!(1.10), &"USD".into(), &"EUR".into())
            .unwrap();
        assert_eq!(converted, dec!(1.0000));
    }

    #[test]
    fn test_same_currency_is_identity() {
        let converted = book()
            .convert(dec!(12.3456), &"JPY".into(), &"JPY".into())
            .unwrap();
        assert_eq!(converted, dec!(12.3456));
    }

    #[test]
    fn test_missing_pair() {
        let err = book()
            .convert(dec!(1), &"EUR".into(), &"IDR".into())
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingRate {
                from: "EUR".into(),
                to: "IDR".into(),
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let mut book = ExchangeRateBook::new(4);
        assert!(book.insert(ExchangeRate::new("EUR", "USD", dec!(-1))).is_err());
        assert!(book.is_empty());
        assert_eq!(self::book().len(), 2);
    }
}
