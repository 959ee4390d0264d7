//! Ratio table converter.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::config::MoneySettings;
use tally_shared::{ConversionError, Currency};

use super::conversion::convert_via_base;
use super::converter::CurrencyConverter;

/// A converter that knows each currency's ratio against one base currency.
///
/// Converting `amount` from `A` to `B` computes `amount / ratio(A) * ratio(B)`
/// and rounds to the table's scale with banker's rounding.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::currency::{CurrencyConverter, RateTable};
///
/// let table = RateTable::new(4)
///     .with_ratio("LTL", dec!(1.0)).unwrap()
///     .with_ratio("USD", dec!(0.4)).unwrap();
///
/// let usd = table.convert(dec!(10.00), &"LTL".into(), &"USD".into()).unwrap();
/// assert_eq!(usd, dec!(4.0000));
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    ratios: HashMap<Currency, Decimal>,
    scale: u32,
}

impl RateTable {
    /// Creates an empty table emitting `scale` fractional digits.
    #[must_use]
    pub fn new(scale: u32) -> Self {
        Self {
            ratios: HashMap::new(),
            scale,
        }
    }

    /// Builds a table from the `rates` section of the settings.
    pub fn from_settings(settings: &MoneySettings) -> Result<Self, ConversionError> {
        settings
            .rates
            .iter()
            .try_fold(Self::new(settings.rate_scale), |table, row| {
                table.with_ratio(row.currency.as_str(), row.ratio)
            })
    }

    /// Adds or replaces a ratio. Non-positive ratios are rejected.
    pub fn insert(&mut self, currency: impl Into<Currency>, ratio: Decimal) -> Result<(), ConversionError> {
        let currency = currency.into();
        if ratio <= Decimal::ZERO {
            return Err(ConversionError::InvalidRate {
                currency: currency.to_string(),
                rate: ratio,
            });
        }
        self.ratios.insert(currency, ratio);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_ratio(mut self, currency: impl Into<Currency>, ratio: Decimal) -> Result<Self, ConversionError> {
        self.insert(currency, ratio)?;
        Ok(self)
    }

    /// Returns the ratio for `currency`.
    pub fn ratio(&self, currency: &Currency) -> Result<Decimal, ConversionError> {
        self.ratios
            .get(currency)
            .copied()
            .ok_or_else(|| ConversionError::UnknownCurrency(currency.to_string()))
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns true if the table has no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Output scale of conversions.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl CurrencyConverter for RateTable {
    fn convert(
        &self,
        amount: Decimal,
        from: &Currency,
        to: &Currency,
    ) -> Result<Decimal, ConversionError> {
        let from_ratio = self.ratio(from)?;
        let to_ratio = self.ratio(to)?;
        convert_via_base(amount, from_ratio, to_ratio, self.scale)
    }
}
