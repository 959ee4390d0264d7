//! Money context: the defaults and converter every value is created against.

use std::fmt;
use std::sync::Arc;

use tally_shared::config::MoneySettings;
use tally_shared::{Currency, MoneyError, MoneyResult};

use crate::currency::{CurrencyConverter, RateTable};
use crate::decimal::{DEFAULT_PRECISION, check_precision};

/// Frozen configuration shared by every value created from it.
///
/// A context is cheap to clone (it is a handle to shared, immutable state)
/// and safe to share across threads. Build it once at startup with
/// [`MoneyContext::builder`] or [`MoneyContext::from_settings`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::currency::RateTable;
/// use tally_core::money::{MonetaryValue, Money, MoneyContext};
///
/// let rates = RateTable::new(4)
///     .with_ratio("LTL", dec!(1.0)).unwrap()
///     .with_ratio("EUR", dec!(0.28962)).unwrap();
/// let ctx = MoneyContext::builder()
///     .set_default_currency("EUR")
///     .set_default_converter(rates)
///     .build()
///     .unwrap();
///
/// let price = Money::create(&ctx, "2.00", "", None).unwrap();
/// assert_eq!(price.currency(), "EUR");
/// assert_eq!(price.convert_to("LTL").unwrap().amount().to_string(), "6.9056");
/// ```
#[derive(Clone, Default)]
pub struct MoneyContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    default_currency: Currency,
    default_precision: u32,
    converter: Option<Arc<dyn CurrencyConverter>>,
}

impl Default for ContextInner {
    fn default() -> Self {
        Self {
            default_currency: Currency::unknown(),
            default_precision: DEFAULT_PRECISION,
            converter: None,
        }
    }
}

impl MoneyContext {
    /// Starts building a context.
    #[must_use]
    pub fn builder() -> MoneyContextBuilder {
        MoneyContextBuilder::default()
    }

    /// Builds a context from loaded settings.
    ///
    /// A non-empty `rates` section becomes a [`RateTable`] converter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unusable precision or rate.
    pub fn from_settings(settings: &MoneySettings) -> MoneyResult<Self> {
        let mut builder =
            Self::builder().set_default_precision(settings.default_precision);

        if let Some(currency) = settings.default_currency() {
            builder = builder.set_default_currency(currency);
        }

        if !settings.rates.is_empty() {
            let table = RateTable::from_settings(settings)
                .map_err(|e| MoneyError::InvalidArgument(format!("rate table: {e}")))?;
            builder = builder.set_default_converter(table);
        }

        builder.build()
    }

    /// Currency applied when a factory receives an empty currency.
    #[must_use]
    pub fn default_currency(&self) -> &Currency {
        &self.inner.default_currency
    }

    /// Precision applied when a factory receives none.
    #[must_use]
    pub fn default_precision(&self) -> u32 {
        self.inner.default_precision
    }

    /// Returns true if conversions are possible.
    #[must_use]
    pub fn has_converter(&self) -> bool {
        self.inner.converter.is_some()
    }

    pub(crate) fn converter(&self) -> Option<&dyn CurrencyConverter> {
        self.inner.converter.as_deref()
    }

    pub(crate) fn resolve_currency(&self, currency: Currency) -> Currency {
        if currency.is_unknown() {
            self.inner.default_currency.clone()
        } else {
            currency
        }
    }

    pub(crate) fn resolve_precision(&self, precision: Option<u32>) -> MoneyResult<u32> {
        check_precision(precision.unwrap_or(self.inner.default_precision))
    }
}

impl fmt::Debug for MoneyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyContext")
            .field("default_currency", &self.inner.default_currency)
            .field("default_precision", &self.inner.default_precision)
            .field("has_converter", &self.has_converter())
            .finish()
    }
}

/// Builder for [`MoneyContext`].
#[derive(Default)]
pub struct MoneyContextBuilder {
    inner: ContextInner,
}

impl MoneyContextBuilder {
    /// Sets the currency applied when a factory receives an empty currency.
    #[must_use]
    pub fn set_default_currency(mut self, currency: impl Into<Currency>) -> Self {
        self.inner.default_currency = currency.into();
        self
    }

    /// Sets the precision applied when a factory receives none.
    #[must_use]
    pub fn set_default_precision(mut self, precision: u32) -> Self {
        self.inner.default_precision = precision;
        self
    }

    /// Sets the converter consulted by `convert_to`.
    #[must_use]
    pub fn set_default_converter<C>(self, converter: C) -> Self
    where
        C: CurrencyConverter + 'static,
    {
        self.set_shared_converter(Arc::new(converter))
    }

    /// Sets a converter that is already shared elsewhere.
    #[must_use]
    pub fn set_shared_converter(mut self, converter: Arc<dyn CurrencyConverter>) -> Self {
        self.inner.converter = Some(converter);
        self
    }

    /// Freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the default precision is out of range.
    pub fn build(self) -> MoneyResult<MoneyContext> {
        check_precision(self.inner.default_precision)?;
        Ok(MoneyContext {
            inner: Arc::new(self.inner),
        })
    }
}

impl fmt::Debug for MoneyContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyContextBuilder")
            .field("default_currency", &self.inner.default_currency)
            .field("default_precision", &self.inner.default_precision)
            .field("has_converter", &self.inner.converter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tally_shared::ConversionError;
    use tally_shared::config::RateSetting;

    #[test]
    fn test_default_context() {
        let ctx = MoneyContext::default();
        assert!(ctx.default_currency().is_unknown());
        assert_eq!(ctx.default_precision(), 4);
        assert!(!ctx.has_converter());
    }

    #[test]
    fn test_resolve_defaults() {
        let ctx = MoneyContext::builder()
            .set_default_currency("EUR")
            .set_default_precision(2)
            .build()
            .unwrap();
        assert_eq!(ctx.resolve_currency(Currency::unknown()), "EUR");
        assert_eq!(ctx.resolve_currency("LTL".into()), "LTL");
        assert_eq!(ctx.resolve_precision(None).unwrap(), 2);
        assert_eq!(ctx.resolve_precision(Some(6)).unwrap(), 6);
        assert!(ctx.resolve_precision(Some(29)).is_err());
    }

    #[test]
    fn test_build_rejects_precision() {
        let err = MoneyContext::builder()
            .set_default_precision(40)
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_from_settings() {
        let settings = MoneySettings {
            default_currency: Some("LTL".into()),
            default_precision: 2,
            rates: vec![RateSetting {
                currency: "LTL".into(),
                ratio: dec!(1),
            }],
            ..MoneySettings::default()
        };
        let ctx = MoneyContext::from_settings(&settings).unwrap();
        assert_eq!(ctx.default_currency(), &Currency::from("LTL"));
        assert_eq!(ctx.default_precision(), 2);
        assert!(ctx.has_converter());
    }

    #[test]
    fn test_from_settings_rejects_bad_rate() {
        let settings = MoneySettings {
            rates: vec![RateSetting {
                currency: "LTL".into(),
                ratio: dec!(0),
            }],
            ..MoneySettings::default()
        };
        assert!(MoneyContext::from_settings(&settings).is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = MoneyContext::builder()
            .set_default_converter(
                |amount: Decimal, _: &Currency, _: &Currency| -> Result<Decimal, ConversionError> {
                    Ok(amount)
                },
            )
            .build()
            .unwrap();
        let copy = ctx.clone();
        assert!(copy.has_converter());
        assert!(format!("{copy:?}").contains("has_converter: true"));
    }
}
