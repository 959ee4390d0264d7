//! Money settings management.
//!
//! Settings are read once at startup and turned into a money context by the
//! core crate. Nothing here is consulted after that point.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Environment variable prefix for settings overrides (`TALLY__DEFAULT_CURRENCY`).
pub const ENV_PREFIX: &str = "TALLY";

/// Settings for building a money context.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneySettings {
    /// Currency applied when a factory receives an empty currency.
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Precision applied when a factory receives no precision.
    #[serde(default = "default_precision")]
    pub default_precision: u32,
    /// Ratio of each currency against a common base currency.
    #[serde(default)]
    pub rates: Vec<RateSetting>,
    /// Fractional digits emitted by the ratio table converter.
    #[serde(default = "default_rate_scale")]
    pub rate_scale: u32,
}

/// One row of the ratio table.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSetting {
    /// Currency identifier.
    pub currency: String,
    /// Units of this currency per unit of the base currency.
    pub ratio: Decimal,
}

fn default_precision() -> u32 {
    4
}

fn default_rate_scale() -> u32 {
    4
}

impl Default for MoneySettings {
    fn default() -> Self {
        Self {
            default_currency: None,
            default_precision: default_precision(),
            rates: Vec::new(),
            rate_scale: default_rate_scale(),
        }
    }
}

impl MoneySettings {
    /// Loads settings from config files and the environment.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`
    /// (both optional), then `TALLY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        Self::finish(builder)
    }

    /// Loads settings from a TOML document, still honouring environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a value has the wrong type.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the default currency, treating an empty string as unset.
    #[must_use]
    pub fn default_currency(&self) -> Option<&str> {
        self.default_currency.as_deref().filter(|c| !c.is_empty())
    }
}
