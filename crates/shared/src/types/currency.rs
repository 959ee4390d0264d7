//! Opaque currency identifier.
//!
//! Tally does not validate currency codes. A currency is whatever string the
//! caller (or the converter behind it) agrees on; the empty identifier means
//! the currency is unknown.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of the currency a monetary amount is denominated in.
///
/// The empty identifier is the "unknown/unassigned" currency. It is only
/// tolerated on zero amounts; see the money types for the exact rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from any string-like code. No validation is done.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the unknown (empty) currency.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(String::new())
    }

    /// Returns true if this is the unknown (empty) currency.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Currency {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::from("LTL").to_string(), "LTL");
        assert_eq!(Currency::unknown().to_string(), "");
    }

    #[test]
    fn test_unknown_currency() {
        assert!(Currency::unknown().is_unknown());
        assert!(Currency::default().is_unknown());
        assert!(Currency::from("").is_unknown());
        assert!(!Currency::from("XXX").is_unknown());
    }

    #[test]
    fn test_codes_are_opaque() {
        // No case folding, no ISO validation.
        assert_ne!(Currency::from("usd"), Currency::from("USD"));
        assert_eq!(Currency::from("YYY"), "YYY");
    }

    #[test]
    fn test_borrow_lookup() {
        let mut ratios = HashMap::new();
        ratios.insert(Currency::from("EUR"), 3);
        assert_eq!(ratios.get("EUR"), Some(&3));
    }
}
