use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fx_errors::FxError;

/// The fixed set of currencies accepted by the converter.
///
/// Parsing is strict: only the exact uppercase ISO codes are valid,
/// everything else is an `InvalidCurrencyCode` error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Sek,
    Sgd,
}

impl Currency {
    /// All supported currencies, in a stable order.
    pub const ALL: [Currency; 2] = [Currency::Sek, Currency::Sgd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Sek => "SEK",
            Currency::Sgd => "SGD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| FxError::InvalidCurrencyCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        for currency in Currency::ALL {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn rejects_unknown_and_lowercase_codes() {
        for code in ["USD", "sek", "Sgd", "", " SEK"] {
            let err = code.parse::<Currency>().unwrap_err();
            assert!(matches!(err, FxError::InvalidCurrencyCode(_)), "{code}");
        }
    }

    #[test]
    fn serializes_as_uppercase_code() {
        assert_eq!(serde_json::to_string(&Currency::Sek).unwrap(), "\"SEK\"");
        assert_eq!(serde_json::to_string(&Currency::Sgd).unwrap(), "\"SGD\"");
    }
}
