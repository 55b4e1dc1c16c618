use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the FX domain. All of these are client-input
/// errors except `InvalidRate`, which is a construction-time guard.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    #[error("Currency '{0}' is not supported")]
    InvalidCurrencyCode(String),

    #[error("Unsupported currency pair {0}->{1}")]
    UnsupportedPair(String, String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
