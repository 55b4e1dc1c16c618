use rust_decimal::Decimal;

use super::currency::Currency;

/// The outcome of a single conversion. Constructed per request and
/// discarded after the response is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub amount: Decimal,
    pub from_currency: Currency,
    pub to_currency: Currency,
    /// The rate applied, rounded to display precision.
    pub rate: Decimal,
    /// `amount` times the full-precision rate, rounded to display
    /// precision. Identity conversions are returned unrounded.
    pub result: Decimal,
}
