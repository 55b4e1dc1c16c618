use crate::fx::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base conversion direction: 1 SEK = 0.12 SGD.
pub const BASE_CURRENCY: Currency = Currency::Sek;

/// Quote side of the base direction.
pub const QUOTE_CURRENCY: Currency = Currency::Sgd;

/// The single configured exchange rate for the base direction.
/// The reverse rate is its multiplicative inverse.
pub const BASE_RATE: Decimal = dec!(0.12);

/// Decimal precision for conversion results
pub const CONVERSION_DECIMAL_PRECISION: u32 = 4;
