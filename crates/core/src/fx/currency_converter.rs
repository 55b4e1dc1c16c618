use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_errors::FxError;
use super::fx_model::Conversion;
use crate::constants::CONVERSION_DECIMAL_PRECISION;

/// A calculator for conversions between two currencies using a single
/// configured base rate. The reverse rate is derived as the
/// multiplicative inverse, so `rate(A->B) * rate(B->A) = 1` holds by
/// construction.
#[derive(Debug)]
pub struct CurrencyConverter {
    base_from: Currency,
    base_to: Currency,
    base_rate: Decimal,
}

impl CurrencyConverter {
    /// Creates a converter for the directed pair `base_from -> base_to`.
    ///
    /// The rate must be strictly positive and the pair must name two
    /// distinct currencies; a degenerate table is rejected here rather
    /// than at lookup time.
    pub fn new(base_from: Currency, base_to: Currency, base_rate: Decimal) -> Result<Self, FxError> {
        if base_rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "rate for {}->{} must be positive, got {}",
                base_from, base_to, base_rate
            )));
        }
        if base_from == base_to {
            return Err(FxError::InvalidRate(format!(
                "base pair must name two distinct currencies, got {}->{}",
                base_from, base_to
            )));
        }
        Ok(CurrencyConverter {
            base_from,
            base_to,
            base_rate,
        })
    }

    /// Looks up the full-precision rate for a directed pair.
    ///
    /// `X->X` is always 1. Pairs outside the configured direction and
    /// its inverse produce `UnsupportedPair`.
    pub fn get_rate(&self, from: Currency, to: Currency) -> Result<Decimal, FxError> {
        if from == to {
            Ok(Decimal::ONE)
        } else if (from, to) == (self.base_from, self.base_to) {
            Ok(self.base_rate)
        } else if (from, to) == (self.base_to, self.base_from) {
            Ok(Decimal::ONE / self.base_rate)
        } else {
            Err(FxError::UnsupportedPair(
                from.to_string(),
                to.to_string(),
            ))
        }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Identity conversions echo the amount unrounded; everything else
    /// is computed with the full-precision rate and then rounded to
    /// display precision. The reported rate is rounded the same way.
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Conversion, FxError> {
        if amount <= Decimal::ZERO {
            return Err(FxError::InvalidAmount(amount));
        }

        let rate = self.get_rate(from, to)?;
        let result = if from == to {
            amount
        } else {
            (amount * rate).round_dp(CONVERSION_DECIMAL_PRECISION)
        };

        Ok(Conversion {
            amount,
            from_currency: from,
            to_currency: to,
            rate: rate.round_dp(CONVERSION_DECIMAL_PRECISION),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn converter() -> CurrencyConverter {
        CurrencyConverter::new(Currency::Sek, Currency::Sgd, dec!(0.12)).unwrap()
    }

    #[test]
    fn base_direction_uses_configured_rate() {
        let conversion = converter()
            .convert_amount(dec!(100), Currency::Sek, Currency::Sgd)
            .unwrap();
        assert_eq!(conversion.rate, dec!(0.12));
        assert_eq!(conversion.result, dec!(12.00));
    }

    #[test]
    fn reverse_direction_uses_reciprocal() {
        let conversion = converter()
            .convert_amount(dec!(100), Currency::Sgd, Currency::Sek)
            .unwrap();
        assert_eq!(conversion.rate, dec!(8.3333));
        assert_eq!(conversion.result, dec!(833.3333));
    }

    #[test]
    fn identity_conversion_is_exact_and_unrounded() {
        let amount = dec!(50.123456789);
        let conversion = converter()
            .convert_amount(amount, Currency::Sek, Currency::Sek)
            .unwrap();
        assert_eq!(conversion.rate, Decimal::ONE);
        assert_eq!(conversion.result, amount);
    }

    #[test]
    fn rate_product_of_both_directions_is_unity_within_tolerance() {
        let converter = converter();
        let forward = converter.get_rate(Currency::Sek, Currency::Sgd).unwrap();
        let backward = converter.get_rate(Currency::Sgd, Currency::Sek).unwrap();
        let product = forward * backward;
        assert!((product - Decimal::ONE).abs() < dec!(0.0000000000000000000001));
    }

    #[test]
    fn round_trip_stays_within_tolerance() {
        let converter = converter();
        let amount = dec!(100);
        let there = converter
            .convert_amount(amount, Currency::Sek, Currency::Sgd)
            .unwrap();
        let back = converter
            .convert_amount(there.result, Currency::Sgd, Currency::Sek)
            .unwrap();
        assert!((back.result - amount).abs() <= dec!(0.0001));
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        let converter = converter();
        for amount in [dec!(0), dec!(-5)] {
            let err = converter
                .convert_amount(amount, Currency::Sek, Currency::Sgd)
                .unwrap_err();
            assert!(matches!(err, FxError::InvalidAmount(_)));
        }
    }

    #[test]
    fn rejects_non_positive_base_rate() {
        for rate in [dec!(0), dec!(-0.12)] {
            let err = CurrencyConverter::new(Currency::Sek, Currency::Sgd, rate).unwrap_err();
            assert!(matches!(err, FxError::InvalidRate(_)));
        }
    }

    #[test]
    fn rejects_identity_base_pair() {
        let err = CurrencyConverter::new(Currency::Sek, Currency::Sek, dec!(1)).unwrap_err();
        assert!(matches!(err, FxError::InvalidRate(_)));
    }

    #[test]
    fn reversed_base_direction_works_both_ways() {
        // A converter configured SGD->SEK must serve SEK->SGD via the inverse.
        let converter =
            CurrencyConverter::new(Currency::Sgd, Currency::Sek, dec!(8.3333333333)).unwrap();
        let rate = converter.get_rate(Currency::Sek, Currency::Sgd).unwrap();
        assert_eq!(rate.round_dp(4), dec!(0.1200));
    }
}
