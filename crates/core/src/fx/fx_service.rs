use std::sync::Arc;

use rust_decimal::Decimal;

use super::currency::Currency;
use super::currency_converter::CurrencyConverter;
use super::fx_errors::FxError;
use super::fx_model::Conversion;
use super::fx_traits::FxServiceTrait;
use crate::errors::Result;

/// FX service backed by a constant rate table. The table is built once
/// at startup and shared read-only across requests.
#[derive(Clone)]
pub struct FxService {
    converter: Arc<CurrencyConverter>,
}

impl FxService {
    /// Builds a service for the directed pair `base_from -> base_to`
    /// at the given rate. Fails on a degenerate pair or rate.
    pub fn with_base_rate(
        base_from: Currency,
        base_to: Currency,
        base_rate: Decimal,
    ) -> std::result::Result<Self, FxError> {
        let converter = CurrencyConverter::new(base_from, base_to, base_rate)?;
        Ok(Self {
            converter: Arc::new(converter),
        })
    }
}

impl FxServiceTrait for FxService {
    fn convert_currency(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Conversion> {
        Ok(self.converter.convert_amount(amount, from, to)?)
    }
}
