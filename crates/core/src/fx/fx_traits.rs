use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_model::Conversion;
use crate::errors::Result;

/// Trait defining the contract for FX service operations.
pub trait FxServiceTrait: Send + Sync {
    /// Converts a positive amount between two supported currencies.
    fn convert_currency(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Conversion>;
}
