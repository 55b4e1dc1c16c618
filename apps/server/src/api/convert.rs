use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use converter_core::errors::ValidationError;
use converter_core::fx::Currency;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ConversionResponse,
};

/// Raw query parameters. Parsed by hand rather than through serde so
/// that a missing or malformed amount maps to 422 while an unknown
/// currency code maps to 400.
#[derive(Deserialize)]
struct ConvertParams {
    amount: Option<String>,
    from_currency: Option<String>,
    to_currency: Option<String>,
}

/// Convert an amount between the two supported currencies.
async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> ApiResult<Json<ConversionResponse>> {
    let amount = parse_amount(params.amount.as_deref())?;
    let from = parse_currency(params.from_currency.as_deref(), "from_currency")?;
    let to = parse_currency(params.to_currency.as_deref(), "to_currency")?;

    let conversion = state.fx_service.convert_currency(amount, from, to)?;
    Ok(Json(ConversionResponse::from(conversion)))
}

fn parse_amount(raw: Option<&str>) -> Result<Decimal, ApiError> {
    let raw = raw.ok_or_else(|| missing_field("amount"))?;
    raw.parse::<Decimal>()
        .map_err(|e| ApiError::Core(e.into()))
}

fn parse_currency(raw: Option<&str>, field: &str) -> Result<Currency, ApiError> {
    let raw = raw.ok_or_else(|| missing_field(field))?;
    raw.parse::<Currency>().map_err(ApiError::from)
}

fn missing_field(field: &str) -> ApiError {
    ApiError::Core(ValidationError::MissingField(field.to_string()).into())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", get(convert))
}
