use std::sync::Arc;

use crate::config::Config;
use converter_core::constants::{BASE_CURRENCY, BASE_RATE, QUOTE_CURRENCY};
use converter_core::fx::{FxService, FxServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CONVERTER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(_config: &Config) -> anyhow::Result<Arc<AppState>> {
    let fx_service = Arc::new(FxService::with_base_rate(
        BASE_CURRENCY,
        QUOTE_CURRENCY,
        BASE_RATE,
    )?);
    tracing::info!(
        "Rate table loaded: 1 {} = {} {}",
        BASE_CURRENCY,
        BASE_RATE,
        QUOTE_CURRENCY
    );

    Ok(Arc::new(AppState { fx_service }))
}
