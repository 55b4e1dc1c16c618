use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use converter_core::errors::Error as CoreError;
use converter_core::fx::FxError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                // Boundary validation failures: missing or malformed input.
                CoreError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CoreError::Fx(FxError::InvalidAmount(_)) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
                }
                // Unknown code, unsupported pair, degenerate rate table.
                CoreError::Fx(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            },
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<FxError> for ApiError {
    fn from(err: FxError) -> Self {
        ApiError::Core(err.into())
    }
}
