//! Shared response helpers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::warn;
use tutora_shared::AppError;

/// Builds the `{ "error", "message" }` JSON body for an application error.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code().to_lowercase(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Logs and rejects a request whose input failed validation with a 400.
pub fn validation_error(err: &impl std::fmt::Display) -> Response {
    warn!(error = %err, "Rejected request");
    error_response(&AppError::Validation(err.to_string()))
}

/// Formats a Decimal as a string with 2 decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}
