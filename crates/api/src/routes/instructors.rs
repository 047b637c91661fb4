//! Instructor payout route.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AppState,
    response::{format_money, validation_error},
};
use tutora_core::finance::{LessonRecord, PayRule, calculate_instructor_pay};
use tutora_shared::{Currency, Money};

/// Creates the instructor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/instructors/payout", post(calculate_payout))
}

/// Request body for an instructor payout.
#[derive(Debug, Deserialize)]
pub struct PayoutRequest {
    /// How the instructor is paid.
    pub rule: PayRule,
    /// Lessons in the pay period.
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
}

/// Instructor payout response.
#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    /// Currency of every amount.
    pub currency: Currency,
    /// Lessons that took place.
    pub lessons_taught: u32,
    /// Attendance over lessons taught.
    pub total_attendees: u32,
    /// Revenue over lessons taught.
    pub gross_revenue: String,
    /// Amount owed.
    pub amount: String,
}

/// POST `/instructors/payout` - Compute what an instructor is owed.
async fn calculate_payout(
    State(state): State<AppState>,
    Json(request): Json<PayoutRequest>,
) -> impl IntoResponse {
    let currency = state.config.finance.currency;
    let payout = match calculate_instructor_pay(&request.lessons, request.rule) {
        Ok(payout) => payout,
        Err(e) => return validation_error(&e),
    };

    debug!(
        lessons = request.lessons.len(),
        taught = payout.lessons_taught,
        amount = %Money::new(payout.amount, currency),
        "Calculated instructor payout"
    );

    (
        StatusCode::OK,
        Json(PayoutResponse {
            currency,
            lessons_taught: payout.lessons_taught,
            total_attendees: payout.total_attendees,
            gross_revenue: format_money(payout.gross_revenue),
            amount: format_money(payout.amount),
        }),
    )
        .into_response()
}
