//! Payment calculation routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    AppState,
    response::{format_money, validation_error},
};
use tutora_core::finance::{FeeCalculator, PaymentRates, apportion_fee, per_lesson_fee};
use tutora_core::schedule::{DateRange, ScheduleError, WeekdayIndex, days_in_month, generate_weekly};
use tutora_shared::Currency;

/// Creates the payment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments/vat", post(calculate_vat))
        .route("/payments/commission", post(calculate_commission))
        .route("/payments/net", post(calculate_net))
        .route("/payments/apportion", post(apportion_monthly_fee))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for VAT or commission on an amount.
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    /// Base amount.
    pub amount: Decimal,
    /// Rate in percent; falls back to the configured default.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

/// Response for a VAT calculation.
#[derive(Debug, Serialize)]
pub struct VatResponse {
    /// Currency of every amount.
    pub currency: Currency,
    /// Rate applied, in percent.
    pub rate: String,
    /// Amount before VAT.
    pub amount: String,
    /// VAT.
    pub vat: String,
    /// Amount plus VAT.
    pub total: String,
}

/// Response for a commission calculation.
#[derive(Debug, Serialize)]
pub struct CommissionResponse {
    /// Currency of every amount.
    pub currency: Currency,
    /// Rate applied, in percent.
    pub rate: String,
    /// Amount before commission.
    pub amount: String,
    /// Commission.
    pub commission: String,
    /// Amount plus commission.
    pub total: String,
}

/// Request body for settling a gross payment.
#[derive(Debug, Deserialize)]
pub struct NetRequest {
    /// Amount charged to the customer.
    pub gross_amount: Decimal,
    /// Commission rate in percent; falls back to the configured default.
    #[serde(default)]
    pub commission_rate: Option<Decimal>,
    /// VAT rate in percent; falls back to the configured default.
    #[serde(default)]
    pub vat_rate: Option<Decimal>,
    /// Whether an invoice is issued. VAT only applies to invoiced payments.
    #[serde(default)]
    pub is_invoiced: bool,
}

/// Response for a net settlement.
#[derive(Debug, Serialize)]
pub struct NetResponse {
    /// Currency of every amount.
    pub currency: Currency,
    /// Amount charged to the customer.
    pub gross_amount: String,
    /// Commission deducted.
    pub commission: String,
    /// VAT deducted.
    pub vat: String,
    /// What the institution keeps.
    pub net_amount: String,
}

/// Request body for splitting a monthly fee across a month's lessons.
#[derive(Debug, Deserialize)]
pub struct ApportionRequest {
    /// Fee covering the whole month.
    pub monthly_fee: Decimal,
    /// Year.
    pub year: i32,
    /// Month, 1 = January.
    pub month: u32,
    /// Lesson weekday, 1 = Monday .. 7 = Sunday.
    pub weekday: u8,
}

/// One lesson's share.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Lesson date.
    pub date: NaiveDate,
    /// Share of the fee.
    pub amount: String,
}

/// Response for a fee split.
#[derive(Debug, Serialize)]
pub struct ApportionResponse {
    /// Currency of every amount.
    pub currency: Currency,
    /// Lessons in the month.
    pub lessons: usize,
    /// Monthly fee divided by the lesson count, rounded.
    pub per_lesson_fee: String,
    /// Exact split; sums to the monthly fee.
    pub shares: Vec<ShareResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/payments/vat` - Add VAT to an amount.
async fn calculate_vat(
    State(state): State<AppState>,
    Json(request): Json<RateRequest>,
) -> impl IntoResponse {
    let finance = &state.config.finance;
    let rate = request.rate.unwrap_or(finance.default_vat_rate);
    let result = match FeeCalculator::calculate_vat(request.amount, rate) {
        Ok(result) => result,
        Err(e) => return validation_error(&e),
    };

    (
        StatusCode::OK,
        Json(VatResponse {
            currency: finance.currency,
            rate: rate.to_string(),
            amount: format_money(result.amount),
            vat: format_money(result.vat),
            total: format_money(result.total),
        }),
    )
        .into_response()
}

/// POST `/payments/commission` - Add card commission to an amount.
async fn calculate_commission(
    State(state): State<AppState>,
    Json(request): Json<RateRequest>,
) -> impl IntoResponse {
    let finance = &state.config.finance;
    let rate = request.rate.unwrap_or(finance.default_commission_rate);
    let result = match FeeCalculator::calculate_commission(request.amount, rate) {
        Ok(result) => result,
        Err(e) => return validation_error(&e),
    };

    (
        StatusCode::OK,
        Json(CommissionResponse {
            currency: finance.currency,
            rate: rate.to_string(),
            amount: format_money(result.amount),
            commission: format_money(result.commission),
            total: format_money(result.total),
        }),
    )
        .into_response()
}

/// POST `/payments/net` - Settle a gross payment into fees and net amount.
async fn calculate_net(
    State(state): State<AppState>,
    Json(request): Json<NetRequest>,
) -> impl IntoResponse {
    let finance = &state.config.finance;
    let rates = PaymentRates::new(
        request
            .commission_rate
            .unwrap_or(finance.default_commission_rate),
        request.vat_rate.unwrap_or(finance.default_vat_rate),
    );
    let result = match FeeCalculator::calculate_net_amount(request.gross_amount, rates, request.is_invoiced) {
        Ok(result) => result,
        Err(e) => return validation_error(&e),
    };

    (
        StatusCode::OK,
        Json(NetResponse {
            currency: finance.currency,
            gross_amount: format_money(result.gross_amount),
            commission: format_money(result.commission),
            vat: format_money(result.vat),
            net_amount: format_money(result.net_amount),
        }),
    )
        .into_response()
}

/// POST `/payments/apportion` - Split a monthly fee across the month's lessons.
async fn apportion_monthly_fee(
    State(state): State<AppState>,
    Json(request): Json<ApportionRequest>,
) -> impl IntoResponse {
    let weekday = match WeekdayIndex::new(request.weekday) {
        Ok(weekday) => weekday,
        Err(e) => return validation_error(&e),
    };

    let last_day = days_in_month(request.year, request.month);
    let month_range = NaiveDate::from_ymd_opt(request.year, request.month, 1)
        .zip(NaiveDate::from_ymd_opt(request.year, request.month, last_day))
        .map(|(start, end)| DateRange::new(start, end));
    let Some(month_range) = month_range else {
        return validation_error(&ScheduleError::InvalidMonth(request.month));
    };

    let dates = generate_weekly(&month_range, weekday);
    let fee = per_lesson_fee(request.monthly_fee, request.year, request.month, weekday);
    let shares = apportion_fee(request.monthly_fee, &dates);

    debug!(
        year = request.year,
        month = request.month,
        lessons = dates.len(),
        "Apportioned monthly fee"
    );

    (
        StatusCode::OK,
        Json(ApportionResponse {
            currency: state.config.finance.currency,
            lessons: dates.len(),
            per_lesson_fee: format_money(fee),
            shares: shares
                .into_iter()
                .map(|share| ShareResponse {
                    date: share.date,
                    amount: format_money(share.amount),
                })
                .collect(),
        }),
    )
        .into_response()
}
