//! Schedule preview routes.

use std::collections::BTreeSet;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppState, response::validation_error};
use tutora_core::schedule::{
    DateRange, Holiday, RecurrenceRule, ScheduleError, WeekdayIndex,
    count_weekday_occurrences_in_month, exclude_holidays, national_holidays,
};

/// Creates the schedule routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schedule/occurrences", post(list_occurrences))
        .route("/schedule/holidays/{year}", get(list_holidays))
        .route("/schedule/weekday-count", get(weekday_count))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for expanding a recurrence rule.
#[derive(Debug, Deserialize)]
pub struct OccurrencesRequest {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
    /// How the lesson repeats.
    pub rule: RecurrenceRule,
    /// Drop dates on holidays; falls back to the configured default.
    #[serde(default)]
    pub skip_holidays: Option<bool>,
    /// Additional dates to skip (e.g. lunar-calendar holidays), applied with `skip_holidays`.
    #[serde(default)]
    pub extra_holidays: BTreeSet<NaiveDate>,
}

/// Expanded occurrence dates.
#[derive(Debug, Serialize)]
pub struct OccurrencesResponse {
    /// Number of dates.
    pub count: usize,
    /// Occurrence dates in ascending order.
    pub dates: Vec<NaiveDate>,
}

/// National holidays of a year.
#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    /// Requested year.
    pub year: i32,
    /// Fixed-date holidays in date order.
    pub holidays: Vec<Holiday>,
}

/// Query for counting a weekday within a month.
#[derive(Debug, Deserialize)]
pub struct WeekdayCountQuery {
    /// Year.
    pub year: i32,
    /// Month, 1 = January.
    pub month: u32,
    /// Weekday, 1 = Monday .. 7 = Sunday.
    pub weekday: u8,
}

/// Weekday count response.
#[derive(Debug, Serialize)]
pub struct WeekdayCountResponse {
    /// Year.
    pub year: i32,
    /// Month.
    pub month: u32,
    /// Weekday index.
    pub weekday: WeekdayIndex,
    /// Occurrences of the weekday in the month.
    pub count: u32,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/schedule/occurrences` - Expand a recurrence rule over a date range.
async fn list_occurrences(
    State(state): State<AppState>,
    Json(request): Json<OccurrencesRequest>,
) -> impl IntoResponse {
    let schedule = &state.config.schedule;

    let range = match DateRange::validated(request.start, request.end, schedule.max_range_days) {
        Ok(range) => range,
        Err(e) => return validation_error(&e),
    };

    let mut dates = request.rule.occurrences(&range);
    let generated = dates.len();

    if request
        .skip_holidays
        .unwrap_or(schedule.skip_holidays_by_default)
    {
        dates = exclude_holidays(dates, &request.extra_holidays);
    }

    debug!(
        start = %range.start,
        end = %range.end,
        generated,
        kept = dates.len(),
        "Expanded recurrence rule"
    );

    (
        StatusCode::OK,
        Json(OccurrencesResponse {
            count: dates.len(),
            dates,
        }),
    )
        .into_response()
}

/// GET `/schedule/holidays/{year}` - Fixed-date national holidays.
async fn list_holidays(Path(year): Path<i32>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HolidaysResponse {
            year,
            holidays: national_holidays(year),
        }),
    )
}

/// GET `/schedule/weekday-count` - Count a weekday within a month.
async fn weekday_count(Query(query): Query<WeekdayCountQuery>) -> impl IntoResponse {
    if !(1..=12).contains(&query.month) {
        return validation_error(&ScheduleError::InvalidMonth(query.month));
    }
    let weekday = match WeekdayIndex::new(query.weekday) {
        Ok(weekday) => weekday,
        Err(e) => return validation_error(&e),
    };

    let count = count_weekday_occurrences_in_month(query.year, query.month, weekday);

    (
        StatusCode::OK,
        Json(WeekdayCountResponse {
            year: query.year,
            month: query.month,
            weekday,
            count,
        }),
    )
        .into_response()
}
