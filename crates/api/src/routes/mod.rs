//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod instructors;
pub mod payments;
pub mod schedule;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(schedule::routes())
        .merge(payments::routes())
        .merge(instructors::routes())
}
