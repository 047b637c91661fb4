//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Schedule preview routes (occurrences, holidays, weekday counts)
//! - Payment calculation routes (VAT, commission, net, apportionment)
//! - Instructor payout route
//!
//! Every route is stateless: nothing is persisted. The caller stores the
//! returned dates and amounts through its own persistence layer.

pub mod response;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tutora_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates state from a loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
