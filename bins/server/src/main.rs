//! Tutora API Server
//!
//! Serves the scheduling and payment calculators over HTTP.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutora_api::{AppState, create_router};
use tutora_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutora=debug,tutora_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(
        currency = %config.finance.currency,
        vat_rate = %config.finance.default_vat_rate,
        max_range_days = config.schedule.max_range_days,
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
