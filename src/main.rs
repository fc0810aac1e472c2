//! Chartlink API Server
//!
//! Run with: cargo run --bin chartlink
//!
//! # Configuration
//!
//! Read from `config.toml` in the usual locations (see `Config::load_default`),
//! then overridden by environment variables:
//! - `CHARTLINK_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CHARTLINK_API_PORT`: Port to listen on (default: 8090)
//! - `CHARTLINK_PUBLIC_URL`: Public dashboard URL for demo links
//! - `CHARTLINK_CACHE_ENABLED`: Memoize resolutions (default: true)
//! - `CHARTLINK_CACHE_MAX_ENTRIES`: Resolution cache entry cap (default: 1024)
//! - `CHARTLINK_LOG_LEVEL`: Log level (default: info)
//! - `CHARTLINK_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the log level

use chartlink::api::{serve, AppState};
use chartlink::config::{Config, LoggingConfig};
use chartlink::service::ChartService;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config.logging);

    tracing::info!("Starting Chartlink API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Public dashboard URL: {}", config.dashboard.public_url);
    tracing::info!("Resolution cache enabled: {}", config.resolver.cache_enabled);

    let service = Arc::new(ChartService::new(config.resolver.clone()));
    let state = AppState::new(service, config.api.clone(), &config.dashboard);

    serve(state).await?;

    tracing::info!("Chartlink API server stopped");
    Ok(())
}

/// Install the global subscriber: pretty for development, JSON for production
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("chartlink={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
