//! Chartlink REST API
//!
//! HTTP API layer for Chartlink, built with Axum. Chart endpoints read the
//! same query string the dashboard page carries and return resolved chart
//! data as JSON.
//!
//! # Endpoints
//!
//! ## Charts
//! - `GET /api/v1/dashboard?line=...&bar=...` - Resolve all chart types
//! - `GET /api/v1/charts/:chart_type?<chart_type>=...` - Resolve one chart
//! - `DELETE /api/v1/cache` - Reset resolution caches
//!
//! ## Demo
//! - `GET /api/v1/demo-url` - Shareable example link
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use chartlink::api::{serve, AppState};
//! use chartlink::config::Config;
//! use chartlink::service::ChartService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let service = Arc::new(ChartService::new(config.resolver.clone()));
//!
//!     let state = AppState::new(service, config.api.clone(), &config.dashboard);
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chart routes
        .route("/dashboard", get(routes::charts::get_dashboard))
        .route("/charts/:chart_type", get(routes::charts::get_chart))
        .route("/cache", delete(routes::charts::reset_cache))
        // Demo routes
        .route("/demo-url", get(routes::demo::get_demo_url));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: permissive unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::DELETE])
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Chartlink API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Chartlink API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardConfig, ResolverConfig};
    use crate::service::ChartService;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<ChartService>) {
        let service = Arc::new(ChartService::new(ResolverConfig::default()));
        let dashboard = DashboardConfig {
            public_url: "https://charts.example.com/board".to_string(),
        };

        let state = AppState::new(Arc::clone(&service), ApiConfig::default(), &dashboard);
        (build_router(state), service)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn encoded(json: &str) -> String {
        urlencoding::encode(json).into_owned()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _) = create_test_app();
        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _) = create_test_app();
        let response = get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _) = create_test_app();
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["cache_enabled"], true);
        assert_eq!(body["cache"]["entries"], 0);
    }

    #[tokio::test]
    async fn test_dashboard_without_params() {
        let (app, _) = create_test_app();
        let response = get(app, "/api/v1/dashboard").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["show_help"], true);

        let charts = body["charts"].as_array().unwrap();
        let types: Vec<_> = charts.iter().map(|c| c["chart_type"].clone()).collect();
        assert_eq!(types, vec!["line", "bar", "pie", "area", "scatter"]);
        assert!(charts.iter().all(|c| c["source"] == "demo"));
        assert!(charts.iter().all(|c| c["fallback_reason"]["code"] == "missing"));
    }

    #[tokio::test]
    async fn test_dashboard_with_pie_param() {
        let (app, _) = create_test_app();
        let pie = r#"{"labels":["X","Y"],"datasets":[{"name":"S","data":[1,2]}]}"#;
        let response = get(app, &format!("/api/v1/dashboard?pie={}", encoded(pie))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["show_help"], false);

        let pie_chart = &body["charts"][2];
        assert_eq!(pie_chart["chart_type"], "pie");
        assert_eq!(pie_chart["title"], "Pie Chart");
        assert_eq!(pie_chart["source"], "url");
        assert!(pie_chart.get("fallback_reason").is_none());
        assert_eq!(pie_chart["colors"], json!(["#3b82f6"]));
        assert_eq!(
            pie_chart["data"],
            json!({"labels": ["X", "Y"], "datasets": [{"name": "S", "data": [1.0, 2.0]}]})
        );

        let bar_chart = &body["charts"][1];
        assert_eq!(bar_chart["source"], "demo");
        assert_eq!(bar_chart["data"]["datasets"][0]["name"], "Revenue");
    }

    #[tokio::test]
    async fn test_chart_invalid_json_falls_back() {
        let (app, _) = create_test_app();
        let response = get(app, "/api/v1/charts/line?line=not-json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "demo");
        assert_eq!(body["fallback_reason"]["code"], "json");
        assert_eq!(body["data"]["datasets"][0]["name"], "Sales 2023");
    }

    #[tokio::test]
    async fn test_chart_shape_mismatch_falls_back() {
        let (app, _) = create_test_app();
        let uri = format!("/api/v1/charts/area?area={}", encoded(r#"{"labels":["X"]}"#));
        let body = body_json(get(app, &uri).await).await;

        assert_eq!(body["source"], "demo");
        assert_eq!(body["fallback_reason"]["code"], "shape");
    }

    #[tokio::test]
    async fn test_chart_unknown_type() {
        let (app, _) = create_test_app();
        let response = get(app, "/api/v1/charts/unknown-type").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["chart_type"], "unknown-type");
        assert!(body.get("title").is_none());
        assert_eq!(body["data"]["labels"], json!(["A", "B", "C", "D", "E"]));
        assert_eq!(body["data"]["datasets"][0]["name"], "Default");
    }

    #[tokio::test]
    async fn test_chart_type_too_long() {
        let (app, _) = create_test_app();
        let uri = format!("/api/v1/charts/{}", "x".repeat(65));
        let response = get(app, &uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_demo_url() {
        let (app, _) = create_test_app();
        let response = get(app, "/api/v1/demo-url").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("https://charts.example.com/board?line="));
        assert!(url.contains("&bar="));
    }

    #[tokio::test]
    async fn test_reset_cache() {
        let (app, service) = create_test_app();

        let response = get(app.clone(), "/api/v1/dashboard").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(service.cache_stats().entries, 5);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/cache")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(service.cache_stats().entries, 0);
    }

    fn create_app_with_origins(origins: &[&str]) -> Router {
        let api = ApiConfig {
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
            ..Default::default()
        };
        let service = Arc::new(ChartService::new(ResolverConfig::default()));
        build_router(AppState::new(service, api, &DashboardConfig::default()))
    }

    async fn preflight(app: Router, origin: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/dashboard")
                .header("origin", origin)
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_cors_configured_origins() {
        let app = create_app_with_origins(&["http://localhost:5173", "bad\norigin"]);

        let allowed = preflight(app.clone(), "http://localhost:5173").await;
        assert_eq!(
            allowed.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );

        let denied = preflight(app, "http://evil.example").await;
        assert!(denied.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard_is_permissive() {
        for origins in [&["*"][..], &[][..]] {
            let app = create_app_with_origins(origins);
            let response = preflight(app, "http://anywhere.example").await;
            assert_eq!(
                response.headers().get("access-control-allow-origin").unwrap(),
                "*"
            );
        }
    }
}
