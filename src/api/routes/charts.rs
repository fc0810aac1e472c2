//! Chart Routes
//!
//! Resolve chart data from the request's own query string. The query
//! string is exactly what the dashboard page would carry.
//!
//! - GET /api/v1/dashboard - All chart types
//! - GET /api/v1/charts/:chart_type - One chart type
//! - DELETE /api/v1/cache - Reset resolution caches

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartResponse, DashboardResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Longest accepted chart identifier
const MAX_CHART_TYPE_LEN: usize = 64;

/// GET /api/v1/dashboard
///
/// Resolve every chart type. Invalid chart parameters fall back to demo
/// data; the response says which charts did.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<DashboardResponse> {
    let location = state.page_with_query(query.as_deref());
    let dashboard = state.service.dashboard_for(&location);

    tracing::debug!(
        fallbacks = dashboard.fallback_count(),
        show_help = dashboard.show_help,
        "Dashboard resolved"
    );

    Json(DashboardResponse::from(&dashboard))
}

/// GET /api/v1/charts/:chart_type
///
/// Resolve a single chart. Unrecognized chart types are not an error: they
/// resolve to their URL data or the generic default dataset.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(chart_type): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<ChartResponse>> {
    if chart_type.is_empty() || chart_type.len() > MAX_CHART_TYPE_LEN {
        return Err(ApiError::Validation(format!(
            "chart type must be 1-{} characters",
            MAX_CHART_TYPE_LEN
        )));
    }

    let location = state.page_with_query(query.as_deref());
    let params = state.service.params_for(&location);
    let resolution = state.service.resolve(&chart_type, &params);

    Ok(Json(ChartResponse::new(&chart_type, &resolution)))
}

/// DELETE /api/v1/cache
///
/// Drop memoized parameters and resolutions.
pub async fn reset_cache(State(state): State<Arc<AppState>>) -> StatusCode {
    state.service.reset();
    StatusCode::NO_CONTENT
}
