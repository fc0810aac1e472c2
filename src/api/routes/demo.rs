//! Demo Routes
//!
//! - GET /api/v1/demo-url - Shareable link with sample line and bar data

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DemoUrlResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart::demo_url;

/// GET /api/v1/demo-url
///
/// Link rooted at the configured public dashboard URL.
pub async fn get_demo_url(State(state): State<Arc<AppState>>) -> ApiResult<Json<DemoUrlResponse>> {
    let url = demo_url(&state.page)?;
    Ok(Json(DemoUrlResponse { url }))
}
