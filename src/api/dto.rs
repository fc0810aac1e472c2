//! Data Transfer Objects
//!
//! Response types for the API endpoints.
//! These types are serialized to JSON.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::chart::{color_for, ChartData, ChartType};
use crate::resolver::{DataSource, FallbackReason, Resolution};
use crate::service::{Dashboard, ResolvedChart};

// ============================================
// CHART DTOs
// ============================================

/// A resolved chart
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// Requested chart identifier
    pub chart_type: String,
    /// Card title (recognized chart types only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    /// Card description (recognized chart types only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// "url" or "demo"
    pub source: DataSource,
    /// Why demo data was used, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReasonDto>,
    /// Effective color per dataset, palette-filled where omitted
    pub colors: Vec<String>,
    /// Chart payload for the renderer
    pub data: ChartData,
}

impl ChartResponse {
    /// Build a response for any chart identifier
    pub fn new(chart_type: &str, resolution: &Resolution) -> Self {
        let known = ChartType::from_id(chart_type);
        let data = resolution.data();

        Self {
            chart_type: chart_type.to_string(),
            title: known.map(|t| t.title()),
            description: known.map(|t| t.description()),
            source: resolution.source(),
            fallback_reason: resolution.fallback_reason().map(FallbackReasonDto::from),
            colors: data
                .datasets
                .iter()
                .enumerate()
                .map(|(i, d)| color_for(d, i).to_string())
                .collect(),
            data: data.clone(),
        }
    }
}

impl From<&ResolvedChart> for ChartResponse {
    fn from(chart: &ResolvedChart) -> Self {
        Self::new(chart.chart_type.as_str(), &chart.resolution)
    }
}

/// Fallback reason details
#[derive(Debug, Serialize)]
pub struct FallbackReasonDto {
    /// missing, decode, json, shape
    pub code: &'static str,
    /// Human-readable detail
    pub message: String,
}

impl From<&FallbackReason> for FallbackReasonDto {
    fn from(reason: &FallbackReason) -> Self {
        Self {
            code: reason.code(),
            message: reason.to_string(),
        }
    }
}

/// All charts of a dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Charts in display order
    pub charts: Vec<ChartResponse>,
    /// True when the page had no parameters
    pub show_help: bool,
}

impl From<&Dashboard> for DashboardResponse {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            charts: dashboard.charts.iter().map(ChartResponse::from).collect(),
            show_help: dashboard.show_help,
        }
    }
}

// ============================================
// DEMO DTOs
// ============================================

/// Shareable example link
#[derive(Debug, Serialize)]
pub struct DemoUrlResponse {
    pub url: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Whether resolution memoization is on
    pub cache_enabled: bool,
    /// Resolution cache counters
    pub cache: CacheStats,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
