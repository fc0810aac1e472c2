//! Shareable chart URLs
//!
//! Inverse of resolution: encodes chart data into query parameters so that
//! resolving the resulting URL yields the same data.

use super::demo::{sample_bar, sample_line};
use super::error::ChartResult;
use super::types::{ChartData, ChartType};
use crate::params::PageLocation;

/// Encode one chart as a `type=<percent-encoded JSON>` query pair
pub fn encode_param(chart_type: ChartType, data: &ChartData) -> ChartResult<String> {
    let json = serde_json::to_string(data)?;
    Ok(format!("{}={}", chart_type, urlencoding::encode(&json)))
}

/// Build a URL carrying the given charts as query parameters
///
/// `base` is used verbatim; any existing query or fragment on it is the
/// caller's concern.
pub fn chart_url(base: &str, charts: &[(ChartType, &ChartData)]) -> ChartResult<String> {
    if charts.is_empty() {
        return Ok(base.to_string());
    }

    let query = charts
        .iter()
        .map(|(chart_type, data)| encode_param(*chart_type, data))
        .collect::<ChartResult<Vec<_>>>()?
        .join("&");

    Ok(format!("{}?{}", base, query))
}

/// Example link with sample line and bar data, rooted at the current page
pub fn demo_url(location: &PageLocation) -> ChartResult<String> {
    let line = sample_line();
    let bar = sample_bar();

    chart_url(
        &location.base_url(),
        &[(ChartType::Line, &line), (ChartType::Bar, &bar)],
    )
}
