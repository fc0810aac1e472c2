//! Chart Data Resolver
//!
//! Maps a chart type and a parameter mapping to chart data:
//!
//! ```text
//! params[chart_type] ──absent/empty──────────────┐
//!        │                                        ▼
//!   decode → JSON → shape check ──any failure──▶ demo data for chart_type
//!        │                                        (generic default if unknown)
//!        ▼
//!   Resolution::Parsed
//! ```
//!
//! Resolution never fails. Failures are logged and reported through
//! `Resolution::Fallback`'s reason.
//!
//! # Example
//!
//! ```rust
//! use chartlink::params::QueryParams;
//! use chartlink::resolver::resolve_chart_data;
//!
//! let params = QueryParams::new().with("bar", "not-json");
//! let resolution = resolve_chart_data("bar", &params);
//!
//! assert!(resolution.is_fallback());
//! assert_eq!(resolution.data().datasets[0].name, "Revenue");
//! ```

mod resolution;
mod validate;

pub use resolution::{DataSource, FallbackReason, Resolution};
pub use validate::{check_shape, parse_chart_param};

use crate::chart::fallback_for;
use crate::params::QueryParams;

/// Resolve chart data for `chart_type` from the parameter mapping
///
/// Unrecognized chart types are accepted and resolve like any other: URL
/// data if valid, otherwise the generic default dataset.
pub fn resolve_chart_data(chart_type: &str, params: &QueryParams) -> Resolution {
    let raw = match params.get(chart_type) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Resolution::Fallback {
                data: fallback_for(chart_type),
                reason: FallbackReason::Missing,
            }
        }
    };

    match parse_chart_param(raw) {
        Ok(data) => Resolution::Parsed(data),
        Err(e) => {
            tracing::warn!(
                chart_type = %chart_type,
                error = %e,
                "Invalid chart parameter, using demo data"
            );
            Resolution::Fallback {
                data: fallback_for(chart_type),
                reason: e.into(),
            }
        }
    }
}
