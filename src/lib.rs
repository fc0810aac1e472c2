//! # Chartlink
//!
//! URL-driven chart dashboards. Chart data for line, bar, pie, area and
//! scatter charts travels in the page's query string as URL-encoded JSON;
//! anything missing or malformed is replaced with built-in demo data so a
//! dashboard always renders.
//!
//! ## Features
//!
//! - **Query extraction**: Form-decoding of the page query string
//! - **Validated resolution**: Structural checks with uniform demo fallback
//! - **Explicit outcomes**: Every resolution says whether it used URL data
//! - **Memoization**: Per-session cache with explicit reset
//! - **Shareable links**: Encode chart data back into a URL
//!
//! ## Modules
//!
//! - [`chart`]: Chart data model, demo datasets and URL encoding
//! - [`params`]: Query string extraction
//! - [`resolver`]: Chart data resolution
//! - [`cache`]: Resolution cache
//! - [`service`]: Cached resolution front end
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use chartlink::chart::ChartType;
//! use chartlink::params::PageLocation;
//! use chartlink::service::ChartService;
//!
//! let service = ChartService::default();
//! let page = PageLocation::parse(
//!     "https://example.com/?line=%7B%22labels%22%3A%5B%22Jan%22%5D%2C%22datasets%22%3A%5B%7B%22name%22%3A%22Sales%22%2C%22data%22%3A%5B10%5D%7D%5D%7D",
//! );
//!
//! let dashboard = service.dashboard_for(&page);
//! let line = dashboard.get(ChartType::Line).unwrap();
//!
//! assert!(!line.resolution.is_fallback());
//! assert_eq!(line.resolution.data().datasets[0].name, "Sales");
//! assert_eq!(dashboard.fallback_count(), 4);
//! ```

pub mod api;
pub mod cache;
pub mod chart;
pub mod config;
pub mod params;
pub mod resolver;
pub mod service;

// Re-export top-level types for convenience
pub use chart::{ChartData, ChartError, ChartResult, ChartType, Dataset};

pub use params::{extract_params, PageLocation, ParamExtractor, QueryParams};

pub use resolver::{resolve_chart_data, DataSource, FallbackReason, Resolution};

pub use cache::{CacheKey, CacheStats, ResolutionCache};

pub use service::{ChartService, Dashboard, ResolvedChart};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig, ResolverConfig,
};
