//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, DashboardConfig};
use crate::params::PageLocation;
use crate::service::ChartService;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chart resolution with its caches
    pub service: Arc<ChartService>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Public location of the dashboard page
    pub page: PageLocation,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: Arc<ChartService>, config: ApiConfig, dashboard: &DashboardConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
            page: PageLocation::parse(&dashboard.public_url),
            start_time: Instant::now(),
        }
    }

    /// Dashboard page carrying the given raw query string
    pub fn page_with_query(&self, query: Option<&str>) -> PageLocation {
        self.page.with_search(query.unwrap_or(""))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
