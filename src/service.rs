//! Chart Service
//!
//! Owns the resolution state for one session: the parameter extractor's
//! single slot and the resolution cache. Share it behind an `Arc`; every
//! method takes `&self`.
//!
//! # Example
//!
//! ```rust
//! use chartlink::config::ResolverConfig;
//! use chartlink::params::PageLocation;
//! use chartlink::service::ChartService;
//! use chartlink::chart::ChartType;
//!
//! let service = ChartService::new(ResolverConfig::default());
//! let location = PageLocation::parse("https://example.com/?bar=not-json");
//! let dashboard = service.dashboard_for(&location);
//!
//! let bar = dashboard.get(ChartType::Bar).unwrap();
//! assert!(bar.resolution.is_fallback());
//! ```

use std::sync::Arc;

use crate::cache::{CacheKey, CacheStats, ResolutionCache};
use crate::chart::ChartType;
use crate::config::ResolverConfig;
use crate::params::{PageLocation, ParamExtractor, QueryParams};
use crate::resolver::{resolve_chart_data, Resolution};

/// One chart of a dashboard
#[derive(Debug, Clone)]
pub struct ResolvedChart {
    pub chart_type: ChartType,
    pub resolution: Arc<Resolution>,
}

/// Every chart type resolved against the same parameters
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Charts in display order
    pub charts: Vec<ResolvedChart>,
    /// No parameters at all: the page should open its usage help
    pub show_help: bool,
}

impl Dashboard {
    pub fn get(&self, chart_type: ChartType) -> Option<&ResolvedChart> {
        self.charts.iter().find(|c| c.chart_type == chart_type)
    }

    /// Number of charts showing demo data
    pub fn fallback_count(&self) -> usize {
        self.charts
            .iter()
            .filter(|c| c.resolution.is_fallback())
            .count()
    }
}

/// Resolution front end with memoization
#[derive(Debug)]
pub struct ChartService {
    config: ResolverConfig,
    cache: ResolutionCache,
    extractor: ParamExtractor,
}

impl ChartService {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            cache: ResolutionCache::with_max_entries(config.max_entries),
            config,
            extractor: ParamExtractor::new(),
        }
    }

    /// Resolve one chart, reading through the cache when enabled
    pub fn resolve(&self, chart_type: &str, params: &QueryParams) -> Arc<Resolution> {
        if !self.config.cache_enabled {
            return Arc::new(resolve_chart_data(chart_type, params));
        }

        self.cache
            .get_or_insert_with(CacheKey::new(chart_type, params), || {
                resolve_chart_data(chart_type, params)
            })
    }

    /// Resolve all chart types
    pub fn dashboard(&self, params: &QueryParams) -> Dashboard {
        let charts = ChartType::all()
            .iter()
            .map(|&chart_type| ResolvedChart {
                chart_type,
                resolution: self.resolve(chart_type.as_str(), params),
            })
            .collect();

        Dashboard {
            charts,
            show_help: params.is_empty(),
        }
    }

    /// Extract the page's parameters and resolve all chart types
    pub fn dashboard_for(&self, location: &PageLocation) -> Dashboard {
        let params = self.extractor.extract(location);
        self.dashboard(&params)
    }

    /// Parameters of the page, through the extractor's slot
    pub fn params_for(&self, location: &PageLocation) -> Arc<QueryParams> {
        self.extractor.extract(location)
    }

    /// Invalidate both the parameter slot and the resolution cache
    pub fn reset(&self) {
        self.extractor.reset();
        self.cache.clear();
        tracing::info!("Chart caches reset");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_enabled(&self) -> bool {
        self.config.cache_enabled
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
