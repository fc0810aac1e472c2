//! Resolution Cache
//!
//! Memoizes resolutions keyed by chart type and the serialized parameter
//! mapping. Entries live until `clear()`. A capped cache empties itself
//! before storing a new key once the cap is reached, so memory stays bounded
//! however many distinct query strings it sees.
//!
//! Safe to share across threads. Concurrent misses on the same key may both
//! compute, but the first value inserted is the one every caller gets back.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::params::QueryParams;
use crate::resolver::Resolution;

/// Cache key: chart type plus the parameter mapping's fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    chart_type: String,
    params: String,
}

impl CacheKey {
    pub fn new(chart_type: &str, params: &QueryParams) -> Self {
        Self {
            chart_type: chart_type.to_string(),
            params: params.fingerprint(),
        }
    }

    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.chart_type, self.params)
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entries, {} hits, {} misses ({:.1}% hit rate)",
            self.entries,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}

/// Read-through cache of resolutions
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<CacheKey, Arc<Resolution>>>,
    /// 0 means no cap
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolutionCache {
    /// Cache without an entry cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `max_entries` resolutions (0 = no cap)
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::default()
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Look up a stored resolution
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Resolution>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    /// Store a resolution unless one is already present
    ///
    /// Returns the value that ends up in the cache.
    pub fn insert(&self, key: CacheKey, resolution: Resolution) -> Arc<Resolution> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if self.max_entries > 0 && entries.len() >= self.max_entries && !entries.contains_key(&key)
        {
            tracing::debug!(
                entries = entries.len(),
                max_entries = self.max_entries,
                "Resolution cache full, clearing"
            );
            entries.clear();
        }

        Arc::clone(entries.entry(key).or_insert_with(|| Arc::new(resolution)))
    }

    /// Return the cached value, computing and storing it on a miss
    ///
    /// `compute` runs without holding the lock.
    pub fn get_or_insert_with<F>(&self, key: CacheKey, compute: F) -> Arc<Resolution>
    where
        F: FnOnce() -> Resolution,
    {
        if let Some(hit) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(key = %key, "Resolution cache hit");
            return hit;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(key = %key, "Resolution cache miss");
        self.insert(key, compute())
    }

    /// Drop every entry and reset counters
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
