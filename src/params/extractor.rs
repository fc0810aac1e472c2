//! Parameter extraction with a single-slot cache
//!
//! A page's query string is decoded once and reused until the page
//! navigates (a different query string) or the slot is reset.

use std::sync::{Arc, PoisonError, RwLock};

use super::location::PageLocation;
use super::QueryParams;

/// Decode a query string into a parameter mapping
///
/// Repeated keys keep their last value. Never fails.
pub fn extract_params(query: &str) -> QueryParams {
    super::parser::parse_query_string(query).into_iter().collect()
}

/// Extractor that memoizes the mapping of the most recent page
#[derive(Debug, Default)]
pub struct ParamExtractor {
    slot: RwLock<Option<CachedParams>>,
}

#[derive(Debug)]
struct CachedParams {
    search: String,
    params: Arc<QueryParams>,
}

impl ParamExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for the given page, computed at most once per query string
    pub fn extract(&self, location: &PageLocation) -> Arc<QueryParams> {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = slot.as_ref() {
                if cached.search == location.search {
                    return Arc::clone(&cached.params);
                }
            }
        }

        let params = Arc::new(extract_params(&location.search));
        tracing::debug!(
            count = params.len(),
            "Extracted query parameters"
        );

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CachedParams {
            search: location.search.clone(),
            params: Arc::clone(&params),
        });

        params
    }

    /// Forget the stored mapping
    pub fn reset(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a mapping is currently stored
    pub fn is_cached(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
