//! Page location
//!
//! The pieces of a page URL that resolution needs: where the page lives
//! (for building shareable links) and its query string.

use serde::{Deserialize, Serialize};

/// Location of the page a dashboard is rendered on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    /// `scheme://host[:port]`, empty for relative locations
    pub origin: String,
    /// Path component, starting with `/` when an origin is present
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl PageLocation {
    /// Create a location from its parts
    pub fn new(
        origin: impl Into<String>,
        pathname: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Location that only carries a query string
    pub fn from_search(search: &str) -> Self {
        Self {
            search: normalize_search(search),
            ..Default::default()
        }
    }

    /// Split a URL into origin, path and query
    ///
    /// Never fails: missing parts are left empty and the fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);

        let (rest, search) = match url.split_once('?') {
            Some((rest, query)) => (rest, normalize_search(query)),
            None => (url, String::new()),
        };

        let (origin, pathname) = match rest.find("://") {
            Some(scheme_end) => {
                let authority_start = scheme_end + 3;
                match rest[authority_start..].find('/') {
                    Some(path_start) => {
                        let split = authority_start + path_start;
                        (rest[..split].to_string(), rest[split..].to_string())
                    }
                    None => (rest.to_string(), "/".to_string()),
                }
            }
            None => (String::new(), rest.to_string()),
        };

        Self {
            origin,
            pathname,
            search,
        }
    }

    /// Origin plus path, without query or fragment
    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin, self.pathname)
    }

    /// Query string without the leading `?`
    pub fn query(&self) -> &str {
        self.search.strip_prefix('?').unwrap_or(&self.search)
    }

    /// Same page with a different query string
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            origin: self.origin.clone(),
            pathname: self.pathname.clone(),
            search: normalize_search(search),
        }
    }
}

impl std::fmt::Display for PageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.origin, self.pathname, self.search)
    }
}

fn normalize_search(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}
