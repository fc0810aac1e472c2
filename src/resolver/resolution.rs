//! Resolution outcome
//!
//! Makes the path taken by the resolver explicit: data read from the URL,
//! or demo data together with the reason the URL data was not used.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartData, ChartError};

/// Where resolved chart data came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Parsed from the chart's query parameter
    Url,
    /// Built-in demo dataset
    Demo,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url => write!(f, "url"),
            DataSource::Demo => write!(f, "demo"),
        }
    }
}

/// Why demo data was used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Parameter absent or empty
    Missing,
    /// Parameter present but unusable
    Invalid(ChartError),
}

impl FallbackReason {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FallbackReason::Missing => "missing",
            FallbackReason::Invalid(ChartError::Decode(_)) => "decode",
            FallbackReason::Invalid(ChartError::Json(_)) => "json",
            FallbackReason::Invalid(ChartError::Shape(_)) => "shape",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Missing => write!(f, "parameter missing"),
            FallbackReason::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl From<ChartError> for FallbackReason {
    fn from(err: ChartError) -> Self {
        FallbackReason::Invalid(err)
    }
}

/// Result of resolving one chart
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Data supplied in the URL, validated
    Parsed(ChartData),
    /// Demo data used in place of the URL data
    Fallback {
        data: ChartData,
        reason: FallbackReason,
    },
}

impl Resolution {
    /// The chart data, whichever path produced it
    pub fn data(&self) -> &ChartData {
        match self {
            Resolution::Parsed(data) => data,
            Resolution::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> ChartData {
        match self {
            Resolution::Parsed(data) => data,
            Resolution::Fallback { data, .. } => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }

    pub fn source(&self) -> DataSource {
        match self {
            Resolution::Parsed(_) => DataSource::Url,
            Resolution::Fallback { .. } => DataSource::Demo,
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Resolution::Parsed(_) => None,
            Resolution::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::default_data;

    #[test]
    fn test_resolution_accessors() {
        let parsed = Resolution::Parsed(default_data());
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.source(), DataSource::Url);
        assert!(parsed.fallback_reason().is_none());

        let fallback = Resolution::Fallback {
            data: default_data(),
            reason: ChartError::Json("bad".to_string()).into(),
        };
        assert!(fallback.is_fallback());
        assert_eq!(fallback.source(), DataSource::Demo);
        assert_eq!(fallback.fallback_reason().map(|r| r.code()), Some("json"));
        assert_eq!(fallback.data(), parsed.data());
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(FallbackReason::Missing.to_string(), "parameter missing");
        assert_eq!(
            FallbackReason::from(ChartError::Shape("`labels` must be an array".into())).to_string(),
            "Shape error: `labels` must be an array"
        );
    }
}
