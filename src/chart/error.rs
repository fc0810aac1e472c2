//! Chart error types
//!
//! Errors raised while turning a chart parameter into `ChartData`. The
//! resolver recovers all of them; they surface only as fallback reasons.

use thiserror::Error;

/// Errors that can occur while reading chart data from a parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Malformed percent escape, or escapes that do not decode to UTF-8
    #[error("Decode error: {0}")]
    Decode(String),

    /// Value is not valid JSON
    #[error("JSON error: {0}")]
    Json(String),

    /// Valid JSON that is not shaped like chart data
    #[error("Shape error: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => ChartError::Shape(err.to_string()),
            _ => ChartError::Json(err.to_string()),
        }
    }
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::Decode("malformed percent escape at byte 2".to_string());
        assert_eq!(err.to_string(), "Decode error: malformed percent escape at byte 2");
    }

    #[test]
    fn test_json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        assert!(matches!(ChartError::from(syntax), ChartError::Json(_)));

        let data = serde_json::from_str::<Vec<String>>("[1]").unwrap_err();
        assert!(matches!(ChartError::from(data), ChartError::Shape(_)));
    }
}
