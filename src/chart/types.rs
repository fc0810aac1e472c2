//! Core data types for chart resolution
//!
//! This module defines the structures handed to every renderer:
//! - `ChartData`: labels plus an ordered list of datasets
//! - `Dataset`: one named series of values
//! - `ChartType`: the fixed registry of chart identifiers

use serde::{Deserialize, Serialize};

/// Canonical chart payload consumed by the rendering layer
///
/// Produced once and never mutated afterwards. Dataset order is the
/// render and legend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    /// Category / x-axis domain
    pub labels: Vec<String>,
    /// Series, in render order
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Create chart data from labels and datasets
    pub fn new<L, S>(labels: L, datasets: Vec<Dataset>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets,
        }
    }

    /// Number of categories on the x-axis
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check that every dataset has exactly one value per label
    ///
    /// Mismatches are allowed through resolution untouched; renderers can
    /// use this to decide how to pad or truncate.
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

/// A single named series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Legend label
    pub name: String,
    /// One value per label
    pub data: Vec<f64>,
    /// Optional hex color (e.g. `#3b82f6`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Dataset {
    /// Create a dataset without a color
    pub fn new(name: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            color: None,
        }
    }

    /// Builder: set color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Recognized chart identifiers
///
/// Each one doubles as the name of the query parameter carrying its data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Area,
    Scatter,
}

impl ChartType {
    /// All chart types, in dashboard order
    pub fn all() -> &'static [ChartType] {
        &[
            ChartType::Line,
            ChartType::Bar,
            ChartType::Pie,
            ChartType::Area,
            ChartType::Scatter,
        ]
    }

    /// Look up a chart type by its identifier; unrecognized names give `None`
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "line" => Some(ChartType::Line),
            "bar" => Some(ChartType::Bar),
            "pie" => Some(ChartType::Pie),
            "area" => Some(ChartType::Area),
            "scatter" => Some(ChartType::Scatter),
            _ => None,
        }
    }

    /// Identifier used as query parameter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Area => "area",
            ChartType::Scatter => "scatter",
        }
    }

    /// Card title shown above the chart
    pub fn title(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Area => "Area Chart",
            ChartType::Scatter => "Scatter Plot",
        }
    }

    /// Card description shown under the title
    pub fn description(&self) -> &'static str {
        match self {
            ChartType::Line => "Time series data visualization",
            ChartType::Bar => "Compare values across categories",
            ChartType::Pie => "Distribution breakdown",
            ChartType::Area => "Cumulative value trends",
            ChartType::Scatter => "Correlation analysis",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_ids() {
        for chart_type in ChartType::all() {
            assert_eq!(ChartType::from_id(chart_type.as_str()), Some(*chart_type));
            assert_eq!(chart_type.to_string(), chart_type.as_str());
        }

        assert_eq!(ChartType::from_id("unknown-type"), None);
        assert_eq!(ChartType::from_id("Line"), None);
    }

    #[test]
    fn test_chart_type_metadata() {
        assert_eq!(ChartType::Scatter.title(), "Scatter Plot");
        assert_eq!(ChartType::Area.description(), "Cumulative value trends");
    }

    #[test]
    fn test_dataset_color_omitted_when_absent() {
        let dataset = Dataset::new("S", vec![1.0, 2.0]);
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(json, r#"{"name":"S","data":[1.0,2.0]}"#);

        let colored = Dataset::new("S", vec![1.0]).color("#3b82f6");
        let json = serde_json::to_string(&colored).unwrap();
        assert!(json.contains(r##""color":"#3b82f6""##));
    }

    #[test]
    fn test_alignment() {
        let data = ChartData::new(["A", "B"], vec![Dataset::new("S", vec![1.0, 2.0])]);
        assert!(data.is_aligned());
        assert_eq!(data.len(), 2);

        let data = ChartData::new(["A", "B"], vec![Dataset::new("S", vec![1.0])]);
        assert!(!data.is_aligned());
    }
}
