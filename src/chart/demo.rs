//! Built-in demo datasets
//!
//! Fixed fallback data used when a chart parameter is absent or invalid,
//! plus the sample data embedded in the shareable demo URL.

use super::types::{ChartData, ChartType, Dataset};

/// Demo dataset for a recognized chart type
pub fn demo_data(chart_type: ChartType) -> ChartData {
    match chart_type {
        ChartType::Line => ChartData::new(
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            vec![
                Dataset::new("Sales 2023", vec![30.0, 40.0, 35.0, 50.0, 49.0, 60.0])
                    .color("#3b82f6"),
                Dataset::new("Sales 2022", vec![20.0, 25.0, 30.0, 45.0, 40.0, 50.0])
                    .color("#a855f7"),
            ],
        ),
        ChartType::Bar => ChartData::new(
            ["Product A", "Product B", "Product C", "Product D", "Product E"],
            vec![
                Dataset::new("Revenue", vec![12000.0, 19000.0, 3000.0, 5000.0, 2000.0])
                    .color("#14b8a6"),
            ],
        ),
        ChartType::Pie => ChartData::new(
            ["Desktop", "Mobile", "Tablet"],
            vec![Dataset::new("Traffic Source", vec![55.0, 35.0, 10.0]).color("#6366f1")],
        ),
        ChartType::Area => ChartData::new(
            ["2018", "2019", "2020", "2021", "2022", "2023"],
            vec![
                Dataset::new("Users", vec![500.0, 800.0, 1400.0, 1800.0, 2400.0, 3000.0])
                    .color("#ec4899"),
            ],
        ),
        ChartType::Scatter => ChartData::new(
            (1..=7).map(|i| format!("Point {}", i)),
            vec![
                Dataset::new("Dataset 1", vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0])
                    .color("#f97316"),
                Dataset::new("Dataset 2", vec![7.0, 14.0, 8.0, 25.0, 22.0, 18.0, 30.0])
                    .color("#eab308"),
            ],
        ),
    }
}

/// Generic dataset for identifiers outside the registry
pub fn default_data() -> ChartData {
    ChartData::new(
        ["A", "B", "C", "D", "E"],
        vec![Dataset::new("Default", vec![10.0, 20.0, 30.0, 40.0, 50.0]).color("#22c55e")],
    )
}

/// Fallback for any identifier, recognized or not
pub fn fallback_for(chart_type: &str) -> ChartData {
    match ChartType::from_id(chart_type) {
        Some(t) => demo_data(t),
        None => default_data(),
    }
}

/// Line sample embedded in the demo URL
pub fn sample_line() -> ChartData {
    ChartData::new(
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        vec![
            Dataset::new("Revenue", vec![40.0, 58.0, 45.0, 70.0, 65.0, 85.0]).color("#3b82f6"),
            Dataset::new("Expenses", vec![25.0, 30.0, 40.0, 35.0, 45.0, 55.0]).color("#f97316"),
        ],
    )
}

/// Bar sample embedded in the demo URL
pub fn sample_bar() -> ChartData {
    ChartData::new(
        ["Team A", "Team B", "Team C", "Team D", "Team E"],
        vec![
            Dataset::new("Projects Completed", vec![15.0, 22.0, 8.0, 17.0, 12.0])
                .color("#14b8a6"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_is_aligned() {
        for chart_type in ChartType::all() {
            let data = demo_data(*chart_type);
            assert!(data.is_aligned(), "{} demo data misaligned", chart_type);
            assert!(data.datasets.iter().all(|d| d.color.is_some()));
        }
        assert!(default_data().is_aligned());
        assert!(sample_line().is_aligned());
        assert!(sample_bar().is_aligned());
    }

    #[test]
    fn test_bar_demo() {
        let data = demo_data(ChartType::Bar);
        assert_eq!(data.labels.first().map(String::as_str), Some("Product A"));
        assert_eq!(data.labels.last().map(String::as_str), Some("Product E"));
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].name, "Revenue");
        assert_eq!(data.datasets[0].data.len(), 5);
    }

    #[test]
    fn test_scatter_labels() {
        let data = demo_data(ChartType::Scatter);
        assert_eq!(data.labels[0], "Point 1");
        assert_eq!(data.labels[6], "Point 7");
    }

    #[test]
    fn test_fallback_routing() {
        assert_eq!(fallback_for("pie"), demo_data(ChartType::Pie));

        let data = fallback_for("unknown-type");
        assert_eq!(data.labels, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].name, "Default");
    }
}
