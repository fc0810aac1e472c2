//! Chart parameter decoding and shape validation
//!
//! A chart parameter goes through three gates, each with its own error:
//!
//! ```text
//! raw value → percent-decode (Decode) → JSON parse (Json) → shape check (Shape) → ChartData
//! ```

use serde_json::Value;

use crate::chart::{ChartData, ChartError, ChartResult};

/// Decode, parse and validate a raw chart parameter
pub fn parse_chart_param(raw: &str) -> ChartResult<ChartData> {
    check_escapes(raw)?;
    let decoded = urlencoding::decode(raw).map_err(|e| ChartError::Decode(e.to_string()))?;
    let value: Value = serde_json::from_str(&decoded)?;
    check_shape(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Reject any `%` not followed by two hex digits
///
/// `urlencoding::decode` passes such sequences through untouched; a chart
/// parameter carrying one is treated as undecodable.
fn check_escapes(raw: &str) -> ChartResult<()> {
    let bytes = raw.as_bytes();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'%') {
        let at = pos + offset;
        match bytes.get(at + 1..at + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => pos = at + 3,
            _ => {
                return Err(ChartError::Decode(format!(
                    "malformed percent escape at byte {}",
                    at
                )))
            }
        }
    }

    Ok(())
}

/// Check that a JSON value has the `ChartData` structure
///
/// Unknown fields are ignored. `color` may be absent, null or a string.
pub fn check_shape(value: &Value) -> ChartResult<()> {
    let root = value
        .as_object()
        .ok_or_else(|| shape(format!("expected an object, found {}", kind(value))))?;

    let labels = root
        .get("labels")
        .ok_or_else(|| shape("missing field `labels`"))?
        .as_array()
        .ok_or_else(|| shape("`labels` must be an array"))?;
    if let Some(pos) = labels.iter().position(|l| !l.is_string()) {
        return Err(shape(format!("`labels[{}]` must be a string", pos)));
    }

    let datasets = root
        .get("datasets")
        .ok_or_else(|| shape("missing field `datasets`"))?
        .as_array()
        .ok_or_else(|| shape("`datasets` must be an array"))?;

    for (i, dataset) in datasets.iter().enumerate() {
        let dataset = dataset
            .as_object()
            .ok_or_else(|| shape(format!("`datasets[{}]` must be an object", i)))?;

        match dataset.get("name") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(shape(format!("`datasets[{}].name` must be a string", i))),
            None => return Err(shape(format!("`datasets[{}]` is missing `name`", i))),
        }

        let data = dataset
            .get("data")
            .ok_or_else(|| shape(format!("`datasets[{}]` is missing `data`", i)))?
            .as_array()
            .ok_or_else(|| shape(format!("`datasets[{}].data` must be an array", i)))?;
        if let Some(pos) = data.iter().position(|v| !v.is_number()) {
            return Err(shape(format!(
                "`datasets[{}].data[{}]` must be a number",
                i, pos
            )));
        }

        match dataset.get("color") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(shape(format!("`datasets[{}].color` must be a string", i))),
        }
    }

    Ok(())
}

fn shape(msg: impl Into<String>) -> ChartError {
    ChartError::Shape(msg.into())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Dataset;

    #[test]
    fn test_parse_valid() {
        let data = parse_chart_param(
            r##"{"labels":["X","Y"],"datasets":[{"name":"S","data":[1,2.5],"color":"#fff"}]}"##,
        )
        .unwrap();

        assert_eq!(
            data,
            ChartData::new(
                ["X", "Y"],
                vec![Dataset::new("S", vec![1.0, 2.5]).color("#fff")]
            )
        );
    }

    #[test]
    fn test_parse_percent_encoded() {
        let data = parse_chart_param("%7B%22labels%22%3A%5B%5D%2C%22datasets%22%3A%5B%5D%7D").unwrap();
        assert!(data.labels.is_empty());
        assert!(data.datasets.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_chart_param("not-json"), Err(ChartError::Json(_))));
        assert!(matches!(parse_chart_param("{\"labels\":"), Err(ChartError::Json(_))));
    }

    #[test]
    fn test_parse_bad_utf8() {
        assert!(matches!(parse_chart_param("%FF"), Err(ChartError::Decode(_))));
    }

    #[test]
    fn test_parse_malformed_escapes() {
        for raw in ["%", "50%", "%4", "%zz", r#"{"labels":["50%"],"datasets":[]}"#] {
            assert!(
                matches!(parse_chart_param(raw), Err(ChartError::Decode(_))),
                "expected decode error for {}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_escaped_percent_sign() {
        let data =
            parse_chart_param(r#"{"labels":["50%25"],"datasets":[{"name":"S","data":[1]}]}"#)
                .unwrap();
        assert_eq!(data.labels, vec!["50%"]);
    }

    #[test]
    fn test_shape_errors() {
        let cases = [
            r#"[["X"],[]]"#,
            r#"42"#,
            r#"{"labels":"x","datasets":[]}"#,
            r#"{"labels":["X"]}"#,
            r#"{"labels":[1],"datasets":[]}"#,
            r#"{"labels":["X"],"datasets":[["S",[1]]]}"#,
            r#"{"labels":["X"],"datasets":[{"data":[1]}]}"#,
            r#"{"labels":["X"],"datasets":[{"name":"S","data":["1"]}]}"#,
            r#"{"labels":["X"],"datasets":[{"name":"S","data":[1],"color":7}]}"#,
        ];

        for case in cases {
            assert!(
                matches!(parse_chart_param(case), Err(ChartError::Shape(_))),
                "expected shape error for {}",
                case
            );
        }
    }

    #[test]
    fn test_extra_fields_and_null_color() {
        let data = parse_chart_param(
            r#"{"title":"t","labels":["X"],"datasets":[{"name":"S","data":[1],"color":null,"dash":true}]}"#,
        )
        .unwrap();

        assert_eq!(data.datasets[0].color, None);
    }

    #[test]
    fn test_length_mismatch_passes_through() {
        let data =
            parse_chart_param(r#"{"labels":["X","Y","Z"],"datasets":[{"name":"S","data":[1]}]}"#)
                .unwrap();
        assert!(!data.is_aligned());
    }
}
