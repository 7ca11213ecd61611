use crate::error::{FacetError, Result};
use crate::models::GroupConfig;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a group forest from a JSON file
pub fn load_group_configs<P: AsRef<Path>>(path: P) -> Result<Vec<GroupConfig>> {
    let contents = fs::read_to_string(path)?;
    parse_group_configs(&contents)
}

/// Parse a group forest from JSON text
/// Accepts either an array of groups or a single root group
pub fn parse_group_configs(contents: &str) -> Result<Vec<GroupConfig>> {
    let value: Value = serde_json::from_str(contents)?;
    let configs: Vec<GroupConfig> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(configs)
}

/// Load a data collection (a JSON array of records) from a file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    parse_records(&contents)
}

/// Parse a data collection from JSON text
pub fn parse_records(contents: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Array(items) => Ok(items),
        other => Err(FacetError::NotAnArray {
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
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
    use serde_json::json;

    #[test]
    fn test_parse_group_array() {
        let configs = parse_group_configs(r#"[{"name": "name"}, {"name": "age"}]"#).unwrap();
        assert_eq!(configs, GroupConfig::flat(["name", "age"]));
    }

    #[test]
    fn test_parse_single_root_group() {
        let configs = parse_group_configs(
            r#"{"name": "name", "subGroupConfigs": [{"name": "age"}]}"#,
        )
        .unwrap();
        assert_eq!(configs, GroupConfig::chain(["name", "age"]));
    }

    #[test]
    fn test_parse_group_missing_name() {
        let result = parse_group_configs(r#"[{"subGroupConfigs": []}]"#);
        assert!(matches!(result, Err(FacetError::Json(_))));
    }

    #[test]
    fn test_parse_records() {
        let records = parse_records(r#"[{"name": "Joe", "age": 17}]"#).unwrap();
        assert_eq!(records, vec![json!({"name": "Joe", "age": 17})]);
    }

    #[test]
    fn test_parse_records_rejects_object() {
        let err = parse_records(r#"{"name": "Joe"}"#).unwrap_err();
        assert!(matches!(err, FacetError::NotAnArray { .. }));
        assert_eq!(
            err.to_string(),
            "expected a JSON array of records, found an object"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_records("/nonexistent/facetstud/data.json");
        assert!(matches!(result, Err(FacetError::Io(_))));
    }
}
