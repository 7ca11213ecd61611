use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A data item the engine can read fields from by group name
///
/// The engine never inspects an item beyond `field`. A missing field is
/// `None` and is treated as its own distinct value.
pub trait Record {
    fn field(&self, name: &str) -> Option<Value>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|obj| obj.get(name)).cloned()
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Convert a field value into the string form used for filter matching
///
/// Selections arrive as strings while fields may be numbers, booleans or
/// lists, so both sides are compared through this form.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f == 0.0 => "0".to_string(),
                    Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_form(f),
                    Some(f) if f.fract() == 0.0 => format!("{:.0}", f),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        Some(Value::Array(arr)) => arr
            .iter()
            .map(|v| match v {
                // Nested nulls render empty inside a joined list
                Value::Null => String::new(),
                other => coerce_to_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` stays as is
fn exponent_form(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

/// Turn a field value into a filter selection
/// Arrays become one entry per element; an absent field selects nothing
pub fn field_to_filter_values(value: Option<&Value>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Array(arr)) => arr.iter().map(|v| coerce_to_string(Some(v))).collect(),
        Some(other) => vec![coerce_to_string(Some(other))],
    }
}
