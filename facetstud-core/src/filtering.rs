use crate::group::Group;
use crate::record::{coerce_to_string, Record};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Parse facet filter strings in the format "key=value" into a filter map
/// Multiple values for the same key are collected into a vector
pub fn parse_facet_filters(facet_strings: &[String]) -> HashMap<String, Vec<String>> {
    let mut facet_map = HashMap::new();

    for facet_str in facet_strings {
        if let Some((key, value)) = facet_str.split_once('=') {
            facet_map
                .entry(key.trim().to_string())
                .or_insert_with(Vec::new)
                .push(value.trim().to_string());
        }
    }

    facet_map
}

/// Equality key for distinct options. Numbers compare by value, so `38`
/// and `38.0` collapse; everything else compares as JSON text.
#[derive(Debug, PartialEq, Eq, Hash)]
enum DistinctKey {
    Absent,
    Number(String),
    Json(String),
}

impl DistinctKey {
    fn of(value: Option<Value>) -> Self {
        match value {
            None => DistinctKey::Absent,
            Some(number @ Value::Number(_)) => {
                DistinctKey::Number(coerce_to_string(Some(&number)))
            }
            Some(other) => DistinctKey::Json(other.to_string()),
        }
    }
}

/// One item per distinct value of `field`, first occurrence wins
/// Keeps the relative order of the input
pub fn distinct_by_field<T: Record + Clone>(items: &[T], field: &str) -> Vec<T> {
    let mut seen: HashSet<DistinctKey> = HashSet::new();

    items
        .iter()
        .filter(|item| seen.insert(DistinctKey::of(item.field(field))))
        .cloned()
        .collect()
}

/// Check if an item passes a selection on `field`
/// An empty selection accepts everything; otherwise any value may match
pub fn matches_filter_values<T: Record>(item: &T, field: &str, filter_values: &[String]) -> bool {
    if filter_values.is_empty() {
        return true;
    }

    let item_value = coerce_to_string(item.field(field).as_ref());
    filter_values.iter().any(|fv| *fv == item_value)
}

/// Apply one group's selection to a list of items
pub fn apply_group_filter<T: Record + Clone>(items: &[T], group: &Group<T>) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_filter_values(*item, &group.name, &group.filter_values))
        .cloned()
        .collect()
}
