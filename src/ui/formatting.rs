use colored::Colorize;
use facetstud_core::{coerce_to_string, FacetEngine, Group, Record};
use serde::Serialize;
use serde_json::Value;

/// One group of the JSON report
#[derive(Debug, Serialize, PartialEq)]
pub struct GroupReport {
    pub name: String,
    pub depth: usize,
    pub selected: Vec<String>,
    pub options: Vec<String>,
}

/// Machine-readable snapshot of an engine
#[derive(Debug, Serialize)]
pub struct Report {
    pub groups: Vec<GroupReport>,
    pub result: Vec<Value>,
}

/// Option values a group currently offers, in published order
fn option_values(group: &Group<Value>) -> Vec<String> {
    group.items.with(|items| {
        items
            .iter()
            .map(|item| coerce_to_string(item.field(&group.name).as_ref()))
            .collect()
    })
}

/// Format the option list of every group, indented by tree depth
pub fn format_group_options(engine: &FacetEngine<Value>) -> String {
    let mut out = String::from("## Available Options\n\n");

    for group in engine.root_groups() {
        format_group(group, 0, &mut out);
    }

    out
}

fn format_group(group: &Group<Value>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    out.push_str(&format!("{}- **{}**\n", indent, group.name));
    for value in option_values(group) {
        if group.filter_values.contains(&value) {
            out.push_str(&format!("{}  - [x] {}\n", indent, value.green().bold()));
        } else {
            out.push_str(&format!("{}  - [ ] {}\n", indent, value));
        }
    }

    if let Some(ref children) = group.sub_groups {
        for child in children {
            format_group(child, depth + 1, out);
        }
    }
}

/// Format active selections, empty when nothing is selected
pub fn format_active_filters(engine: &FacetEngine<Value>) -> String {
    let active = engine.active_filters();
    if active.is_empty() {
        return String::new();
    }

    let mut out = String::from("## Active Filters\n\n");
    for (name, values) in active {
        out.push_str(&format!("- **{}:** {}\n", name, values.join(" OR ")));
    }
    out.push('\n');
    out
}

/// Format the filtered result set
pub fn format_results(items: &[Value]) -> String {
    let mut out = format!("## Results\n\n**Matching Items:** {}\n\n", items.len());

    if items.is_empty() {
        out.push_str("_No items match the specified filters._\n");
    } else {
        for item in items {
            out.push_str(&format!("- {}\n", item));
        }
    }

    out
}

/// Snapshot groups (pre-order) and result for JSON output
pub fn build_report(engine: &FacetEngine<Value>) -> Report {
    let mut groups = Vec::new();
    collect_groups(engine.root_groups(), 0, &mut groups);

    Report {
        groups,
        result: engine.result().get(),
    }
}

fn collect_groups(groups: &[Group<Value>], depth: usize, out: &mut Vec<GroupReport>) {
    for group in groups {
        out.push(GroupReport {
            name: group.name.clone(),
            depth,
            selected: group.filter_values.clone(),
            options: option_values(group),
        });
        if let Some(ref children) = group.sub_groups {
            collect_groups(children, depth + 1, out);
        }
    }
}
