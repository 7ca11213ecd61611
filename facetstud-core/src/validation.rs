use crate::models::GroupConfig;
use std::collections::HashMap;

/// Validate a group forest
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_group_configs(configs: &[GroupConfig]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, String> = HashMap::new();

    validate_group_nodes(configs, "", &mut seen, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_group_nodes<'a>(
    configs: &'a [GroupConfig],
    parent_path: &str,
    seen: &mut HashMap<&'a str, String>,
    errors: &mut Vec<String>,
) {
    for (idx, config) in configs.iter().enumerate() {
        let path = if parent_path.is_empty() {
            format!("#{}", idx + 1)
        } else {
            format!("{}/#{}", parent_path, idx + 1)
        };

        if config.name.trim().is_empty() {
            errors.push(format!("Group {}: name cannot be empty", path));
        } else if let Some(first) = seen.get(config.name.as_str()) {
            // Lookups match by name only, so a second node could never be addressed
            errors.push(format!(
                "Group {}: duplicate name '{}' (first defined at {})",
                path, config.name, first
            ));
        } else {
            seen.insert(config.name.as_str(), path.clone());
        }

        if let Some(children) = &config.sub_group_configs {
            validate_group_nodes(children, &path, seen, errors);
        }
    }
}
