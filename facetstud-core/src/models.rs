use serde::{Deserialize, Serialize};

/// Static description of one facet group and its ordered sub-groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    #[serde(
        rename = "subGroupConfigs",
        alias = "sub_group_configs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_group_configs: Option<Vec<GroupConfig>>,
}

impl GroupConfig {
    /// A leaf group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_group_configs: None,
        }
    }

    /// Attach child groups, replacing any already set
    pub fn with_sub_groups(mut self, sub_groups: Vec<GroupConfig>) -> Self {
        self.sub_group_configs = Some(sub_groups);
        self
    }

    /// Build a flat list of leaf groups from names
    pub fn flat<I, S>(names: I) -> Vec<GroupConfig>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(GroupConfig::new).collect()
    }

    /// Build a single chain where each name is the only child of the previous one
    pub fn chain<I, S>(names: I) -> Vec<GroupConfig>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut chain: Option<GroupConfig> = None;

        for name in names.into_iter().rev() {
            let mut group = GroupConfig::new(name);
            if let Some(child) = chain.take() {
                group.sub_group_configs = Some(vec![child]);
            }
            chain = Some(group);
        }

        chain.into_iter().collect()
    }
}

/// Engine behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Run a recompute pass from `init_groups` when data is already bound
    pub recompute_on_init: bool,
    /// Refuse to build a group tree containing duplicate or empty names
    pub reject_duplicate_names: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            recompute_on_init: true,
            reject_duplicate_names: false,
        }
    }
}
