use crate::channel::Channel;
use crate::models::GroupConfig;

/// Runtime node of the group tree
///
/// Holds the active selection for one facet and the channel publishing the
/// items still available at this node.
#[derive(Debug)]
pub struct Group<T> {
    pub name: String,
    /// Active selection; empty accepts everything
    pub filter_values: Vec<String>,
    pub items: Channel<Vec<T>>,
    pub sub_groups: Option<Vec<Group<T>>>,
}

impl<T: Clone + 'static> Group<T> {
    /// Build a node and its children from a config, depth-first, keeping order
    pub fn from_config(config: &GroupConfig) -> Self {
        Self {
            name: config.name.clone(),
            filter_values: Vec::new(),
            items: Channel::new(Vec::new()),
            sub_groups: config
                .sub_group_configs
                .as_ref()
                .map(|subs| subs.iter().map(Group::from_config).collect()),
        }
    }
}

/// Build the whole forest from root configs
pub fn build_group_tree<T: Clone + 'static>(configs: &[GroupConfig]) -> Vec<Group<T>> {
    configs.iter().map(Group::from_config).collect()
}

/// All nodes in pre-order: each node before its children, children in order
pub fn flatten_group_tree<T>(groups: &[Group<T>]) -> Vec<&Group<T>> {
    let mut nodes = Vec::new();
    flatten_into(groups, &mut nodes);
    nodes
}

fn flatten_into<'a, T>(groups: &'a [Group<T>], nodes: &mut Vec<&'a Group<T>>) {
    for group in groups {
        nodes.push(group);
        if let Some(ref children) = group.sub_groups {
            flatten_into(children, nodes);
        }
    }
}

/// First node named `name` in pre-order
pub fn find_group<'a, T>(groups: &'a [Group<T>], name: &str) -> Option<&'a Group<T>> {
    flatten_group_tree(groups).into_iter().find(|g| g.name == name)
}

/// Mutable variant of [`find_group`], same first-match order
pub fn find_group_mut<'a, T>(groups: &'a mut [Group<T>], name: &str) -> Option<&'a mut Group<T>> {
    for group in groups.iter_mut() {
        if group.name == name {
            return Some(group);
        }
        if let Some(ref mut children) = group.sub_groups {
            if let Some(found) = find_group_mut(children, name) {
                return Some(found);
            }
        }
    }
    None
}

/// Apply `f` to every node in pre-order
pub fn for_each_group_mut<T>(groups: &mut [Group<T>], f: &mut impl FnMut(&mut Group<T>)) {
    for group in groups.iter_mut() {
        f(group);
        if let Some(ref mut children) = group.sub_groups {
            for_each_group_mut(children, f);
        }
    }
}
