//! The reactive facet engine.
//!
//! [`FacetEngine`] owns a data collection and a group tree. Every mutation
//! (binding data, changing a selection) runs one synchronous recompute pass
//! that republishes each group's available items and the filtered result.
//!
//! # Recompute pass
//!
//! Groups are visited in pre-order. At each level every sibling publishes
//! its options from the same input the level received, so a sibling's
//! selection never shrinks another sibling's option list (or its own). The
//! result is narrowed group by group, and a group's children receive the
//! data narrowed by everything visited so far, including the group itself.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::channel::Channel;
use crate::error::{FacetError, Result};
use crate::filtering::{apply_group_filter, distinct_by_field};
use crate::group::{
    build_group_tree, find_group, find_group_mut, flatten_group_tree, for_each_group_mut, Group,
};
use crate::models::{EngineOptions, GroupConfig};
use crate::record::{field_to_filter_values, Record};
use crate::validation::validate_group_configs;

/// Multi-select facet filter over a collection of `T`
#[derive(Debug)]
pub struct FacetEngine<T> {
    data_source: Vec<T>,
    data_bound: bool,
    group_instances: Vec<Group<T>>,
    result_stream: Channel<Vec<T>>,
    options: EngineOptions,
}

impl<T: Record + Clone + 'static> Default for FacetEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone + 'static> FacetEngine<T> {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            data_source: Vec::new(),
            data_bound: false,
            group_instances: Vec::new(),
            result_stream: Channel::new(Vec::new()),
            options,
        }
    }

    /// Replace the group tree. All previous selections are discarded.
    ///
    /// With `reject_duplicate_names` set, an invalid forest is refused and
    /// the previous tree stays in place. With `recompute_on_init` set and
    /// data already bound, the new tree is populated right away.
    pub fn init_groups(&mut self, configs: &[GroupConfig]) -> Result<()> {
        if self.options.reject_duplicate_names {
            validate_group_configs(configs)
                .map_err(|errors| FacetError::InvalidGroups { errors })?;
        }

        self.group_instances = build_group_tree(configs);
        debug!(
            roots = self.group_instances.len(),
            groups = flatten_group_tree(&self.group_instances).len(),
            "group tree built"
        );

        if self.options.recompute_on_init && self.data_bound {
            self.execute();
        }
        Ok(())
    }

    /// Replace the data collection and recompute
    pub fn bind_data_source(&mut self, data: Vec<T>) {
        self.data_source = data;
        self.data_bound = true;
        self.execute();
    }

    /// Set the selection of the first group named `group_name` and recompute
    ///
    /// Returns `false` without touching anything when no group has that name.
    pub fn filter_by_group<I, S>(&mut self, group_name: &str, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match find_group_mut(&mut self.group_instances, group_name) {
            Some(group) => {
                group.filter_values = values.into_iter().map(Into::into).collect();
                trace!(group = group_name, values = ?group.filter_values, "selection changed");
                self.execute();
                true
            }
            None => {
                debug!(group = group_name, "filter ignored, no such group");
                false
            }
        }
    }

    /// Select, on every root group, the value `item` holds for that group
    ///
    /// Sub-groups keep their selections. A root group whose field is absent
    /// on `item` is cleared.
    pub fn filter_by_item(&mut self, item: &T) {
        for group in self.group_instances.iter_mut() {
            group.filter_values = field_to_filter_values(item.field(&group.name).as_ref());
        }
        self.execute();
    }

    /// Empty every selection at every level and recompute
    pub fn clear_filters(&mut self) {
        for_each_group_mut(&mut self.group_instances, &mut |g| g.filter_values.clear());
        self.execute();
    }

    /// Every group's option channel keyed by name
    /// With duplicate names the last node in pre-order wins
    pub fn groups(&self) -> HashMap<String, Channel<Vec<T>>> {
        flatten_group_tree(&self.group_instances)
            .into_iter()
            .map(|g| (g.name.clone(), g.items.clone()))
            .collect()
    }

    /// Option channel of the first group named `name`
    pub fn group_items(&self, name: &str) -> Option<Channel<Vec<T>>> {
        find_group(&self.group_instances, name).map(|g| g.items.clone())
    }

    pub fn result(&self) -> Channel<Vec<T>> {
        self.result_stream.clone()
    }

    pub fn group_names(&self) -> Vec<String> {
        flatten_group_tree(&self.group_instances)
            .into_iter()
            .map(|g| g.name.clone())
            .collect()
    }

    pub fn root_groups(&self) -> &[Group<T>] {
        &self.group_instances
    }

    pub fn filter_values(&self, name: &str) -> Option<Vec<String>> {
        find_group(&self.group_instances, name).map(|g| g.filter_values.clone())
    }

    /// Non-empty selections in pre-order
    pub fn active_filters(&self) -> Vec<(String, Vec<String>)> {
        flatten_group_tree(&self.group_instances)
            .into_iter()
            .filter(|g| !g.filter_values.is_empty())
            .map(|g| (g.name.clone(), g.filter_values.clone()))
            .collect()
    }

    pub fn data_source(&self) -> &[T] {
        &self.data_source
    }

    fn execute(&self) {
        let result = filter_data_source(&self.data_source, &self.group_instances);
        debug!(
            items = self.data_source.len(),
            result = result.len(),
            "facets recomputed"
        );
        self.result_stream.publish(result);
    }
}

/// Publish options for one level of groups and return the narrowed data
fn filter_data_source<T: Record + Clone + 'static>(
    data_source: &[T],
    groups: &[Group<T>],
) -> Vec<T> {
    groups.iter().fold(data_source.to_vec(), |working, group| {
        set_group_options(data_source, group);
        let filtered = apply_group_filter(&working, group);
        match group.sub_groups {
            Some(ref children) => filter_data_source(&filtered, children),
            None => filtered,
        }
    })
}

fn set_group_options<T: Record + Clone + 'static>(data_source: &[T], group: &Group<T>) {
    let options = distinct_by_field(data_source, &group.name);
    trace!(group = %group.name, available = options.len(), "group options");
    group.items.publish(options);
}
