use facetstud_core::*;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Where the group tree comes from
#[derive(Debug, Clone)]
pub enum GroupSource {
    /// A JSON file holding one group or an array of groups
    File(PathBuf),
    /// A flat list of root groups
    Names(Vec<String>),
    /// One flat group per field of the first record
    Infer,
}

/// A failed load and the file it came from
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub error: FacetError,
}

impl LoadError {
    fn new(path: &Path, error: FacetError) -> Self {
        Self {
            path: path.to_path_buf(),
            error,
        }
    }
}

/// Session state: the loaded files and the engine filtering them
#[derive(Debug)]
pub struct AppState {
    /// Path to current data file
    pub data_file: Option<PathBuf>,
    /// Path to the group tree file, when one was used
    pub groups_file: Option<PathBuf>,
    pub engine: FacetEngine<Value>,
}

impl AppState {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            data_file: None,
            groups_file: None,
            engine: FacetEngine::with_options(options),
        }
    }

    /// Load a data file, build the group tree and bind the records
    /// On failure the error carries the file it should be reported against
    pub fn load(
        &mut self,
        data_path: &Path,
        groups: &GroupSource,
    ) -> std::result::Result<(), LoadError> {
        let records = load_records(data_path).map_err(|e| LoadError::new(data_path, e))?;

        let (configs, groups_path) = match groups {
            GroupSource::File(path) => {
                let configs = load_group_configs(path).map_err(|e| LoadError::new(path, e))?;
                (configs, path.as_path())
            }
            GroupSource::Names(names) => (GroupConfig::flat(names.iter().cloned()), data_path),
            GroupSource::Infer => (infer_group_configs(&records), data_path),
        };

        self.engine
            .init_groups(&configs)
            .map_err(|e| LoadError::new(groups_path, e))?;
        self.engine.bind_data_source(records);
        self.data_file = Some(data_path.to_path_buf());
        if let GroupSource::File(path) = groups {
            self.groups_file = Some(path.clone());
        }

        tracing::info!(
            file = %data_path.display(),
            records = self.engine.data_source().len(),
            groups = self.engine.group_names().len(),
            "data loaded"
        );
        Ok(())
    }

    /// Select the record at `index` on every root group
    /// Returns false when the index is out of range
    pub fn select_item(&mut self, index: usize) -> bool {
        match self.engine.data_source().get(index).cloned() {
            Some(item) => {
                self.engine.filter_by_item(&item);
                true
            }
            None => false,
        }
    }

    /// Apply "name=value" filters, one selection per group name
    /// Returns the group names that matched no group
    pub fn apply_filters(&mut self, filter_strings: &[String]) -> Vec<String> {
        let mut facet_map: Vec<_> = parse_facet_filters(filter_strings).into_iter().collect();
        // HashMap order is arbitrary; apply in a stable order
        facet_map.sort_by(|a, b| a.0.cmp(&b.0));

        facet_map
            .into_iter()
            .filter_map(|(name, values)| {
                if self.engine.filter_by_group(&name, values) {
                    None
                } else {
                    Some(name)
                }
            })
            .collect()
    }

    /// Title line with the data file name
    pub fn get_title(&self) -> String {
        let file_name = self
            .data_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        format!("Facet Studio - {}", file_name)
    }
}

/// Flat groups named after the first record's fields
pub fn infer_group_configs(records: &[Value]) -> Vec<GroupConfig> {
    records
        .first()
        .and_then(Value::as_object)
        .map(|obj| GroupConfig::flat(obj.keys().cloned()))
        .unwrap_or_default()
}
