// Public modules
pub mod channel;
pub mod engine;
pub mod error;
pub mod filtering;
pub mod group;
pub mod io;
pub mod models;
pub mod record;
pub mod validation;

// Re-export commonly used types for convenience
pub use channel::{Channel, Subscription};
pub use engine::FacetEngine;
pub use error::{FacetError, Result};
pub use filtering::{
    apply_group_filter, distinct_by_field, matches_filter_values, parse_facet_filters,
};
pub use group::{build_group_tree, find_group, flatten_group_tree, Group};
pub use io::{load_group_configs, load_records, parse_group_configs, parse_records};
pub use models::{EngineOptions, GroupConfig};
pub use record::{coerce_to_string, field_to_filter_values, Record};
pub use validation::validate_group_configs;
