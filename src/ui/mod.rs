pub mod formatting;

pub use formatting::{build_report, format_active_filters, format_group_options, format_results};
