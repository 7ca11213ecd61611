use anyhow::{Context, Result};
use clap::Parser;
use facetstud_core::EngineOptions;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod errors;
mod state;
mod ui;

use errors::map_file_load_error;
use state::{AppState, GroupSource, LoadError};
use ui::{build_report, format_active_filters, format_group_options, format_results};

/// Facet Studio - Multi-select faceted filtering over a JSON data file
///
/// Examples:
///   # Groups inferred from the first record's fields
///   facetstud people.json
///
///   # Flat groups (siblings never narrow each other's options)
///   facetstud people.json --group name --group age --filter name=Tom
///
///   # Nested groups from a file (children see their parent's selection)
///   facetstud people.json --groups groups.json --filter name=Tom --filter height=185
///
///   # Select every root group's value from the third record
///   facetstud people.json --groups groups.json --select-item 2
#[derive(Parser, Debug)]
#[command(name = "facetstud")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Multiple --filter values for the SAME group are combined with OR\n  \
    - Different groups are combined with AND\n  \
    - A group's options ignore its own selection and its siblings' selections\n  \
    - Sub-groups only offer options left by their ancestors' selections\n\n\
Group files:\n  \
    - JSON: {\"name\": \"...\", \"subGroupConfigs\": [...]} or an array of those")]
struct Cli {
    /// Path to a JSON file holding an array of records
    #[arg(value_name = "FILE")]
    data: PathBuf,

    /// Path to a JSON group tree
    #[arg(short = 'g', long = "groups", value_name = "FILE", conflicts_with = "group")]
    groups_file: Option<PathBuf>,

    /// Add a flat root group (can be specified multiple times)
    #[arg(short = 'G', long = "group", value_name = "NAME")]
    group: Vec<String>,

    /// Filter a group (format: group_name=value, can be specified multiple times)
    #[arg(short, long = "filter", value_name = "NAME=VALUE")]
    filters: Vec<String>,

    /// Select the record at INDEX on every root group before applying --filter
    #[arg(short = 'i', long = "select-item", value_name = "INDEX")]
    select_item: Option<usize>,

    /// Print a JSON report instead of markdown
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Reject group trees with empty or duplicate names
    #[arg(long)]
    strict: bool,

    /// Do not recompute when the group tree is rebuilt over bound data
    #[arg(long)]
    no_recompute_on_init: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = EngineOptions {
        recompute_on_init: !cli.no_recompute_on_init,
        reject_duplicate_names: cli.strict,
    };
    let mut state = AppState::new(options);

    let groups = match (&cli.groups_file, cli.group.is_empty()) {
        (Some(path), _) => GroupSource::File(path.clone()),
        (None, false) => GroupSource::Names(cli.group.clone()),
        (None, true) => GroupSource::Infer,
    };

    if let Err(LoadError { path, error }) = state.load(&cli.data, &groups) {
        let (title, message, details) = map_file_load_error(&error, &path);
        eprintln!("{}: {}\n\n{}", title, message, details);
        process::exit(1);
    }

    if let Some(index) = cli.select_item {
        if !state.select_item(index) {
            anyhow::bail!(
                "--select-item {} is out of range ({} records)",
                index,
                state.engine.data_source().len()
            );
        }
    }

    // Check for invalid filter formats and warn
    for filter_str in &cli.filters {
        if !filter_str.contains('=') {
            eprintln!("Warning: Invalid filter format '{}'. Expected 'name=value'", filter_str);
        }
    }

    for unknown in state.apply_filters(&cli.filters) {
        eprintln!("Warning: No group named '{}'; filter ignored", unknown);
    }

    if cli.json {
        let report = build_report(&state.engine);
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("# {}\n", state.get_title());
        if let Some(ref groups_file) = state.groups_file {
            println!("**Groups:** {}\n", groups_file.display());
        }
        print!("{}", format_active_filters(&state.engine));
        println!("{}", format_group_options(&state.engine));
        print!("{}", format_results(&state.engine.result().get()));
    }

    Ok(())
}
