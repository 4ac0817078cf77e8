//! Export the Yale Bright Star Catalogue with coordinates in radians
//!
//! Run without arguments to fetch every `V/50` star from VizieR and write
//! `ybsc.csv`. Flags override individual settings; `--config` loads a JSON
//! file of overrides first.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ybsc_export::{run_with_source, CatalogSource, ExportConfig, TsvFileSource, VizierQuery};

#[derive(Parser, Debug)]
#[command(name = "ybsc_export", version, about = "Export star catalog positions in radians")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// VizieR catalog identifier
    #[arg(long)]
    catalog: Option<String>,

    /// Output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// VizieR ASU-TSV endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum number of rows to fetch
    #[arg(long)]
    row_limit: Option<usize>,

    /// Read a saved ASU-TSV response instead of querying VizieR
    #[arg(long)]
    input: Option<PathBuf>,

    /// Keep the service's row order instead of sorting by magnitude
    #[arg(long)]
    no_sort: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Also installs the bridge that forwards `log` records from the library
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Apply command-line overrides on top of a base configuration
fn apply_overrides(cli: &Cli, mut config: ExportConfig) -> ExportConfig {
    if let Some(catalog) = &cli.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if cli.row_limit.is_some() {
        config.row_limit = cli.row_limit;
    }
    if cli.no_sort {
        config.sort_by_magnitude = false;
    }
    config
}

fn load_config(cli: &Cli) -> ybsc_export::Result<ExportConfig> {
    let base = match &cli.config {
        Some(path) => ExportConfig::from_json_file(path)?,
        None => ExportConfig::default(),
    };
    let config = apply_overrides(cli, base);
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let source: Box<dyn CatalogSource> = match &cli.input {
        Some(path) => Box::new(TsvFileSource::new(path, config.catalog.clone())),
        None => Box::new(VizierQuery::from_config(&config)),
    };

    match run_with_source(&*source, &config) {
        Ok(summary) => {
            info!(
                "Exported {} stars from {} to {}",
                summary.rows,
                summary.catalog,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
