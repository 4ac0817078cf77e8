//! End-to-end export: query, normalize, write
//!
//! The run is all-or-nothing. The output file is only touched once the
//! whole table has been converted successfully.

use log::info;
use std::path::PathBuf;

use crate::catalogs::normalize_coordinates;
use crate::config::ExportConfig;
use crate::data::{CatalogSource, VizierQuery};
use crate::writers::write_csv;
use crate::CatalogError;
use crate::Result;

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Catalog the rows came from
    pub catalog: String,
    /// Number of star rows written
    pub rows: usize,
    /// File the rows were written to
    pub output: PathBuf,
}

/// Run the export against the VizieR service described by `config`
pub fn run(config: &ExportConfig) -> Result<ExportSummary> {
    config.validate()?;
    let query = VizierQuery::from_config(config);
    run_with_source(&query, config)
}

/// Run the export against any catalog source
pub fn run_with_source<S: CatalogSource + ?Sized>(
    source: &S,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    let raw = source.fetch()?;
    if raw.is_empty() {
        return Err(CatalogError::UpstreamUnavailable(format!(
            "{} returned no rows",
            source.describe()
        )));
    }
    info!(
        "Fetched {} rows with columns {:?}",
        raw.len(),
        raw.columns()
    );

    let normalized = normalize_coordinates(raw, &config.columns)?;
    info!("Converted right ascension and declination to radians");

    let rows = write_csv(&normalized, &config.output)?;

    Ok(ExportSummary {
        catalog: normalized.catalog().to_string(),
        rows,
        output: config.output.clone(),
    })
}
