//! Export configuration
//!
//! Defaults reproduce the classic Yale Bright Star Catalogue export: every
//! `V/50` star with RA, Dec and V magnitude, brightest first, written to
//! `ybsc.csv`. Any field can be overridden from a JSON file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalogs::ColumnMapping;
use crate::data::vizier::VIZIER_ASU_TSV_URL;
use crate::CatalogError;
use crate::Result;

/// VizieR identifier of the Yale Bright Star Catalogue, 5th revised edition
pub const YBSC_CATALOG: &str = "V/50";

/// Configuration for a catalog export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// VizieR catalog identifier
    pub catalog: String,
    /// Columns to request and convert
    pub columns: ColumnMapping,
    /// Sort ascending by magnitude (brightest first)
    pub sort_by_magnitude: bool,
    /// Maximum number of rows; `None` fetches everything
    pub row_limit: Option<usize>,
    /// Destination CSV file, overwritten if present
    pub output: PathBuf,
    /// ASU-TSV endpoint of the VizieR service
    pub endpoint: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            catalog: YBSC_CATALOG.to_string(),
            columns: ColumnMapping::default(),
            sort_by_magnitude: true,
            row_limit: None,
            output: PathBuf::from("ybsc.csv"),
            endpoint: VIZIER_ASU_TSV_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl ExportConfig {
    /// Load a configuration from a JSON file; absent keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        let config: ExportConfig = serde_json::from_str(&text).map_err(|e| {
            CatalogError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a query
    pub fn validate(&self) -> Result<()> {
        if self.catalog.trim().is_empty() {
            return Err(CatalogError::Config("catalog id is empty".to_string()));
        }

        let names = self.columns.names();
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(CatalogError::Config("column names must not be empty".to_string()));
        }
        let unique: HashSet<&str> = names.iter().copied().collect();
        if unique.len() != names.len() {
            return Err(CatalogError::Config(format!(
                "column names must be distinct, got {:?}",
                names
            )));
        }

        if self.timeout_secs == 0 {
            return Err(CatalogError::Config("timeout must be at least one second".to_string()));
        }
        if self.row_limit == Some(0) {
            return Err(CatalogError::Config("row limit must be positive".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(CatalogError::Config("endpoint is empty".to_string()));
        }

        Ok(())
    }
}
