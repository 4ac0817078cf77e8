//! ybsc-export: Yale Bright Star Catalogue export with coordinates in radians
//!
//! This crate queries the VizieR catalog service for star positions and
//! magnitudes, converts right ascension (hour-angle) and declination
//! (degrees) into radians, and writes the resulting table as CSV.

use std::path::PathBuf;
use thiserror::Error;

pub mod catalogs;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod data;
pub mod pipeline;
pub mod writers;

// Re-export commonly used types
pub use catalogs::{normalize_coordinates, CatalogTable, Cell, ColumnMapping, StarRecord};
pub use config::ExportConfig;
pub use data::{CatalogSource, TsvFileSource, VizierQuery};
pub use pipeline::{run, run_with_source, ExportSummary};

/// Main error type for the ybsc-export library
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog service could not be reached or returned no data
    #[error("Catalog service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A required column is absent or a cell is missing or non-numeric
    #[error("Malformed input{}: column '{column}': {reason}", row_suffix(.row))]
    MalformedInput {
        row: Option<usize>,
        column: String,
        reason: String,
    },

    /// The output file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" at row {}", r)).unwrap_or_default()
}

impl CatalogError {
    /// Shorthand for a malformed cell in a given row
    pub fn malformed_cell(row: usize, column: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedInput {
            row: Some(row),
            column: column.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a problem with a whole column
    pub fn malformed_column(column: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedInput {
            row: None,
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for ybsc-export operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_includes_row() {
        let err = CatalogError::malformed_cell(3, "DEJ2000", "missing value");
        assert_eq!(
            err.to_string(),
            "Malformed input at row 3: column 'DEJ2000': missing value"
        );

        let err = CatalogError::malformed_column("Vmag", "column not found");
        assert_eq!(
            err.to_string(),
            "Malformed input: column 'Vmag': column not found"
        );
    }

    #[test]
    fn test_write_failure_message() {
        let err = CatalogError::WriteFailure {
            path: PathBuf::from("/nope/ybsc.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().starts_with("Failed to write /nope/ybsc.csv"));
    }
}
