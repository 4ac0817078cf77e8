//! Catalog data sources
//!
//! A [`CatalogSource`] delivers one raw catalog table per call. The live
//! source queries VizieR; [`TsvFileSource`] replays a saved ASU-TSV response
//! so exports can be reproduced offline.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalogs::CatalogTable;
use crate::CatalogError;
use crate::Result;

pub mod vizier;

pub use vizier::{parse_tsv, VizierQuery, VIZIER_ASU_TSV_URL};

/// Something that can produce a raw catalog table
pub trait CatalogSource {
    /// Human-readable description used in log messages
    fn describe(&self) -> String;

    /// Retrieve the table, with angles in catalog units
    fn fetch(&self) -> Result<CatalogTable>;
}

/// A saved VizieR ASU-TSV response on disk
#[derive(Debug, Clone)]
pub struct TsvFileSource {
    path: PathBuf,
    catalog: String,
}

impl TsvFileSource {
    pub fn new<P: AsRef<Path>>(path: P, catalog: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            catalog: catalog.into(),
        }
    }
}

impl CatalogSource for TsvFileSource {
    fn describe(&self) -> String {
        format!("catalog {} from {}", self.catalog, self.path.display())
    }

    fn fetch(&self) -> Result<CatalogTable> {
        info!("Reading {}", self.describe());
        let text = fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::UpstreamUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        parse_tsv(&self.catalog, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "#Name: V/50\n\nRAJ2000\tDEJ2000\tVmag\n\"h:m:s\"\t\"d:m:s\"\tmag\n---\t---\t---\n00 05 09.9\t+45 13 45\t6.70\n"
        )
        .unwrap();

        let source = TsvFileSource::new(file.path(), "V/50");
        let table = source.fetch().unwrap();
        assert_eq!(table.len(), 1);
        assert!(source.describe().contains("V/50"));
    }

    #[test]
    fn test_missing_file_is_upstream_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = TsvFileSource::new(dir.path().join("missing.tsv"), "V/50");
        assert!(matches!(
            source.fetch(),
            Err(CatalogError::UpstreamUnavailable(_))
        ));
    }
}
