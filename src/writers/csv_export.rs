//! CSV export of catalog tables
//!
//! One header row with the column names, then one row per star. Numbers are
//! written in Rust's shortest round-trip form, so reading the file back
//! yields the exact `f64` values; text cells are written as received.

use log::info;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::catalogs::CatalogTable;
use crate::CatalogError;
use crate::Result;

/// Write `table` to `path`, replacing any existing file
///
/// The data goes to a uniquely named temporary file in the same directory
/// and is persisted over `path` once complete, so a failed export never
/// leaves a truncated file and never touches other files. Returns the
/// number of data rows written.
pub fn write_csv<P: AsRef<Path>>(table: &CatalogTable, path: P) -> Result<usize> {
    let path = path.as_ref();
    let write_failure = |source: io::Error| CatalogError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Dropping the temporary file on any error path removes it
    let mut temp = NamedTempFile::new_in(dir).map_err(write_failure)?;
    let count = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let count = write_records(table, &mut writer).map_err(write_failure)?;
        writer.flush().map_err(write_failure)?;
        count
    };

    temp.persist(path).map_err(|e| write_failure(e.error))?;

    info!("Wrote {} rows to {}", count, path.display());
    Ok(count)
}

/// Write `table` as CSV to any writer
///
/// There is no output path here, so writer failures surface as
/// [`CatalogError::IoError`] rather than `WriteFailure`.
pub fn write_csv_to<W: Write>(table: &CatalogTable, writer: W) -> Result<usize> {
    Ok(write_records(table, writer)?)
}

fn write_records<W: Write>(table: &CatalogTable, writer: W) -> io::Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer.flush()?;

    Ok(table.len())
}
