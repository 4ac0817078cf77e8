//! In-memory catalog table
//!
//! A `CatalogTable` holds the result of one catalog query: ordered column
//! names, the unit string reported for each column, and rows of cells.

use std::fmt;

use super::{ColumnMapping, StarRecord};
use crate::CatalogError;
use crate::Result;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value was supplied
    Missing,
    /// Text exactly as delivered by the catalog service
    Text(String),
    /// A converted numeric value
    Number(f64),
}

impl Cell {
    /// Build a cell from raw upstream text; blank text is `Missing`
    pub fn from_raw(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Numeric value of the cell, parsing text if needed
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Missing => None,
            Cell::Text(text) => text.parse::<f64>().ok().filter(|v| v.is_finite()),
            Cell::Number(value) => Some(*value),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::from_raw(text)
    }
}

/// Units of the right ascension and declination columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnits {
    /// As published: right ascension in hour-angle, declination in degrees
    Catalog,
    /// Both angular columns in radians
    Radians,
}

/// Tabular catalog query result
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    catalog: String,
    columns: Vec<String>,
    units: Vec<String>,
    rows: Vec<Vec<Cell>>,
    angle_units: AngleUnits,
}

impl CatalogTable {
    /// Create an empty table in catalog units
    pub fn new(catalog: impl Into<String>, columns: Vec<String>) -> Self {
        let units = vec![String::new(); columns.len()];
        Self {
            catalog: catalog.into(),
            columns,
            units,
            rows: Vec::new(),
            angle_units: AngleUnits::Catalog,
        }
    }

    /// Attach the per-column unit strings reported by the service
    pub fn with_units(mut self, units: Vec<String>) -> Result<Self> {
        if units.len() != self.columns.len() {
            return Err(CatalogError::malformed_column(
                "<units>",
                format!(
                    "{} unit entries for {} columns",
                    units.len(),
                    self.columns.len()
                ),
            ));
        }
        self.units = units;
        Ok(self)
    }

    /// Mark which units the angular columns are expressed in
    pub fn with_angle_units(mut self, angle_units: AngleUnits) -> Self {
        self.angle_units = angle_units;
        self
    }

    /// Append a row; its width must match the column count
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(CatalogError::MalformedInput {
                row: Some(self.rows.len()),
                column: "<row>".to_string(),
                reason: format!(
                    "expected {} cells, found {}",
                    self.columns.len(),
                    row.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn angle_units(&self) -> AngleUnits {
        self.angle_units
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| CatalogError::malformed_column(name, "column not found"))
    }

    /// Split the table into its metadata (with no rows) and its rows
    pub(crate) fn take_rows(self) -> (CatalogTable, Vec<Vec<Cell>>) {
        let CatalogTable {
            catalog,
            columns,
            units,
            rows,
            angle_units,
        } = self;
        let empty = CatalogTable {
            catalog,
            columns,
            units,
            rows: Vec::with_capacity(rows.len()),
            angle_units,
        };
        (empty, rows)
    }

    pub(crate) fn set_unit(&mut self, index: usize, unit: &str) {
        if let Some(slot) = self.units.get_mut(index) {
            *slot = unit.to_string();
        }
    }

    /// Typed view of the three star columns
    ///
    /// Every mapped cell must hold a number (or numeric text); values are
    /// returned in whatever units the table currently uses.
    pub fn records(&self, mapping: &ColumnMapping) -> Result<Vec<StarRecord>> {
        let ra = self.column_index(&mapping.ra)?;
        let dec = self.column_index(&mapping.dec)?;
        let mag = self.column_index(&mapping.magnitude)?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| -> Result<StarRecord> {
                let number = |index: usize, name: &str| {
                    row[index].as_number().ok_or_else(|| {
                        CatalogError::malformed_cell(row_index, name, "value is not numeric")
                    })
                };
                Ok(StarRecord {
                    ra: number(ra, &mapping.ra)?,
                    dec: number(dec, &mapping.dec)?,
                    magnitude: number(mag, &mapping.magnitude)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        vec!["RAJ2000".into(), "DEJ2000".into(), "Vmag".into()]
    }

    #[test]
    fn test_cell_from_raw() {
        assert_eq!(Cell::from_raw("  "), Cell::Missing);
        assert_eq!(Cell::from_raw(" 6.70 "), Cell::Text("6.70".to_string()));
        assert_eq!(Cell::from_raw("6.70").as_number(), Some(6.7));
        assert_eq!(Cell::from_raw("00 05 09.9").as_number(), None);
        assert_eq!(Cell::Missing.to_string(), "");
        assert_eq!(Cell::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = CatalogTable::new("V/50", columns());
        table
            .push_row(vec!["0".into(), "0".into(), "1.0".into()])
            .unwrap();

        let err = table.push_row(vec!["0".into(), "0".into()]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedInput { row: Some(1), .. }
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_column_lookup() {
        let table = CatalogTable::new("V/50", columns());
        assert_eq!(table.column_index("DEJ2000").unwrap(), 1);
        assert!(table.column_index("pmRA").is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_units_must_match_columns() {
        let table = CatalogTable::new("V/50", columns());
        assert!(table
            .clone()
            .with_units(vec!["h:m:s".into(), "d:m:s".into(), "mag".into()])
            .is_ok());
        assert!(table.with_units(vec!["mag".into()]).is_err());
    }

    #[test]
    fn test_records_view() {
        let mut table = CatalogTable::new("V/50", columns());
        table
            .push_row(vec![Cell::Number(1.0), Cell::Number(-0.5), "2.5".into()])
            .unwrap();

        let records = table.records(&ColumnMapping::default()).unwrap();
        assert_eq!(
            records,
            vec![StarRecord {
                ra: 1.0,
                dec: -0.5,
                magnitude: 2.5
            }]
        );
        assert_eq!(table.rows()[0][2], Cell::Text("2.5".into()));
    }
}
