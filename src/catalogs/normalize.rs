//! Coordinate normalization
//!
//! Replaces the right ascension (hour-angle) and declination (degree)
//! columns of a catalog table with radians. Column names, column order,
//! row order and all other cells are carried over unchanged.

use log::{debug, warn};

use super::table::{AngleUnits, CatalogTable, Cell};
use super::ColumnMapping;
use crate::coordinates::{
    is_valid_declination, is_valid_hourangle, parse_degrees, parse_hourangle, Angle,
    SexagesimalError,
};
use crate::CatalogError;
use crate::Result;

/// Unit string written for converted columns
pub const RADIAN_UNIT: &str = "rad";

/// Convert the angular columns of `table` to radians
///
/// The table is consumed and a new one returned; a table whose angles are
/// already in radians is rejected, as converting twice would be wrong.
/// Missing or unparseable values abort with `MalformedInput` rather than
/// dropping the row.
pub fn normalize_coordinates(
    table: CatalogTable,
    mapping: &ColumnMapping,
) -> Result<CatalogTable> {
    if table.angle_units() == AngleUnits::Radians {
        return Err(CatalogError::malformed_column(
            &mapping.ra,
            "coordinates are already in radians",
        ));
    }

    let ra_index = table.column_index(&mapping.ra)?;
    let dec_index = table.column_index(&mapping.dec)?;
    let mag_index = table.column_index(&mapping.magnitude)?;

    let (mut normalized, rows) = table.take_rows();
    let mut out_of_domain = 0usize;

    for (row_index, mut row) in rows.into_iter().enumerate() {
        let ra = angle_from_cell(
            &row[ra_index],
            row_index,
            &mapping.ra,
            parse_hourangle,
            Angle::from_hours,
        )?;
        let dec = angle_from_cell(
            &row[dec_index],
            row_index,
            &mapping.dec,
            parse_degrees,
            Angle::from_degrees,
        )?;

        if row[mag_index].as_number().is_none() {
            let reason = if row[mag_index].is_missing() {
                "missing value"
            } else {
                "value is not numeric"
            };
            return Err(CatalogError::malformed_cell(
                row_index,
                &mapping.magnitude,
                reason,
            ));
        }

        if !is_valid_hourangle(ra.to_hours()) || !is_valid_declination(dec.to_degrees()) {
            if out_of_domain == 0 {
                warn!(
                    "Row {} has coordinates outside the expected domain: RA {}h, Dec {}°",
                    row_index,
                    ra.to_hours(),
                    dec.to_degrees()
                );
            }
            out_of_domain += 1;
        }

        row[ra_index] = Cell::Number(ra.to_radians());
        row[dec_index] = Cell::Number(dec.to_radians());
        normalized.push_row(row)?;
    }

    if out_of_domain > 1 {
        warn!(
            "{} rows in total had out-of-domain coordinates; converted as given",
            out_of_domain
        );
    }

    normalized.set_unit(ra_index, RADIAN_UNIT);
    normalized.set_unit(dec_index, RADIAN_UNIT);
    debug!(
        "Normalized {} rows of {} to radians",
        normalized.len(),
        normalized.catalog()
    );

    Ok(normalized.with_angle_units(AngleUnits::Radians))
}

/// Read an angle from a cell, parsing text in the column's input unit
fn angle_from_cell(
    cell: &Cell,
    row: usize,
    column: &str,
    parse: fn(&str) -> std::result::Result<Angle, SexagesimalError>,
    from_number: fn(f64) -> Angle,
) -> Result<Angle> {
    match cell {
        Cell::Missing => Err(CatalogError::malformed_cell(row, column, "missing value")),
        Cell::Text(text) => {
            parse(text).map_err(|e| CatalogError::malformed_cell(row, column, e.to_string()))
        }
        Cell::Number(value) if value.is_finite() => Ok(from_number(*value)),
        Cell::Number(value) => Err(CatalogError::malformed_cell(
            row,
            column,
            format!("{} is not a finite number", value),
        )),
    }
}
