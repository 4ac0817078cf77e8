//! Star catalog tables
//!
//! This module holds the in-memory representation of a catalog query
//! result and the normalization step that rewrites its angular columns
//! in radians.

use serde::{Deserialize, Serialize};

pub mod normalize;
pub mod table;

pub use normalize::{normalize_coordinates, RADIAN_UNIT};
pub use table::{AngleUnits, CatalogTable, Cell};

/// One star: position and apparent visual magnitude
///
/// Units follow the table the record was read from: hour-angle and
/// degrees before normalization, radians after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    /// Right ascension
    pub ra: f64,
    /// Declination
    pub dec: f64,
    /// Apparent visual magnitude (lower is brighter)
    pub magnitude: f64,
}

/// Names of the columns holding right ascension, declination and magnitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub ra: String,
    pub dec: String,
    pub magnitude: String,
}

impl ColumnMapping {
    /// The mapped column names in right ascension, declination, magnitude order
    pub fn names(&self) -> [&str; 3] {
        [self.ra.as_str(), self.dec.as_str(), self.magnitude.as_str()]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            ra: "RAJ2000".to_string(),
            dec: "DEJ2000".to_string(),
            magnitude: "Vmag".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping_matches_vizier_names() {
        let mapping = ColumnMapping::default();
        assert_eq!(mapping.names(), ["RAJ2000", "DEJ2000", "Vmag"]);
    }

    #[test]
    fn test_mapping_partial_override() {
        let mapping: ColumnMapping = serde_json::from_str(r#"{"magnitude": "Bmag"}"#).unwrap();
        assert_eq!(mapping.ra, "RAJ2000");
        assert_eq!(mapping.magnitude, "Bmag");
    }
}
