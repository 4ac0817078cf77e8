//! Coordinate unit conversions for equatorial positions
//!
//! Right ascension arrives in hour-angle units (24h per circle) and
//! declination in degrees. These helpers convert both to radians and back.

pub mod angle;
pub mod sexagesimal;

pub use angle::{Angle, AngleFormat};
pub use sexagesimal::{parse_degrees, parse_hourangle, parse_sexagesimal, SexagesimalError};

use crate::constants::{DEG2RAD, HOURS_PER_CIRCLE, HOUR2RAD, RAD2DEG, RAD2HOUR};

/// Convert right ascension from hour-angle to radians (`h * π / 12`)
pub fn ra_to_radians(hours: f64) -> f64 {
    hours * HOUR2RAD
}

/// Convert right ascension from radians back to hour-angle
pub fn radians_to_hourangle(radians: f64) -> f64 {
    radians * RAD2HOUR
}

/// Convert declination from degrees to radians (`d * π / 180`)
pub fn dec_to_radians(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Convert declination from radians back to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Right ascension lies in `[0, 24)` hours
pub fn is_valid_hourangle(hours: f64) -> bool {
    (0.0..HOURS_PER_CIRCLE).contains(&hours)
}

/// Declination lies in `[-90, 90]` degrees
pub fn is_valid_declination(degrees: f64) -> bool {
    (-90.0..=90.0).contains(&degrees)
}
