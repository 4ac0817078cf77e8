//! # Angle Representation Module
//!
//! Catalogs report right ascension in hour-angle and declination in degrees,
//! while downstream consumers want radians. The `Angle` type keeps a value in
//! the unit it was given in and converts only when a different unit is asked
//! for, so a value read as hours is returned exactly when read back as hours.
//!
//! ## Examples
//!
//! ```rust
//! use ybsc_export::coordinates::angle::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert_eq!(ra.to_hours(), 6.0);
//! assert!((ra.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use crate::constants::{DEG2RAD, HOUR2RAD, RAD2DEG, RAD2HOUR};

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in hour-angle units (24h per circle)
    Hours(f64),
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement kept in its original unit
///
/// Two angles compare equal only if they were stored in the same unit with
/// the same value; compare converted values when the units may differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in hour-angle units
    pub fn from_hours(hours: f64) -> Self {
        Angle {
            angle: AngleFormat::Hours(hours),
        }
    }

    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in hour-angle units
    pub fn to_hours(&self) -> f64 {
        match self.angle {
            AngleFormat::Hours(h) => h,
            AngleFormat::Degrees(deg) => deg / 15.0,
            AngleFormat::Radians(rad) => rad * RAD2HOUR,
        }
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Hours(h) => h * 15.0,
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// - Hours convert as `hours * (π / 12)`
    /// - Degrees convert as `degrees * (π / 180)`
    /// - Radians are returned exactly
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Hours(h) => h * HOUR2RAD,
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_from_hours_exact_storage() {
        let angle = Angle::from_hours(13.5);
        assert_eq!(angle.to_hours(), 13.5);

        match angle.format() {
            AngleFormat::Hours(val) => assert_eq!(val, 13.5),
            _ => panic!("Expected hours format"),
        }
    }

    #[test]
    fn test_hour_to_radian_conversion() {
        let test_cases = vec![
            (0.0, 0.0),
            (6.0, PI / 2.0),
            (12.0, PI),
            (18.0, 3.0 * PI / 2.0),
            (1.0, PI / 12.0),
        ];

        for (hours, expected_radians) in test_cases {
            let angle = Angle::from_hours(hours);
            assert!(
                (angle.to_radians() - expected_radians).abs() < 1e-14,
                "Failed for {} hours",
                hours
            );
        }
    }

    #[test]
    fn test_degree_to_radian_conversion() {
        let angle = Angle::from_degrees(180.0);
        assert!((angle.to_radians() - PI).abs() < 1e-15);

        let angle = Angle::from_degrees(-45.0);
        assert!((angle.to_radians() + PI / 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_hours_and_degrees_agree() {
        let hours = Angle::from_hours(3.0);
        let degrees = Angle::from_degrees(45.0);

        assert_eq!(hours.to_degrees(), 45.0);
        assert_eq!(degrees.to_hours(), 3.0);
        assert_relative_eq!(hours.to_radians(), degrees.to_radians(), epsilon = 1e-15);
        // Different storage formats never compare equal
        assert_ne!(hours, degrees);
    }

    #[test]
    fn test_round_trip_through_radians() {
        let original_hours = 23.999;
        let back = Angle::from_radians(Angle::from_hours(original_hours).to_radians()).to_hours();
        assert_relative_eq!(back, original_hours, epsilon = 1e-13);

        let original_degrees = -89.5;
        let back =
            Angle::from_radians(Angle::from_degrees(original_degrees).to_radians()).to_degrees();
        assert_relative_eq!(back, original_degrees, epsilon = 1e-13);
    }

    #[test]
    fn test_radians_returned_exactly() {
        let precise_radians = 2.154321098765432;
        assert_eq!(Angle::from_radians(precise_radians).to_radians(), precise_radians);
    }
}
