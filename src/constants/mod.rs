//! Constants module for angular unit conversions

use std::f64::consts::PI;

// Angles
/// Hours in a complete circle of right ascension
pub const HOURS_PER_CIRCLE: f64 = 24.0;
/// Degrees in a complete circle
pub const DEGREES_PER_CIRCLE: f64 = 360.0;
/// Hour-angle to radians conversion factor (24h = 2π)
pub const HOUR2RAD: f64 = PI / 12.0;
/// Radians to hour-angle conversion factor
pub const RAD2HOUR: f64 = 12.0 / PI;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Sexagesimal subdivisions
/// Minutes per hour or arcminutes per degree
pub const MINUTES_PER_UNIT: f64 = 60.0;
/// Seconds per hour or arcseconds per degree
pub const SECONDS_PER_UNIT: f64 = 3600.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_are_inverse() {
        assert!((HOUR2RAD * RAD2HOUR - 1.0).abs() < 1e-15);
        assert!((DEG2RAD * RAD2DEG - 1.0).abs() < 1e-15);
        assert!((HOURS_PER_CIRCLE * HOUR2RAD - TAU).abs() < 1e-15);
        assert!((DEGREES_PER_CIRCLE * DEG2RAD - TAU).abs() < 1e-15);
    }
}
