//! Sexagesimal angle parsing
//!
//! VizieR serves right ascension as `"hh mm ss.s"` and declination as
//! `"+dd mm ss"`. Both are accepted here along with colon or letter
//! separators (`12:30:00`, `12h30m00s`, `-45d30m`) and plain decimals.
//! A leading sign applies to the whole value, so `-00 30 00` is negative.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::angle::Angle;
use crate::constants::{MINUTES_PER_UNIT, SECONDS_PER_UNIT};

/// Errors raised while parsing an angle from text
#[derive(Debug, Error, PartialEq)]
pub enum SexagesimalError {
    #[error("empty value")]
    Empty,

    #[error("'{0}' is not a number or sexagesimal angle")]
    Unrecognized(String),

    #[error("{field} value {value} must be below 60")]
    FieldOutOfRange { field: &'static str, value: f64 },

    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}

lazy_static! {
    static ref SEXAGESIMAL: Regex = Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?\s*                           # sign for the whole value
        (\d{1,3})                            # hours or degrees
        [\s:hHdD°]+
        (\d{1,2}(?:\.\d+)?)                  # minutes
        (?:
            [\s:mM']+
            (\d{1,2}(?:\.\d*)?)              # seconds
            [sS"]?
          | [mM']
        )?
        \s*$
        "#
    )
    .expect("sexagesimal pattern is valid");
}

/// Parse text as a value in the major unit (hours or degrees)
///
/// Plain decimals are returned as-is; sexagesimal text is folded into
/// `major + minutes/60 + seconds/3600` with the leading sign applied last.
pub fn parse_sexagesimal(text: &str) -> Result<f64, SexagesimalError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SexagesimalError::Empty);
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        if !value.is_finite() {
            return Err(SexagesimalError::NonFinite(trimmed.to_string()));
        }
        return Ok(value);
    }

    let caps = SEXAGESIMAL
        .captures(trimmed)
        .ok_or_else(|| SexagesimalError::Unrecognized(trimmed.to_string()))?;

    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let field = |index: usize| -> f64 {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    let major = field(2);
    let minutes = field(3);
    let seconds = field(4);

    if minutes >= MINUTES_PER_UNIT {
        return Err(SexagesimalError::FieldOutOfRange {
            field: "minutes",
            value: minutes,
        });
    }
    if seconds >= MINUTES_PER_UNIT {
        return Err(SexagesimalError::FieldOutOfRange {
            field: "seconds",
            value: seconds,
        });
    }

    let magnitude = major + minutes / MINUTES_PER_UNIT + seconds / SECONDS_PER_UNIT;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a right ascension in hour-angle units
pub fn parse_hourangle(text: &str) -> Result<Angle, SexagesimalError> {
    parse_sexagesimal(text).map(Angle::from_hours)
}

/// Parse a declination (or any angle) in degrees
pub fn parse_degrees(text: &str) -> Result<Angle, SexagesimalError> {
    parse_sexagesimal(text).map(Angle::from_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case("00 05 09.9", 0.0 + 5.0 / 60.0 + 9.9 / 3600.0)]
    #[case("12:30:00", 12.5)]
    #[case("12h30m00s", 12.5)]
    #[case("6 00 00", 6.0)]
    #[case("23 59 59.99", 23.0 + 59.0 / 60.0 + 59.99 / 3600.0)]
    #[case("18 30", 18.5)]
    #[case("4.25", 4.25)]
    fn test_parse_hourangle(#[case] text: &str, #[case] expected: f64) {
        let angle = parse_hourangle(text).unwrap();
        assert_relative_eq!(angle.to_hours(), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case("+45 13 45", 45.0 + 13.0 / 60.0 + 45.0 / 3600.0)]
    #[case("-45 00 00", -45.0)]
    #[case("-00 30 00", -0.5)]
    #[case("+90 00 00", 90.0)]
    #[case("-16d42m58s", -(16.0 + 42.0 / 60.0 + 58.0 / 3600.0))]
    #[case("-45d30m", -45.5)]
    #[case("-12.75", -12.75)]
    fn test_parse_degrees(#[case] text: &str, #[case] expected: f64) {
        let angle = parse_degrees(text).unwrap();
        assert_relative_eq!(angle.to_degrees(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sign_applies_to_whole_value() {
        let negative = parse_sexagesimal("-00 00 30").unwrap();
        assert!(negative < 0.0);
        assert_relative_eq!(negative, -30.0 / 3600.0, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_value_rejected() {
        assert_eq!(parse_sexagesimal(""), Err(SexagesimalError::Empty));
        assert_eq!(parse_sexagesimal("   "), Err(SexagesimalError::Empty));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_sexagesimal("north"),
            Err(SexagesimalError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_sexagesimal("12 -30 00"),
            Err(SexagesimalError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_out_of_range_subfields_rejected() {
        assert_eq!(
            parse_sexagesimal("12 75 00"),
            Err(SexagesimalError::FieldOutOfRange {
                field: "minutes",
                value: 75.0
            })
        );
        assert!(matches!(
            parse_sexagesimal("12 30 60"),
            Err(SexagesimalError::FieldOutOfRange { field: "seconds", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            parse_sexagesimal("NaN"),
            Err(SexagesimalError::NonFinite(_))
        ));
        assert!(matches!(
            parse_sexagesimal("inf"),
            Err(SexagesimalError::NonFinite(_))
        ));
    }
}
