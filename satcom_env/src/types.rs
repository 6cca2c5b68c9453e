//! Orbital parameter types handed to movement providers.

use crate::error::MovementError;
use serde::{Deserialize, Serialize};

/// Fixed width of both TLE data lines.
const TLE_LINE_LEN: usize = 69;

/// A parsed NORAD two-line element set.
///
/// Only the mean elements are decoded; propagating them is the job of a
/// `MovementModel` implementation. The raw lines are kept so a provider can
/// hand them to an external propagator untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoLineElement {
    /// Optional title line (line 0)
    pub name: Option<String>,

    /// Raw line 1
    pub line1: String,

    /// Raw line 2
    pub line2: String,

    /// NORAD catalog number
    pub catalog_number: u32,

    /// Four-digit epoch year
    pub epoch_year: u16,

    /// Fractional day of year of the epoch
    pub epoch_day: f64,

    /// Inclination in degrees
    pub inclination_deg: f64,

    /// Right ascension of the ascending node in degrees
    pub raan_deg: f64,

    /// Eccentricity (dimensionless)
    pub eccentricity: f64,

    /// Argument of perigee in degrees
    pub arg_perigee_deg: f64,

    /// Mean anomaly in degrees
    pub mean_anomaly_deg: f64,

    /// Mean motion in revolutions per day
    pub mean_motion_rev_per_day: f64,
}

impl TwoLineElement {
    /// Parses a two-line element set.
    ///
    /// # Arguments
    /// * `name` - Optional title line; surrounding whitespace is trimmed
    /// * `line1` - Line starting with `1 `
    /// * `line2` - Line starting with `2 `
    ///
    /// # Errors
    /// `MovementError::InvalidTle` when a line has the wrong length or number,
    /// the catalog numbers differ, a checksum does not match, or a field is not
    /// numeric.
    pub fn parse(name: Option<&str>, line1: &str, line2: &str) -> Result<Self, MovementError> {
        let line1 = line1.trim_end();
        let line2 = line2.trim_end();

        check_line(line1, '1')?;
        check_line(line2, '2')?;

        let catalog_number: u32 = field(line1, 2..7, "catalog number")?;
        let catalog_check: u32 = field(line2, 2..7, "catalog number")?;
        if catalog_number != catalog_check {
            return Err(MovementError::invalid_tle(format!(
                "catalog number mismatch: {} vs {}",
                catalog_number, catalog_check
            )));
        }

        let two_digit_year: u16 = field(line1, 18..20, "epoch year")?;
        // NORAD convention: 57-99 => 1957-1999, 00-56 => 2000-2056
        let epoch_year = if two_digit_year < 57 {
            2000 + two_digit_year
        } else {
            1900 + two_digit_year
        };

        // Eccentricity is written with an implied leading decimal point
        let eccentricity_digits = line2[26..33].trim();
        let eccentricity: f64 = format!("0.{}", eccentricity_digits)
            .parse()
            .map_err(|_| MovementError::invalid_tle(format!("bad eccentricity '{}'", eccentricity_digits)))?;

        Ok(Self {
            name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            line1: line1.to_string(),
            line2: line2.to_string(),
            catalog_number,
            epoch_year,
            epoch_day: field(line1, 20..32, "epoch day")?,
            inclination_deg: field(line2, 8..16, "inclination")?,
            raan_deg: field(line2, 17..25, "right ascension")?,
            eccentricity,
            arg_perigee_deg: field(line2, 34..42, "argument of perigee")?,
            mean_anomaly_deg: field(line2, 43..51, "mean anomaly")?,
            mean_motion_rev_per_day: field(line2, 52..63, "mean motion")?,
        })
    }

    /// Orbital period in minutes derived from the mean motion.
    pub fn period_minutes(&self) -> f64 {
        if self.mean_motion_rev_per_day > 0.0 {
            1440.0 / self.mean_motion_rev_per_day
        } else {
            f64::INFINITY
        }
    }
}

/// Computes the modulo-10 checksum over the first 68 columns.
///
/// Digits count at face value, `-` counts as one, everything else as zero.
pub fn tle_checksum(line: &str) -> u32 {
    line.bytes()
        .take(TLE_LINE_LEN - 1)
        .map(|b| match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

fn check_line(line: &str, number: char) -> Result<(), MovementError> {
    if !line.is_ascii() || line.len() != TLE_LINE_LEN {
        return Err(MovementError::invalid_tle(format!(
            "line {} must be {} ASCII columns, got {}",
            number,
            TLE_LINE_LEN,
            line.chars().count()
        )));
    }
    if !line.starts_with(number) || line.as_bytes()[1] != b' ' {
        return Err(MovementError::invalid_tle(format!(
            "line {} must start with '{} '",
            number, number
        )));
    }

    let expected = line.as_bytes()[TLE_LINE_LEN - 1];
    let computed = tle_checksum(line);
    if !expected.is_ascii_digit() || u32::from(expected - b'0') != computed {
        return Err(MovementError::invalid_tle(format!(
            "line {} checksum mismatch: expected {}, computed {}",
            number, expected as char, computed
        )));
    }
    Ok(())
}

fn field<T: std::str::FromStr>(
    line: &str,
    range: std::ops::Range<usize>,
    what: &str,
) -> Result<T, MovementError> {
    let raw = line[range].trim();
    raw.parse()
        .map_err(|_| MovementError::invalid_tle(format!("bad {} '{}'", what, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_parse_iss_tle() {
        let tle = TwoLineElement::parse(Some("ISS (ZARYA) "), ISS_LINE1, ISS_LINE2).unwrap();

        assert_eq!(tle.name.as_deref(), Some("ISS (ZARYA)"));
        assert_eq!(tle.catalog_number, 25544);
        assert_eq!(tle.epoch_year, 2008);
        assert!((tle.epoch_day - 264.51782528).abs() < 1e-9);
        assert!((tle.inclination_deg - 51.6416).abs() < 1e-9);
        assert!((tle.raan_deg - 247.4627).abs() < 1e-9);
        assert!((tle.eccentricity - 0.0006703).abs() < 1e-12);
        assert!((tle.arg_perigee_deg - 130.5360).abs() < 1e-9);
        assert!((tle.mean_anomaly_deg - 325.0288).abs() < 1e-9);
        assert!((tle.mean_motion_rev_per_day - 15.72125391).abs() < 1e-9);
        assert!((tle.period_minutes() - 91.596).abs() < 0.01);
    }

    #[test]
    fn test_checksum() {
        assert_eq!(tle_checksum(ISS_LINE1), 7);
        assert_eq!(tle_checksum(ISS_LINE2), 7);
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let corrupted = format!("{}8", &ISS_LINE2[..68]);
        let err = TwoLineElement::parse(None, ISS_LINE1, &corrupted).unwrap_err();
        assert!(matches!(err, MovementError::InvalidTle(_)));
    }

    #[test]
    fn test_rejects_swapped_lines() {
        assert!(TwoLineElement::parse(None, ISS_LINE2, ISS_LINE1).is_err());
    }

    #[test]
    fn test_rejects_short_line() {
        assert!(TwoLineElement::parse(None, &ISS_LINE1[..60], ISS_LINE2).is_err());
    }

    #[test]
    fn test_blank_name_is_dropped() {
        let tle = TwoLineElement::parse(Some("   "), ISS_LINE1, ISS_LINE2).unwrap();
        assert!(tle.name.is_none());
    }
}
