//! Degrees:minutes:seconds text to signed decimal degrees.
//!
//! Coordinates in the sheet export look like `-7:07:12,5`: three
//! colon-separated fields, comma or period decimals, and the hemisphere sign
//! carried by the degrees field. Spreadsheet text frequently contains
//! non-breaking spaces and line breaks inside the cell, which are stripped
//! before splitting.

use crate::error::CoordinateError;

/// Characters removed anywhere in the cell text after trimming.
const STRIPPED: [char; 3] = ['\u{a0}', '\r', '\n'];

/// Parse a DMS string into decimal degrees.
///
/// The sign is taken from the *text* of the degrees field: any `-` in it
/// negates the result. `-0:30:0` is therefore `-0.5`, which a numeric sign
/// check on `-0.0` would miss.
///
/// # Example
///
/// ```rust
/// use tank_core::parse_dms;
///
/// let lat = parse_dms("-7:30:0").unwrap();
/// assert!((lat + 7.5).abs() < 1e-12);
/// assert!(parse_dms("12:34").is_err());
/// ```
pub fn parse_dms(raw: &str) -> Result<f64, CoordinateError> {
    let cleaned: String = raw
        .trim()
        .replace(',', ".")
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();

    let parts: Vec<&str> = cleaned.split(':').collect();
    if parts.len() != 3 {
        return Err(CoordinateError::FieldCount { found: parts.len() });
    }

    let raw_degrees = parts[0].trim();
    let degrees = parse_field("degrees", raw_degrees)?.abs();
    let minutes = parse_field("minutes", parts[1].trim())? / 60.0;
    let seconds = parse_field("seconds", parts[2].trim())? / 3600.0;
    let decimal = degrees + minutes + seconds;

    if raw_degrees.contains('-') {
        Ok(-decimal)
    } else {
        Ok(decimal)
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, CoordinateError> {
    value.parse::<f64>().map_err(|_| CoordinateError::NonNumeric {
        field,
        value: value.to_string(),
    })
}

/// Normalize an optional coordinate cell.
///
/// Missing input is absent. Malformed input is logged and absent; it never
/// aborts processing of the rest of the dataset.
pub fn normalize(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    match parse_dms(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("coordinate: failed to convert {:?}: {}", raw, e);
            None
        }
    }
}

/// Normalize a latitude/longitude pair.
///
/// Both values are present or neither is: a row with one bad coordinate has
/// no usable position.
pub fn normalize_pair(latitude: Option<&str>, longitude: Option<&str>) -> Option<(f64, f64)> {
    let lat = normalize(latitude);
    let lon = normalize(longitude);
    lat.zip(lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn positive_dms() {
        assert_close(parse_dms("12:34:56").unwrap(), 12.0 + 34.0 / 60.0 + 56.0 / 3600.0);
        assert_close(parse_dms("0:0:0").unwrap(), 0.0);
        assert_close(parse_dms("7:30:0").unwrap(), 7.5);
    }

    #[test]
    fn negative_dms_negates_whole_value() {
        let positive = parse_dms("36:52:10").unwrap();
        assert_close(parse_dms("-36:52:10").unwrap(), -positive);
    }

    #[test]
    fn negative_zero_degrees_stays_negative() {
        assert_close(parse_dms("-0:30:0").unwrap(), -0.5);
        assert_close(parse_dms("-0:0:36").unwrap(), -0.01);
    }

    #[test]
    fn comma_decimal_separator() {
        assert_close(parse_dms("7:30:12,5").unwrap(), 7.0 + 0.5 + 12.5 / 3600.0);
        assert_close(parse_dms("-7,5:0:0").unwrap(), -7.5);
    }

    #[test]
    fn whitespace_and_control_characters_are_ignored() {
        let plain = parse_dms("12:34:56").unwrap();
        assert_close(parse_dms("  12:34:56  ").unwrap(), plain);
        assert_close(parse_dms("12:\u{a0}34:56").unwrap(), plain);
        assert_close(parse_dms("12:34:5\r\n6").unwrap(), plain);
        assert_close(parse_dms("\u{a0}12 : 34 : 56\n").unwrap(), plain);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert_eq!(
            parse_dms("12:34"),
            Err(CoordinateError::FieldCount { found: 2 })
        );
        assert_eq!(
            parse_dms("12:34:56:1"),
            Err(CoordinateError::FieldCount { found: 4 })
        );
        assert_eq!(parse_dms(""), Err(CoordinateError::FieldCount { found: 1 }));
        assert_eq!(
            parse_dms("-7.1234"),
            Err(CoordinateError::FieldCount { found: 1 })
        );
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        assert_eq!(
            parse_dms("12:ab:30"),
            Err(CoordinateError::NonNumeric {
                field: "minutes",
                value: "ab".to_string()
            })
        );
        assert!(matches!(
            parse_dms("S7:30:0"),
            Err(CoordinateError::NonNumeric { field: "degrees", .. })
        ));
        assert!(matches!(
            parse_dms("7:30:"),
            Err(CoordinateError::NonNumeric { field: "seconds", .. })
        ));
    }

    #[test]
    fn normalize_handles_missing_and_malformed() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("12:34")), None);
        assert_eq!(normalize(Some("12:ab:30")), None);
        assert_close(normalize(Some("-0:30:0")).unwrap(), -0.5);
    }

    #[test]
    fn pair_is_both_or_neither() {
        let (lat, lon) = normalize_pair(Some("-7:0:0"), Some("-36:30:0")).unwrap();
        assert_close(lat, -7.0);
        assert_close(lon, -36.5);
        assert_eq!(normalize_pair(Some("-7:0:0"), Some("bad")), None);
        assert_eq!(normalize_pair(None, Some("-36:30:0")), None);
    }
}
