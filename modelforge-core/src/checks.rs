//! Validation primitives invoked by generated setters.
//!
//! Each function mirrors one constraint family from the schema subset the
//! generator understands. Generated code calls these with the literal bounds
//! baked in at generation time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{ModelError, Result};
use crate::model::Model;

/// Checks an integer value against optional `minimum`/`maximum` bounds.
///
/// # Errors
/// Returns `ModelError::IntegerOutOfBounds` if the value lies outside the
/// closed interval described by the present bounds.
pub fn check_integer_bounds(value: i64, min: Option<i64>, max: Option<i64>) -> Result<()> {
    let below = min.is_some_and(|m| value < m);
    let above = max.is_some_and(|m| value > m);
    if below || above {
        return Err(ModelError::IntegerOutOfBounds { value, min, max });
    }
    Ok(())
}

/// Checks a float value against optional `minimum`/`maximum` bounds.
///
/// # Errors
/// Returns `ModelError::FloatOutOfBounds` if the value lies outside the
/// closed interval described by the present bounds.
pub fn check_float_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> Result<()> {
    let below = min.is_some_and(|m| value < m);
    let above = max.is_some_and(|m| value > m);
    if below || above {
        return Err(ModelError::FloatOutOfBounds { value, min, max });
    }
    Ok(())
}

/// Checks an array length against optional `minItems`/`maxItems` bounds.
///
/// # Errors
/// Returns `ModelError::ArrayLengthOutOfBounds` if the length lies outside
/// the closed interval described by the present bounds.
pub fn check_array_bounds(len: usize, min: Option<usize>, max: Option<usize>) -> Result<()> {
    let below = min.is_some_and(|m| len < m);
    let above = max.is_some_and(|m| len > m);
    if below || above {
        return Err(ModelError::ArrayLengthOutOfBounds { len, min, max });
    }
    Ok(())
}

/// Checks a value against the literal enum list declared in the schema.
///
/// # Errors
/// Returns `ModelError::EnumViolation` listing the allowed values if the
/// value is not a member.
pub fn check_enum_bounds(value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ModelError::EnumViolation {
        value: value.to_string(),
        allowed: allowed.iter().map(|s| (*s).to_string()).collect(),
    })
}

/// Checks that every element of a pure array is an instance of the expected
/// model type.
///
/// # Errors
/// Returns `ModelError::TypeMismatch` naming the first offending index and
/// the expected model name.
pub fn check_pure_array(items: &[Box<dyn Model>], expected: &str) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if item.model_name() != expected {
            return Err(ModelError::TypeMismatch {
                index,
                expected: expected.to_string(),
                actual: item.model_name().to_string(),
            });
        }
    }
    Ok(())
}

/// Parses a raw string into the canonical date-time representation.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`
/// without an offset (interpreted as UTC), and bare `YYYY-MM-DD` dates
/// (midnight UTC). Generated setters assign the parsed value, replacing the
/// raw input.
///
/// # Errors
/// Returns `ModelError::DateParse` if none of the accepted layouts match.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(ModelError::DateParse {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    #[derive(Debug)]
    struct Stub(&'static str);

    impl Model for Stub {
        fn model_name(&self) -> &'static str {
            self.0
        }

        fn to_map(&self) -> Map<String, Value> {
            Map::new()
        }
    }

    #[test]
    fn test_integer_bounds_accepts_inside() {
        assert!(check_integer_bounds(5, Some(1), Some(10)).is_ok());
        assert!(check_integer_bounds(1, Some(1), Some(10)).is_ok());
        assert!(check_integer_bounds(10, Some(1), Some(10)).is_ok());
    }

    #[test]
    fn test_integer_bounds_rejects_outside() {
        assert!(check_integer_bounds(0, Some(1), Some(10)).is_err());
        assert!(check_integer_bounds(11, Some(1), Some(10)).is_err());
    }

    #[test]
    fn test_integer_bounds_open_sides() {
        assert!(check_integer_bounds(i64::MAX, Some(0), None).is_ok());
        assert!(check_integer_bounds(i64::MIN, None, Some(0)).is_ok());
        assert!(check_integer_bounds(5, None, None).is_ok());
    }

    #[test]
    fn test_float_bounds() {
        assert!(check_float_bounds(0.5, Some(0.0), Some(1.0)).is_ok());
        assert!(check_float_bounds(-0.1, Some(0.0), Some(1.0)).is_err());
        assert!(check_float_bounds(1.1, None, Some(1.0)).is_err());
    }

    #[test]
    fn test_array_bounds() {
        assert!(check_array_bounds(3, Some(1), Some(5)).is_ok());
        assert!(check_array_bounds(0, Some(1), None).is_err());
        assert!(check_array_bounds(6, None, Some(5)).is_err());
        assert!(check_array_bounds(0, None, None).is_ok());
    }

    #[test]
    fn test_enum_bounds() {
        assert!(check_enum_bounds("FBR", &["FBR", "FBB"]).is_ok());
        let err = check_enum_bounds("FBX", &["FBR", "FBB"]).unwrap_err();
        assert!(err.to_string().contains("FBR, FBB"));
    }

    #[test]
    fn test_pure_array_accepts_uniform() {
        let items: Vec<Box<dyn Model>> = vec![Box::new(Stub("Pricing")), Box::new(Stub("Pricing"))];
        assert!(check_pure_array(&items, "Pricing").is_ok());
    }

    #[test]
    fn test_pure_array_names_offending_index() {
        let items: Vec<Box<dyn Model>> = vec![
            Box::new(Stub("Pricing")),
            Box::new(Stub("Order")),
            Box::new(Stub("Pricing")),
        ];
        match check_pure_array(&items, "Pricing").unwrap_err() {
            ModelError::TypeMismatch {
                index,
                expected,
                actual,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, "Pricing");
                assert_eq!(actual, "Order");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pure_array_empty() {
        let items: Vec<Box<dyn Model>> = Vec::new();
        assert!(check_pure_array(&items, "Pricing").is_ok());
    }

    #[test]
    fn test_parse_date_rfc3339() {
        let dt = parse_date("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn test_parse_date_offset_normalized_to_utc() {
        let dt = parse_date("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_date_naive_and_bare() {
        assert!(parse_date("2024-03-01T12:30:00").is_ok());
        assert!(parse_date("2024-03-01 12:30:00").is_ok());
        let midnight = parse_date("2024-03-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }
}
