//! Primitive readers and writers over untyped JSON values.
//!
//! Readers check one shape and return a [`DecodeError`] describing what was
//! expected. Writers produce canonical output.

use serde_json::{Map, Number, Value};

use crate::error::DecodeError;
use crate::model::GeoJsonType;

/// Largest magnitude below which every integral f64 is exactly an integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// DECODING
// =============================================================================

/// Reads a JSON object.
#[inline]
pub fn read_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or(DecodeError::NotAnObject { context })
}

/// Reads a JSON array.
#[inline]
pub fn read_array<'a>(value: &'a Value, context: &'static str) -> Result<&'a [Value], DecodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(DecodeError::UnexpectedShape {
            context,
            expected: "an array",
        })
}

/// Reads a member that must be present. Its value may be anything, including null.
#[inline]
pub fn read_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, DecodeError> {
    object.get(field).ok_or(DecodeError::MissingField { field })
}

/// Reads a numeric coordinate as f64.
#[inline]
pub fn read_coordinate(value: &Value) -> Result<f64, DecodeError> {
    value.as_f64().ok_or(DecodeError::UnexpectedShape {
        context: "position",
        expected: "a number",
    })
}

/// Reads an array whose every element decodes with `decode`.
///
/// Stops at the first failing element; nothing decoded so far is kept.
pub fn read_sequence<T, F>(
    value: &Value,
    context: &'static str,
    decode: F,
) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&Value) -> Result<T, DecodeError>,
{
    read_array(value, context)?.iter().map(decode).collect()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writes a coordinate in canonical form.
///
/// Integral values are written as JSON integers so `1.0` renders as `1`.
/// Non-finite values cannot be represented in JSON and become null; valid
/// points never contain them.
#[inline]
pub fn write_coordinate(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

/// Adds the `type` member to an encoded payload.
pub fn write_tagged(kind: GeoJsonType, mut object: Map<String, Value>) -> Value {
    object.insert("type".to_owned(), Value::from(kind.name()));
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_write_coordinate_integral() {
        assert_eq!(write_coordinate(0.0).to_string(), "0");
        assert_eq!(write_coordinate(-0.0).to_string(), "0");
        assert_eq!(write_coordinate(12.0).to_string(), "12");
        assert_eq!(write_coordinate(-180.0).to_string(), "-180");
    }

    #[test]
    fn test_write_coordinate_fractional() {
        assert_eq!(write_coordinate(0.5).to_string(), "0.5");
        assert_eq!(write_coordinate(-73.9857).to_string(), "-73.9857");
        // Too large to be an exact integer: stays a float
        assert_eq!(write_coordinate(1e300), json!(1e300));
    }

    #[test]
    fn test_write_coordinate_non_finite() {
        assert_eq!(write_coordinate(f64::NAN), Value::Null);
        assert_eq!(write_coordinate(f64::INFINITY), Value::Null);
    }

    #[test]
    fn test_read_coordinate() {
        assert_eq!(read_coordinate(&json!(3)), Ok(3.0));
        assert_eq!(read_coordinate(&json!(-2.5)), Ok(-2.5));
        assert!(read_coordinate(&json!("3")).is_err());
        assert!(read_coordinate(&Value::Null).is_err());
    }

    #[test]
    fn test_read_field() {
        let value = json!({"a": null});
        let object = read_object(&value, "test").unwrap();
        assert_eq!(read_field(object, "a"), Ok(&Value::Null));
        assert_eq!(
            read_field(object, "b"),
            Err(DecodeError::MissingField { field: "b" })
        );
    }

    #[test]
    fn test_read_sequence_stops_at_first_error() {
        let mut seen = 0;
        let result = read_sequence(&json!([1, "x", 3]), "test", |v| {
            seen += 1;
            read_coordinate(v)
        });
        assert!(result.is_err());
        assert_eq!(seen, 2);

        assert!(read_sequence(&json!({}), "test", read_coordinate).is_err());
        assert_eq!(read_sequence(&json!([]), "test", read_coordinate), Ok(vec![]));
    }
}
