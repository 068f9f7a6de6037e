//! Conformance checks for untyped GeoJSON values.
//!
//! These run the same decoder as [`crate::codec`] but only report whether
//! the value conforms, and as what. Use them at boundaries that forward the
//! original JSON untouched and never need the typed graph.

use serde_json::Value;

use crate::codec::{decode_geojson, decode_line_string};
use crate::error::DecodeError;
use crate::model::GeoJsonType;

/// Validates any GeoJSON object and returns its kind.
pub fn validate_geojson(value: &Value) -> Result<GeoJsonType, DecodeError> {
    decode_geojson(value).map(|geojson| geojson.kind())
}

/// Validates a value that must be a geometry.
///
/// Features and feature collections are rejected even when well formed.
pub fn validate_geometry(value: &Value) -> Result<GeoJsonType, DecodeError> {
    let kind = validate_geojson(value)?;
    if !kind.is_geometry() {
        return Err(DecodeError::NotAGeometry { found: kind });
    }
    Ok(kind)
}

/// Returns true if `value` is a valid GeoJSON object of any kind.
pub fn is_valid_geojson(value: &Value) -> bool {
    validate_geojson(value).is_ok()
}

/// Returns true if `value` is a coordinate array forming a linear ring.
pub fn is_linear_ring(value: &Value) -> bool {
    decode_line_string(value).is_ok_and(|line| line.is_linear_ring())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_reports_kind() {
        let value = json!({"type": "MultiPoint", "coordinates": [[0, 0], [1, 1]]});
        assert_eq!(validate_geojson(&value), Ok(GeoJsonType::MultiPoint));
        assert_eq!(validate_geometry(&value), Ok(GeoJsonType::MultiPoint));
    }

    #[test]
    fn test_validate_geometry_rejects_feature() {
        let value = json!({"type": "Feature", "geometry": null, "properties": {}});
        assert_eq!(validate_geojson(&value), Ok(GeoJsonType::Feature));
        assert_eq!(
            validate_geometry(&value),
            Err(DecodeError::NotAGeometry {
                found: GeoJsonType::Feature
            })
        );
    }

    #[test]
    fn test_is_valid_geojson() {
        assert!(is_valid_geojson(&json!({"type": "FeatureCollection", "features": []})));
        assert!(!is_valid_geojson(&json!({"type": "FeatureCollection"})));
        assert!(!is_valid_geojson(&json!({"type": "Circle", "radius": 1})));
        assert!(!is_valid_geojson(&Value::Null));
    }

    #[test]
    fn test_is_linear_ring() {
        assert!(is_linear_ring(&json!([[0, 0], [1, 0], [1, 1], [0, 0]])));
        assert!(!is_linear_ring(&json!([[0, 0], [1, 0], [0, 0]])));
        assert!(!is_linear_ring(&json!([[0, 0], [1, 0], [1, 1], [0, 1]])));
        assert!(!is_linear_ring(&json!([[0, 0], [1, 0], [1, 1], "x"])));
        // Closure compares every coordinate, including altitude
        assert!(!is_linear_ring(&json!([[0, 0, 1], [1, 0], [1, 1], [0, 0]])));
    }
}
