//! Geometry payload encoding/decoding.
//!
//! These functions work on the payload only: the `coordinates` array for
//! coordinate geometries and the `geometries` array for a
//! GeometryCollection. The root dispatcher in [`crate::codec::geojson`]
//! handles the surrounding object and its `type`.

use serde_json::Value;

use crate::codec::geojson::{decode_geometry_at, encode_geojson, DecodeOptions};
use crate::codec::primitives::{read_array, read_coordinate, read_sequence, write_coordinate};
use crate::error::DecodeError;
use crate::model::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a position such as `[102.0, 0.5]`.
pub fn decode_point(value: &Value) -> Result<Point, DecodeError> {
    let coordinates = read_array(value, "position")?
        .iter()
        .map(read_coordinate)
        .collect::<Result<Vec<_>, _>>()?;
    Point::new(coordinates)
}

/// Decodes an array of positions. An empty array is valid.
pub fn decode_line_string(value: &Value) -> Result<LineString, DecodeError> {
    read_sequence(value, "line string", decode_point).map(LineString::new)
}

/// Decodes an array of linear rings.
///
/// A ring that is a well-formed line string but not closed still fails the
/// whole polygon.
pub fn decode_polygon(value: &Value) -> Result<Polygon, DecodeError> {
    let rings = read_sequence(value, "polygon", decode_line_string)?;
    Polygon::new(rings)
}

pub fn decode_multi_point(value: &Value) -> Result<MultiPoint, DecodeError> {
    read_sequence(value, "multi point", decode_point).map(MultiPoint::new)
}

pub fn decode_multi_line_string(value: &Value) -> Result<MultiLineString, DecodeError> {
    read_sequence(value, "multi line string", decode_line_string).map(MultiLineString::new)
}

pub fn decode_multi_polygon(value: &Value) -> Result<MultiPolygon, DecodeError> {
    read_sequence(value, "multi polygon", decode_polygon).map(MultiPolygon::new)
}

/// Decodes the `geometries` array of a GeometryCollection.
///
/// Each member is a complete GeoJSON object with its own `type`, and must be
/// a geometry.
pub fn decode_geometry_collection(value: &Value) -> Result<GeometryCollection, DecodeError> {
    decode_geometry_collection_at(value, &DecodeOptions::default(), 0)
}

pub(crate) fn decode_geometry_collection_at(
    value: &Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<GeometryCollection, DecodeError> {
    let geometries = read_sequence(value, "geometries", |member| {
        decode_geometry_at(member, options, depth + 1)
    })?;
    GeometryCollection::new(geometries)
}

// =============================================================================
// ENCODING
// =============================================================================

pub fn encode_point(point: &Point) -> Value {
    point
        .coordinates()
        .iter()
        .copied()
        .map(write_coordinate)
        .collect()
}

pub fn encode_line_string(line_string: &LineString) -> Value {
    line_string.iter().map(encode_point).collect()
}

pub fn encode_polygon(polygon: &Polygon) -> Value {
    polygon.iter().map(encode_line_string).collect()
}

pub fn encode_multi_point(multi_point: &MultiPoint) -> Value {
    multi_point.iter().map(encode_point).collect()
}

pub fn encode_multi_line_string(multi_line_string: &MultiLineString) -> Value {
    multi_line_string.iter().map(encode_line_string).collect()
}

pub fn encode_multi_polygon(multi_polygon: &MultiPolygon) -> Value {
    multi_polygon.iter().map(encode_polygon).collect()
}

/// Encodes members through the root encoder, so each keeps its `type`.
pub fn encode_geometry_collection(collection: &GeometryCollection) -> Value {
    collection.iter().map(encode_geojson).collect()
}
