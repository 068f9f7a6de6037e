//! Root dispatcher: `type`-driven decoding and the matching encoder.
//!
//! Decoding reads the discriminator, hands the same object to exactly one
//! variant decoder, and fails the whole call if anything below fails.
//! Encoding asks the variant for its payload and wraps it with `type`.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::feature::{
    decode_feature_at, decode_feature_collection_at, encode_feature, encode_feature_collection,
};
use crate::codec::geometry::{
    decode_geometry_collection_at, decode_line_string, decode_multi_line_string,
    decode_multi_point, decode_multi_polygon, decode_point, decode_polygon,
    encode_geometry_collection, encode_line_string, encode_multi_line_string, encode_multi_point,
    encode_multi_polygon, encode_point, encode_polygon,
};
use crate::codec::primitives::{read_field, read_object, write_tagged};
use crate::error::DecodeError;
use crate::limits::MAX_NESTING_DEPTH;
use crate::model::{GeoJson, GeoJsonType};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of GeoJSON objects (GeometryCollection members,
    /// Feature geometries, FeatureCollection members). The top-level object
    /// is depth 0.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options for rendering text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent the output instead of writing it on one line.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Compact single-line output (the default).
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes any GeoJSON object with default options.
pub fn decode_geojson(value: &Value) -> Result<GeoJson, DecodeError> {
    decode_geojson_with_options(value, &DecodeOptions::default())
}

/// Decodes any GeoJSON object.
pub fn decode_geojson_with_options(
    value: &Value,
    options: &DecodeOptions,
) -> Result<GeoJson, DecodeError> {
    decode_at(value, options, 0).inspect_err(|err| {
        debug!(
            error = %err,
            discriminator = ?value.get("type"),
            "rejected GeoJSON object"
        );
    })
}

/// Parses JSON text and decodes it.
pub fn parse_geojson(text: &str) -> Result<GeoJson, DecodeError> {
    parse_geojson_with_options(text, &DecodeOptions::default())
}

pub fn parse_geojson_with_options(
    text: &str,
    options: &DecodeOptions,
) -> Result<GeoJson, DecodeError> {
    let value: Value = serde_json::from_str(text).inspect_err(|err| {
        debug!(error = %err, "GeoJSON text is not valid JSON");
    })?;
    decode_geojson_with_options(&value, options)
}

pub(crate) fn decode_at(
    value: &Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<GeoJson, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::DepthExceeded {
            max: options.max_depth,
        });
    }

    let object = read_object(value, "GeoJSON object")?;
    let name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingType)?;
    let kind = GeoJsonType::from_name(name);
    trace!(%kind, depth, "dispatching GeoJSON object");

    let geojson = match kind {
        GeoJsonType::Point => GeoJson::Point(decode_point(payload(object, kind)?)?),
        GeoJsonType::MultiPoint => GeoJson::MultiPoint(decode_multi_point(payload(object, kind)?)?),
        GeoJsonType::LineString => GeoJson::LineString(decode_line_string(payload(object, kind)?)?),
        GeoJsonType::MultiLineString => {
            GeoJson::MultiLineString(decode_multi_line_string(payload(object, kind)?)?)
        }
        GeoJsonType::Polygon => GeoJson::Polygon(decode_polygon(payload(object, kind)?)?),
        GeoJsonType::MultiPolygon => {
            GeoJson::MultiPolygon(decode_multi_polygon(payload(object, kind)?)?)
        }
        GeoJsonType::GeometryCollection => GeoJson::GeometryCollection(
            decode_geometry_collection_at(payload(object, kind)?, options, depth)?,
        ),
        GeoJsonType::Feature => GeoJson::Feature(decode_feature_at(value, options, depth)?),
        GeoJsonType::FeatureCollection => GeoJson::FeatureCollection(
            decode_feature_collection_at(payload(object, kind)?, options, depth)?,
        ),
        GeoJsonType::Unknown => {
            return Err(DecodeError::UnknownType {
                found: name.to_owned(),
            });
        }
    };
    Ok(geojson)
}

/// Decodes a nested object that must be a geometry.
pub(crate) fn decode_geometry_at(
    value: &Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<GeoJson, DecodeError> {
    let geojson = decode_at(value, options, depth)?;
    if !geojson.is_geometry() {
        return Err(DecodeError::NotAGeometry {
            found: geojson.kind(),
        });
    }
    Ok(geojson)
}

fn payload(object: &Map<String, Value>, kind: GeoJsonType) -> Result<&Value, DecodeError> {
    read_field(object, kind.prefix())
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a GeoJSON object. Always succeeds.
pub fn encode_geojson(geojson: &GeoJson) -> Value {
    let kind = geojson.kind();
    let payload = match geojson {
        GeoJson::Point(point) => encode_point(point),
        GeoJson::MultiPoint(multi_point) => encode_multi_point(multi_point),
        GeoJson::LineString(line_string) => encode_line_string(line_string),
        GeoJson::MultiLineString(multi_line_string) => encode_multi_line_string(multi_line_string),
        GeoJson::Polygon(polygon) => encode_polygon(polygon),
        GeoJson::MultiPolygon(multi_polygon) => encode_multi_polygon(multi_polygon),
        GeoJson::GeometryCollection(collection) => encode_geometry_collection(collection),
        GeoJson::FeatureCollection(collection) => encode_feature_collection(collection),
        GeoJson::Feature(feature) => return write_tagged(kind, encode_feature(feature)),
    };

    let mut object = Map::new();
    object.insert(kind.prefix().to_owned(), payload);
    write_tagged(kind, object)
}

/// Encodes and renders a GeoJSON object as text.
pub fn render_geojson(geojson: &GeoJson, options: &EncodeOptions) -> String {
    let value = encode_geojson(geojson);
    if options.pretty {
        format!("{value:#}")
    } else {
        value.to_string()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl TryFrom<&Value> for GeoJson {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        decode_geojson(value)
    }
}

impl TryFrom<Value> for GeoJson {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_geojson(&value)
    }
}

impl From<&GeoJson> for Value {
    fn from(geojson: &GeoJson) -> Self {
        encode_geojson(geojson)
    }
}

impl From<GeoJson> for Value {
    fn from(geojson: GeoJson) -> Self {
        encode_geojson(&geojson)
    }
}

impl FromStr for GeoJson {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_geojson(s)
    }
}

/// Compact by default; `{:#}` renders indented output.
impl fmt::Display for GeoJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = encode_geojson(self);
        if f.alternate() {
            write!(f, "{value:#}")
        } else {
            write!(f, "{value}")
        }
    }
}
