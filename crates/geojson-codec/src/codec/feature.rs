//! Feature and FeatureCollection encoding/decoding.

use serde_json::{Map, Value};

use crate::codec::geojson::{decode_geometry_at, encode_geojson, DecodeOptions};
use crate::codec::primitives::{read_field, read_object, read_sequence};
use crate::error::DecodeError;
use crate::model::{Feature, FeatureCollection};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a Feature object.
///
/// `properties` and `geometry` must both be present. A null geometry means
/// "no geometry". A string `id` is kept; any other `id` is ignored.
pub fn decode_feature(value: &Value) -> Result<Feature, DecodeError> {
    decode_feature_at(value, &DecodeOptions::default(), 0)
}

pub(crate) fn decode_feature_at(
    value: &Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Feature, DecodeError> {
    let object = read_object(value, "feature")?;
    let properties = read_field(object, "properties")?.clone();

    let geometry = match read_field(object, "geometry")? {
        Value::Null => None,
        geometry => Some(decode_geometry_at(geometry, options, depth + 1)?),
    };

    let feature = Feature::new(geometry, properties)?;
    Ok(match object.get("id").and_then(Value::as_str) {
        Some(id) => feature.with_id(id),
        None => feature,
    })
}

/// Decodes the `features` array of a FeatureCollection.
pub fn decode_feature_collection(value: &Value) -> Result<FeatureCollection, DecodeError> {
    decode_feature_collection_at(value, &DecodeOptions::default(), 0)
}

pub(crate) fn decode_feature_collection_at(
    value: &Value,
    options: &DecodeOptions,
    depth: usize,
) -> Result<FeatureCollection, DecodeError> {
    read_sequence(value, "features", |member| {
        decode_feature_at(member, options, depth + 1)
    })
    .map(FeatureCollection::new)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes the members of a Feature, without its `type`.
pub fn encode_feature(feature: &Feature) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(
        "geometry".to_owned(),
        feature.geometry().map_or(Value::Null, encode_geojson),
    );
    object.insert("properties".to_owned(), feature.properties().clone());
    if let Some(id) = feature.id() {
        object.insert("id".to_owned(), Value::from(id));
    }
    object
}

/// Encodes each feature as a bare payload; the collection carries the only
/// `type` tag.
pub fn encode_feature_collection(collection: &FeatureCollection) -> Value {
    collection
        .iter()
        .map(|feature| Value::Object(encode_feature(feature)))
        .collect()
}
