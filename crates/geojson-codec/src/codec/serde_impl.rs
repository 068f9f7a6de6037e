//! serde support for [`GeoJson`], routed through the codec.
//!
//! Serializing writes the canonical encoding; deserializing buffers a
//! `serde_json::Value` and runs the full validating decoder on it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::geojson::{decode_geojson, encode_geojson};
use crate::model::GeoJson;

impl Serialize for GeoJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_geojson(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_geojson(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use crate::model::{GeoJson, GeoJsonType};

    #[derive(Debug, Deserialize)]
    struct Layer {
        name: String,
        data: GeoJson,
    }

    #[test]
    fn test_deserialize_nested() {
        let layer: Layer = serde_json::from_value(json!({
            "name": "parcels",
            "data": {"type": "MultiPolygon", "coordinates": []}
        }))
        .unwrap();
        assert_eq!(layer.name, "parcels");
        assert_eq!(layer.data.kind(), GeoJsonType::MultiPolygon);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result = serde_json::from_str::<GeoJson>(
            r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[2,2],[3,3]]]}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("linear ring"));
    }

    #[test]
    fn test_serialize_canonical() {
        let geojson: GeoJson =
            serde_json::from_str(r#"{"type":"Point","coordinates":[0.0,-0.0]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&geojson).unwrap(),
            r#"{"coordinates":[0,0],"type":"Point"}"#
        );
    }
}
