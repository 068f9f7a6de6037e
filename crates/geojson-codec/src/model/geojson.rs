//! The root GeoJSON union.

use crate::model::{
    Feature, FeatureCollection, GeoJsonType, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Any decodable GeoJSON object.
///
/// A `GeoJson` only exists in a fully valid state: decoding either produces
/// one with its whole subtree validated, or fails.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    /// Returns the discriminator of this object.
    pub fn kind(&self) -> GeoJsonType {
        match self {
            GeoJson::Point(_) => GeoJsonType::Point,
            GeoJson::MultiPoint(_) => GeoJsonType::MultiPoint,
            GeoJson::LineString(_) => GeoJsonType::LineString,
            GeoJson::MultiLineString(_) => GeoJsonType::MultiLineString,
            GeoJson::Polygon(_) => GeoJsonType::Polygon,
            GeoJson::MultiPolygon(_) => GeoJsonType::MultiPolygon,
            GeoJson::GeometryCollection(_) => GeoJsonType::GeometryCollection,
            GeoJson::Feature(_) => GeoJsonType::Feature,
            GeoJson::FeatureCollection(_) => GeoJsonType::FeatureCollection,
        }
    }

    /// Returns the `type` literal written on the wire.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the member name that carries the payload.
    pub fn prefix(&self) -> &'static str {
        self.kind().prefix()
    }

    pub fn is_geometry(&self) -> bool {
        self.kind().is_geometry()
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            GeoJson::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            GeoJson::MultiPoint(multi_point) => Some(multi_point),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            GeoJson::LineString(line_string) => Some(line_string),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            GeoJson::MultiLineString(multi_line_string) => Some(multi_line_string),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            GeoJson::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            GeoJson::MultiPolygon(multi_polygon) => Some(multi_polygon),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self {
            GeoJson::GeometryCollection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            GeoJson::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    pub fn as_feature_collection(&self) -> Option<&FeatureCollection> {
        match self {
            GeoJson::FeatureCollection(collection) => Some(collection),
            _ => None,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for GeoJson {
                fn from(value: $variant) -> Self {
                    GeoJson::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_accessors(geojson: &GeoJson) -> usize {
        [
            geojson.as_point().is_some(),
            geojson.as_multi_point().is_some(),
            geojson.as_line_string().is_some(),
            geojson.as_multi_line_string().is_some(),
            geojson.as_polygon().is_some(),
            geojson.as_multi_polygon().is_some(),
            geojson.as_geometry_collection().is_some(),
            geojson.as_feature().is_some(),
            geojson.as_feature_collection().is_some(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }

    #[test]
    fn test_exactly_one_accessor_populated() {
        let values: Vec<GeoJson> = vec![
            Point::new(vec![0.0, 0.0]).unwrap().into(),
            MultiPoint::default().into(),
            LineString::default().into(),
            MultiLineString::default().into(),
            Polygon::default().into(),
            MultiPolygon::default().into(),
            GeometryCollection::default().into(),
            Feature::new(None, serde_json::Value::Null).unwrap().into(),
            FeatureCollection::default().into(),
        ];

        for (geojson, kind) in values.iter().zip(GeoJsonType::KNOWN) {
            assert_eq!(populated_accessors(geojson), 1);
            assert_eq!(geojson.kind(), kind);
            assert_eq!(geojson.type_name(), kind.name());
        }
    }

    #[test]
    fn test_is_geometry() {
        assert!(GeoJson::from(Polygon::default()).is_geometry());
        assert!(GeoJson::from(GeometryCollection::default()).is_geometry());
        assert!(!GeoJson::from(FeatureCollection::default()).is_geometry());
        assert_eq!(GeoJson::from(MultiPolygon::default()).prefix(), "coordinates");
    }
}
