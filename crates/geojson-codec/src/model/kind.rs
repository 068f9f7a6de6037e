//! The `type` discriminator of GeoJSON objects.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Object kinds recognized by the `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
    /// Any discriminator that is not one of the literals above.
    Unknown,
}

// Reverse of `name()`, built from it so each name is spelled once.
lazy_static! {
    static ref TYPES_BY_NAME: FxHashMap<&'static str, GeoJsonType> = GeoJsonType::KNOWN
        .iter()
        .map(|kind| (kind.name(), *kind))
        .collect();
}

impl GeoJsonType {
    /// All kinds that can be decoded, in wire-format order.
    pub const KNOWN: [GeoJsonType; 9] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
        GeoJsonType::Feature,
        GeoJsonType::FeatureCollection,
    ];

    /// Resolves a discriminator literal. Matching is case-sensitive.
    pub fn from_name(name: &str) -> GeoJsonType {
        TYPES_BY_NAME
            .get(name)
            .copied()
            .unwrap_or(GeoJsonType::Unknown)
    }

    /// Returns the discriminator literal.
    pub fn name(&self) -> &'static str {
        match self {
            GeoJsonType::Point => "Point",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::MultiLineString => "MultiLineString",
            GeoJsonType::Polygon => "Polygon",
            GeoJsonType::MultiPolygon => "MultiPolygon",
            GeoJsonType::GeometryCollection => "GeometryCollection",
            GeoJsonType::Feature => "Feature",
            GeoJsonType::FeatureCollection => "FeatureCollection",
            GeoJsonType::Unknown => "Unknown",
        }
    }

    /// Returns true for the seven geometry kinds.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            GeoJsonType::Point
                | GeoJsonType::MultiPoint
                | GeoJsonType::LineString
                | GeoJsonType::MultiLineString
                | GeoJsonType::Polygon
                | GeoJsonType::MultiPolygon
                | GeoJsonType::GeometryCollection
        )
    }

    /// Returns the member that carries this kind's payload.
    ///
    /// Feature has a composite payload (`geometry` + `properties`) and
    /// reports an empty prefix, as does `Unknown`.
    pub fn prefix(&self) -> &'static str {
        match self {
            GeoJsonType::Point
            | GeoJsonType::MultiPoint
            | GeoJsonType::LineString
            | GeoJsonType::MultiLineString
            | GeoJsonType::Polygon
            | GeoJsonType::MultiPolygon => "coordinates",
            GeoJsonType::GeometryCollection => "geometries",
            GeoJsonType::FeatureCollection => "features",
            GeoJsonType::Feature | GeoJsonType::Unknown => "",
        }
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for kind in GeoJsonType::KNOWN {
            assert_eq!(GeoJsonType::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(GeoJsonType::from_name("point"), GeoJsonType::Unknown);
        assert_eq!(GeoJsonType::from_name("Unknown"), GeoJsonType::Unknown);
        assert_eq!(GeoJsonType::from_name(""), GeoJsonType::Unknown);
    }

    #[test]
    fn test_geometry_kinds() {
        let geometries: Vec<_> = GeoJsonType::KNOWN
            .into_iter()
            .filter(GeoJsonType::is_geometry)
            .collect();
        assert_eq!(geometries.len(), 7);
        assert!(!GeoJsonType::Feature.is_geometry());
        assert!(!GeoJsonType::FeatureCollection.is_geometry());
        assert!(!GeoJsonType::Unknown.is_geometry());
    }

    #[test]
    fn test_prefix() {
        assert_eq!(GeoJsonType::Polygon.prefix(), "coordinates");
        assert_eq!(GeoJsonType::GeometryCollection.prefix(), "geometries");
        assert_eq!(GeoJsonType::FeatureCollection.prefix(), "features");
        assert_eq!(GeoJsonType::Feature.prefix(), "");
    }
}
