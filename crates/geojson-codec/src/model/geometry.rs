//! Geometry types.
//!
//! Coordinate geometries nest strictly: a Polygon is made of LineStrings,
//! which are made of Points. Constraints are checked once, in the
//! constructor, so holding a value means holding a valid one.

use crate::error::DecodeError;
use crate::model::GeoJson;

/// A single position: easting/longitude, northing/latitude, and optionally
/// altitude. Additional positions are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Vec<f64>,
}

impl Point {
    /// Minimum number of coordinates in a position.
    pub const MIN_DIMENSIONS: usize = 2;

    /// Creates a point, requiring at least two finite coordinates.
    pub fn new(coordinates: Vec<f64>) -> Result<Self, DecodeError> {
        if coordinates.len() < Self::MIN_DIMENSIONS {
            return Err(DecodeError::TooFewCoordinates {
                len: coordinates.len(),
            });
        }
        if let Some(index) = coordinates.iter().position(|c| !c.is_finite()) {
            return Err(DecodeError::NonFiniteCoordinate { index });
        }
        Ok(Self { coordinates })
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn easting(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn northing(&self) -> f64 {
        self.coordinates[1]
    }

    /// Returns the third coordinate if the position has one.
    pub fn altitude(&self) -> Option<f64> {
        self.coordinates.get(2).copied()
    }

    /// Returns the number of coordinates (2 or more).
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Never true for a constructed point.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Vec<f64> {
        self.coordinates
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coordinates[index]
    }
}

/// An ordered sequence of points. May be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Minimum number of points in a linear ring.
    pub const MIN_RING_POINTS: usize = 4;

    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if this is a closed ring of at least four points.
    pub fn is_linear_ring(&self) -> bool {
        self.points.len() >= Self::MIN_RING_POINTS && self.points.first() == self.points.last()
    }
}

sequence_accessors!(LineString, points, Point);

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A polygon made of linear rings: the exterior first, then holes.
///
/// Zero rings is a valid, empty polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon. Fails if any ring is not a linear ring.
    pub fn new(rings: Vec<LineString>) -> Result<Self, DecodeError> {
        if let Some(index) = rings.iter().position(|ring| !ring.is_linear_ring()) {
            return Err(DecodeError::NotLinearRing { index });
        }
        Ok(Self { rings })
    }

    pub fn linear_rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The outer boundary, if the polygon has any rings.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Rings after the exterior (holes).
    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn into_linear_rings(self) -> Vec<LineString> {
        self.rings
    }
}

sequence_accessors!(Polygon, rings, LineString);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

sequence_accessors!(MultiPoint, points, Point);

impl FromIterator<Point> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Line strings without a ring constraint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self { line_strings }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn into_line_strings(self) -> Vec<LineString> {
        self.line_strings
    }
}

sequence_accessors!(MultiLineString, line_strings, LineString);

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<I: IntoIterator<Item = LineString>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

sequence_accessors!(MultiPolygon, polygons, Polygon);

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A heterogeneous list of geometries.
///
/// Members are full [`GeoJson`] values so each keeps its own `type` on the
/// wire. Features and feature collections are not allowed as members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<GeoJson>,
}

impl GeometryCollection {
    /// Creates a collection. Fails on the first member that is not a geometry.
    pub fn new(geometries: Vec<GeoJson>) -> Result<Self, DecodeError> {
        if let Some(member) = geometries.iter().find(|g| !g.is_geometry()) {
            return Err(DecodeError::NotAGeometry {
                found: member.kind(),
            });
        }
        Ok(Self { geometries })
    }

    pub fn geometries(&self) -> &[GeoJson] {
        &self.geometries
    }

    pub fn into_geometries(self) -> Vec<GeoJson> {
        self.geometries
    }
}

sequence_accessors!(GeometryCollection, geometries, GeoJson);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feature;

    fn point(x: f64, y: f64) -> Point {
        Point::new(vec![x, y]).unwrap()
    }

    fn ring(offset: f64) -> LineString {
        LineString::new(vec![
            point(offset, offset),
            point(offset + 1.0, offset + 1.0),
            point(offset + 2.0, offset + 2.0),
            point(offset, offset),
        ])
    }

    #[test]
    fn test_point_accessors() {
        let p = Point::new(vec![2.5, -1.0, 300.0]).unwrap();
        assert_eq!(p.longitude(), 2.5);
        assert_eq!(p.easting(), 2.5);
        assert_eq!(p.latitude(), -1.0);
        assert_eq!(p.northing(), -1.0);
        assert_eq!(p.altitude(), Some(300.0));
        assert_eq!(p.len(), 3);
        assert_eq!(p[2], 300.0);
        assert_eq!(p.get(3), None);

        assert_eq!(point(0.0, 0.0).altitude(), None);
    }

    #[test]
    fn test_point_requires_two_finite_coordinates() {
        assert_eq!(
            Point::new(vec![1.0]),
            Err(DecodeError::TooFewCoordinates { len: 1 })
        );
        assert_eq!(
            Point::new(vec![]),
            Err(DecodeError::TooFewCoordinates { len: 0 })
        );
        assert_eq!(
            Point::new(vec![0.0, f64::NAN]),
            Err(DecodeError::NonFiniteCoordinate { index: 1 })
        );
        assert!(Point::new(vec![0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_point_equality_includes_length() {
        assert_eq!(point(1.0, 2.0), point(1.0, 2.0));
        assert_ne!(point(1.0, 2.0), point(2.0, 1.0));
        assert_ne!(point(1.0, 2.0), Point::new(vec![1.0, 2.0, 0.0]).unwrap());
    }

    #[test]
    fn test_linear_ring_predicate() {
        assert!(ring(0.0).is_linear_ring());
        assert!(!LineString::default().is_linear_ring());

        // Closed but too short
        let short = LineString::new(vec![point(0.0, 0.0), point(1.0, 1.0), point(0.0, 0.0)]);
        assert!(!short.is_linear_ring());

        // Long enough but open
        let open: LineString = (0..4).map(|i| point(i as f64, i as f64)).collect();
        assert!(!open.is_linear_ring());
        // Repeated calls give the same answer
        assert!(!open.is_linear_ring());
    }

    #[test]
    fn test_polygon_rejects_open_ring() {
        let open: LineString = (0..4).map(|i| point(i as f64, 0.0)).collect();
        let result = Polygon::new(vec![ring(0.0), open]);
        assert_eq!(result, Err(DecodeError::NotLinearRing { index: 1 }));
    }

    #[test]
    fn test_polygon_rings() {
        let polygon = Polygon::new(vec![ring(0.0), ring(10.0)]).unwrap();
        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon.exterior(), Some(&ring(0.0)));
        assert_eq!(polygon.interiors(), &[ring(10.0)]);
        assert_eq!(polygon[1][0], point(10.0, 10.0));

        let empty = Polygon::new(vec![]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.exterior(), None);
        assert!(empty.interiors().is_empty());
    }

    #[test]
    fn test_multi_polygon_iteration() {
        let polygons = vec![
            Polygon::new(vec![ring(0.0)]).unwrap(),
            Polygon::new(vec![ring(10.0), ring(12.0)]).unwrap(),
        ];
        let multi: MultiPolygon = polygons.into_iter().collect();
        let ring_counts: Vec<_> = multi.iter().map(Polygon::len).collect();
        assert_eq!(ring_counts, vec![1, 2]);
    }

    #[test]
    fn test_geometry_collection_rejects_feature() {
        let feature = Feature::new(None, serde_json::Value::Null).unwrap();
        let result = GeometryCollection::new(vec![
            GeoJson::Point(point(0.0, 0.0)),
            GeoJson::Feature(feature),
        ]);
        assert!(matches!(result, Err(DecodeError::NotAGeometry { .. })));

        let nested = GeometryCollection::new(vec![GeoJson::GeometryCollection(
            GeometryCollection::default(),
        )])
        .unwrap();
        assert_eq!(nested.len(), 1);
    }
}
