//! Limits applied while decoding.

/// Default maximum nesting depth of GeoJSON objects.
///
/// Counts GeometryCollection members, Feature geometries and
/// FeatureCollection members. Coordinate arrays do not count.
pub const MAX_NESTING_DEPTH: usize = 64;
