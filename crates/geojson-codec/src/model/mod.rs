//! Data model types for GeoJSON.
//!
//! This module contains the typed, always-valid representation of GeoJSON
//! objects:
//! - The `type` discriminator ([`GeoJsonType`])
//! - Geometries (Point through GeometryCollection)
//! - Features and feature collections
//! - The root union ([`GeoJson`])
//! - Builders (ergonomic Feature construction)
//!
//! Every value is produced by a validating constructor and cannot be changed
//! in place afterwards. To replace an element, take the parts back with the
//! `into_*` accessors and construct a new value.

/// Read-only sequence accessors shared by every container type.
macro_rules! sequence_accessors {
    ($container:ident, $field:ident, $item:ty) => {
        impl $container {
            /// Returns the number of elements.
            pub fn len(&self) -> usize {
                self.$field.len()
            }

            /// Returns true if there are no elements.
            pub fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }

            /// Returns the element at `index`, or `None` if out of bounds.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.$field.get(index)
            }

            /// Iterates over the elements in order.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.$field.iter()
            }
        }

        impl std::ops::Index<usize> for $container {
            type Output = $item;

            fn index(&self, index: usize) -> &$item {
                &self.$field[index]
            }
        }

        impl<'a> IntoIterator for &'a $container {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.$field.iter()
            }
        }
    };
}

pub mod builder;
pub mod feature;
pub mod geojson;
pub mod geometry;
pub mod kind;

pub use builder::{FeatureBuilder, FeatureCollectionBuilder};
pub use feature::{Feature, FeatureCollection};
pub use geojson::GeoJson;
pub use geometry::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
pub use kind::GeoJsonType;
