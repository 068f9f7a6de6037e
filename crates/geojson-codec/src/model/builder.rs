//! Builder API for ergonomic Feature construction.
//!
//! # Example
//!
//! ```rust
//! use geojson_codec::model::builder::FeatureCollectionBuilder;
//! use geojson_codec::Point;
//!
//! let collection = FeatureCollectionBuilder::new()
//!     .feature_with(|f| f
//!         .geometry(Point::new(vec![13.4, 52.5]).unwrap())
//!         .property("name", "Berlin")
//!         .id("berlin")
//!     )
//!     .feature_with(|f| f.property("name", "Nowhere"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(collection.len(), 2);
//! ```

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::model::{Feature, FeatureCollection, GeoJson};

/// Builder for a single Feature.
///
/// Properties start as an empty object. Validation happens in [`build`].
///
/// [`build`]: FeatureBuilder::build
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    geometry: Option<GeoJson>,
    properties: Value,
    id: Option<String>,
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureBuilder {
    pub fn new() -> Self {
        Self {
            geometry: None,
            properties: Value::Object(Map::new()),
            id: None,
        }
    }

    /// Sets the geometry.
    pub fn geometry(mut self, geometry: impl Into<GeoJson>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Replaces the whole property bag.
    pub fn properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }

    /// Adds one property. A non-object bag is replaced by a fresh object.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if !self.properties.is_object() {
            self.properties = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.properties {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Sets the identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn build(self) -> Result<Feature, DecodeError> {
        let feature = Feature::new(self.geometry, self.properties)?;
        Ok(match self.id {
            Some(id) => feature.with_id(id),
            None => feature,
        })
    }
}

/// Builder for a FeatureCollection.
///
/// The first feature that fails to build fails the whole collection.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollectionBuilder {
    features: Vec<Result<Feature, DecodeError>>,
}

impl FeatureCollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an already constructed feature.
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(Ok(feature));
        self
    }

    /// Adds several features at once.
    pub fn features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features.into_iter().map(Ok));
        self
    }

    /// Adds a feature using a builder function.
    pub fn feature_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce(FeatureBuilder) -> FeatureBuilder,
    {
        self.features.push(f(FeatureBuilder::new()).build());
        self
    }

    pub fn build(self) -> Result<FeatureCollection, DecodeError> {
        self.features.into_iter().collect()
    }
}
