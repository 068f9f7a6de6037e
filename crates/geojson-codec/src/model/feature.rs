//! Features and feature collections.

use serde_json::Value;

use crate::error::DecodeError;
use crate::model::GeoJson;

/// A spatially bounded entity: an optional geometry plus an opaque property
/// bag and an optional string identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Option<Box<GeoJson>>,
    properties: Value,
    id: Option<String>,
}

impl Feature {
    /// Creates a feature. Fails if `geometry` is a Feature or FeatureCollection.
    ///
    /// `properties` is stored verbatim; null is allowed.
    pub fn new(geometry: Option<GeoJson>, properties: Value) -> Result<Self, DecodeError> {
        if let Some(geometry) = &geometry {
            if !geometry.is_geometry() {
                return Err(DecodeError::NotAGeometry {
                    found: geometry.kind(),
                });
            }
        }
        Ok(Self {
            geometry: geometry.map(Box::new),
            properties,
            id: None,
        })
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The geometry, or `None` for an unlocated feature.
    pub fn geometry(&self) -> Option<&GeoJson> {
        self.geometry.as_deref()
    }

    pub fn properties(&self) -> &Value {
        &self.properties
    }

    /// Looks up a single property when the bag is an object.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Splits the feature into geometry, properties and identifier.
    pub fn into_parts(self) -> (Option<GeoJson>, Value, Option<String>) {
        (self.geometry.map(|g| *g), self.properties, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

sequence_accessors!(FeatureCollection, features, Feature);

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Point;

    #[test]
    fn test_feature_without_geometry() {
        let feature = Feature::new(None, json!({})).unwrap();
        assert!(feature.geometry().is_none());
        assert_eq!(feature.properties(), &json!({}));
        assert_eq!(feature.id(), None);
    }

    #[test]
    fn test_feature_parts() {
        let point = GeoJson::Point(Point::new(vec![1.0, 2.0]).unwrap());
        let feature = Feature::new(Some(point.clone()), json!({"name": "spring"}))
            .unwrap()
            .with_id("f-1");

        assert_eq!(feature.property("name"), Some(&json!("spring")));
        assert_eq!(feature.property("missing"), None);
        assert_eq!(feature.id(), Some("f-1"));

        let (geometry, properties, id) = feature.into_parts();
        assert_eq!(geometry, Some(point));
        assert_eq!(properties, json!({"name": "spring"}));
        assert_eq!(id.as_deref(), Some("f-1"));
    }

    #[test]
    fn test_feature_rejects_non_geometry() {
        let collection = GeoJson::FeatureCollection(FeatureCollection::default());
        let result = Feature::new(Some(collection), Value::Null);
        assert!(matches!(result, Err(DecodeError::NotAGeometry { .. })));
    }
}
