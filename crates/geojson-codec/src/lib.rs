//! Typed GeoJSON: decoding, validation and canonical encoding.
//!
//! This crate turns untyped JSON values into a strongly-typed GeoJSON object
//! graph that enforces the format's structural rules, and writes that graph
//! back to JSON deterministically.
//!
//! # Overview
//!
//! - **Fail closed**: any invalid descendant invalidates the whole object;
//!   there are no partial results
//! - **Always valid**: every typed value is produced by a checking constructor
//! - **Canonical output**: integral coordinates are written as integers and
//!   object members are emitted in a fixed order
//!
//! # Quick Start
//!
//! ```rust
//! use geojson_codec::{parse_geojson, encode_geojson, GeoJsonType};
//!
//! let geojson = parse_geojson(
//!     r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[2,2],[0,0]]]}"#,
//! ).unwrap();
//!
//! assert_eq!(geojson.kind(), GeoJsonType::Polygon);
//! let polygon = geojson.as_polygon().unwrap();
//! assert!(polygon[0].is_linear_ring());
//!
//! let value = encode_geojson(&geojson);
//! assert_eq!(value["coordinates"].to_string(), "[[[0,0],[1,1],[2,2],[0,0]]]");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Typed values (Point ... FeatureCollection, the [`GeoJson`] union)
//! - [`codec`]: JSON decoding/encoding and the root dispatcher
//! - [`validate`]: Conformance checks on untyped values
//! - [`error`]: Error types
//! - [`limits`]: Decoding limits
//!
//! # Errors
//!
//! Every structural problem reports [`ErrorCode::InvalidObject`]. The
//! individual [`DecodeError`] variants say what was wrong for logging, not
//! for branching.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_geojson, decode_geojson_with_options, encode_geojson, parse_geojson,
    parse_geojson_with_options, render_geojson, DecodeOptions, EncodeOptions,
};
pub use error::{DecodeError, ErrorCode};
pub use model::{
    Feature, FeatureBuilder, FeatureCollection, FeatureCollectionBuilder, GeoJson, GeoJsonType,
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
pub use validate::{is_linear_ring, is_valid_geojson, validate_geojson, validate_geometry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
