//! JSON encoding/decoding for GeoJSON.
//!
//! Decoding turns an untyped `serde_json::Value` into the typed model and
//! fails on the first invalid descendant. Encoding is the mirror walk and
//! never fails.

pub mod feature;
pub mod geojson;
pub mod geometry;
pub mod primitives;
mod serde_impl;

pub use feature::{
    decode_feature, decode_feature_collection, encode_feature, encode_feature_collection,
};
pub use geojson::{
    decode_geojson, decode_geojson_with_options, encode_geojson, parse_geojson,
    parse_geojson_with_options, render_geojson, DecodeOptions, EncodeOptions,
};
pub use geometry::{
    decode_geometry_collection, decode_line_string, decode_multi_line_string, decode_multi_point,
    decode_multi_polygon, decode_point, decode_polygon, encode_geometry_collection,
    encode_line_string, encode_multi_line_string, encode_multi_point, encode_multi_polygon,
    encode_point, encode_polygon,
};
