//! Simple decoder to inspect GeoJSON files.

use std::fs;

use geojson_codec::{parse_geojson, Feature, GeoJson, GeoJsonType};

fn describe(geojson: &GeoJson) -> String {
    match geojson {
        GeoJson::Point(p) => match p.altitude() {
            Some(alt) => format!("Point({}, {}, {})", p.longitude(), p.latitude(), alt),
            None => format!("Point({}, {})", p.longitude(), p.latitude()),
        },
        GeoJson::MultiPoint(mp) => format!("MultiPoint[{} points]", mp.len()),
        GeoJson::LineString(ls) => format!(
            "LineString[{} points{}]",
            ls.len(),
            if ls.is_linear_ring() { ", closed" } else { "" }
        ),
        GeoJson::MultiLineString(mls) => format!("MultiLineString[{} lines]", mls.len()),
        GeoJson::Polygon(p) => format!("Polygon[{} rings]", p.len()),
        GeoJson::MultiPolygon(mp) => format!("MultiPolygon[{} polygons]", mp.len()),
        GeoJson::GeometryCollection(gc) => {
            let members: Vec<_> = gc.iter().map(describe).collect();
            format!("GeometryCollection[{}]", members.join(", "))
        }
        GeoJson::Feature(f) => format!("Feature({})", describe_feature(f)),
        GeoJson::FeatureCollection(fc) => format!("FeatureCollection[{} features]", fc.len()),
    }
}

fn describe_feature(feature: &Feature) -> String {
    let geometry = feature
        .geometry()
        .map_or_else(|| "no geometry".to_string(), describe);
    match feature.id() {
        Some(id) => format!("id={}, {}", id, geometry),
        None => geometry,
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample.geojson".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", text.len());

    let geojson = match parse_geojson(&text) {
        Ok(geojson) => geojson,
        Err(err) => {
            println!("Invalid GeoJSON ({}): {}", err.code().code(), err);
            std::process::exit(1);
        }
    };

    println!("\n=== Object ===");
    println!("Type: {}", geojson.kind());
    println!("Geometry: {}", geojson.is_geometry());

    if let Some(collection) = geojson.as_feature_collection() {
        let mut counts = vec![0usize; GeoJsonType::KNOWN.len()];
        let mut without_geometry = 0;
        for feature in collection {
            match feature.geometry() {
                Some(geometry) => {
                    let slot = GeoJsonType::KNOWN
                        .iter()
                        .position(|kind| *kind == geometry.kind())
                        .unwrap_or(0);
                    counts[slot] += 1;
                }
                None => without_geometry += 1,
            }
        }

        println!("\n=== Geometries ({} features) ===", collection.len());
        for (kind, count) in GeoJsonType::KNOWN.iter().zip(&counts) {
            if *count > 0 {
                println!("  {}: {}", kind, count);
            }
        }
        println!("  (none): {}", without_geometry);

        // Show first few features in detail
        println!("\n=== First 20 Features (detail) ===");
        for (i, feature) in collection.iter().take(20).enumerate() {
            println!("[{}] {}", i, describe_feature(feature));
        }
    } else {
        println!("\n{}", describe(&geojson));
    }
}
