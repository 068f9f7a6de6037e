//! Benchmark for GeoJSON decoding/encoding using synthetic parcel data.
//!
//! Demonstrates the builder API with a large FeatureCollection.

use std::time::Instant;

use geojson_codec::{
    decode_geojson, encode_geojson, render_geojson, EncodeOptions, FeatureCollection,
    FeatureCollectionBuilder, GeoJson, LineString, MultiPolygon, Point, Polygon,
};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FEATURES: usize = 50_000;
const ITERS: u32 = 5;

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

/// Deterministic pseudo-random source (64-bit LCG) so runs are comparable.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

fn square_ring(x: f64, y: f64, size: f64) -> LineString {
    [(x, y), (x + size, y), (x + size, y + size), (x, y + size), (x, y)]
        .into_iter()
        .map(|(px, py)| Point::new(vec![px, py]).expect("finite coordinates"))
        .collect()
}

fn build_parcels(count: usize) -> FeatureCollection {
    let mut rng = Lcg(0x5eed);
    let mut builder = FeatureCollectionBuilder::new();

    for i in 0..count {
        let x = rng.range(-180.0, 170.0);
        let y = rng.range(-80.0, 80.0);
        let size = rng.range(0.001, 1.0);

        let geometry: GeoJson = match i % 3 {
            0 => Point::new(vec![x, y]).expect("finite coordinates").into(),
            1 => {
                let hole = square_ring(x + size / 4.0, y + size / 4.0, size / 2.0);
                Polygon::new(vec![square_ring(x, y, size), hole])
                    .expect("closed rings")
                    .into()
            }
            _ => MultiPolygon::new(vec![
                Polygon::new(vec![square_ring(x, y, size)]).expect("closed ring"),
                Polygon::new(vec![square_ring(x + size * 2.0, y, size)]).expect("closed ring"),
            ])
            .into(),
        };

        builder = builder.feature_with(|f| {
            f.geometry(geometry)
                .property("parcel", i as u64)
                .property("area", size * size)
                .property("zoned", i % 2 == 0)
                .id(format!("parcel-{}", i))
        });
    }

    builder.build().expect("valid features")
}

// =============================================================================
// BENCHMARK
// =============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FEATURES);

    let build_start = Instant::now();
    let collection: GeoJson = build_parcels(count).into();
    info!(features = count, elapsed = ?build_start.elapsed(), "built synthetic collection");

    // Encode to untyped value
    let encode_start = Instant::now();
    for _ in 0..ITERS {
        std::hint::black_box(encode_geojson(&collection));
    }
    let encode_time = encode_start.elapsed() / ITERS;
    let encoded = encode_geojson(&collection);

    let text = render_geojson(&collection, &EncodeOptions::compact());
    println!("Encoded {} features to {} bytes", count, text.len());
    println!("\nEncode: {:?} (avg of {} iterations)", encode_time, ITERS);

    // Parse text (JSON layer only)
    let parse_start = Instant::now();
    for _ in 0..ITERS {
        let _: Value = serde_json::from_str(&text).expect("Failed to parse JSON");
    }
    let parse_time = parse_start.elapsed() / ITERS;
    println!("\nParse JSON: {:?}", parse_time);
    println!(
        "  Throughput: {:.2} MB/s",
        (text.len() as f64 / 1_000_000.0) / parse_time.as_secs_f64()
    );

    // Decode + validate
    let decode_start = Instant::now();
    for _ in 0..ITERS {
        std::hint::black_box(decode_geojson(&encoded).expect("Failed to decode"));
    }
    let decode_time = decode_start.elapsed() / ITERS;
    let decoded = decode_geojson(&encoded).expect("Failed to decode");
    println!("\nDecode: {:?} (avg of {} iterations)", decode_time, ITERS);
    println!(
        "  Throughput: {:.2} features/ms",
        count as f64 / (decode_time.as_secs_f64() * 1000.0)
    );

    // Verify round trip and deterministic output
    assert_eq!(decoded, collection, "Round trip should be lossless");
    assert_eq!(
        render_geojson(&decoded, &EncodeOptions::compact()),
        text,
        "Encoding should be deterministic"
    );
    println!("\nRound trip verified");
}
