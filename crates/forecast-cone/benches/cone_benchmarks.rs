//! Benchmarks for forecast cone generation.
//!
//! Run with: cargo bench --package forecast-cone
//! Or: cargo bench --package forecast-cone --bench cone_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use forecast_cone::{create_circle, generate_forecast_cone, storm_layer, LayerOptions};
use storm_common::{Basin, Category, LatLon, Storm, StormMetadata, TrackPoint};

/// A random walk through the tropical Atlantic with `len` points.
fn random_storm(len: usize, seed: u64) -> Storm {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lat = rng.gen_range(10.0..20.0);
    let mut lon = rng.gen_range(-70.0..-30.0);

    let track = (0..len)
        .map(|_| {
            lat += rng.gen_range(0.1..0.8);
            lon -= rng.gen_range(0.2..1.2);
            TrackPoint::at(lat, lon)
                .with_wind_speed(rng.gen_range(20.0..160.0))
                .with_pressure(rng.gen_range(900.0..1010.0))
                .with_category(Category::from_code(&rng.gen_range(1..=5).to_string()))
        })
        .collect();

    Storm::new(StormMetadata::new("BENCH", 2024, Basin::NorthAtlantic), track)
}

// =============================================================================
// CIRCLE BENCHMARKS
// =============================================================================

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    group.bench_function("create_circle_100km", |b| {
        b.iter(|| create_circle(black_box(LatLon::new(25.0, -80.0)), black_box(100.0)))
    });

    group.bench_function("create_circle_pole", |b| {
        b.iter(|| create_circle(black_box(LatLon::new(90.0, 0.0)), black_box(100.0)))
    });

    group.finish();
}

// =============================================================================
// CONE BENCHMARKS
// =============================================================================

fn bench_cone(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_cone");

    for len in [10usize, 50, 200] {
        let storm = random_storm(len, 42);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("generate", len), &storm, |b, storm| {
            b.iter(|| generate_forecast_cone(black_box(storm)))
        });
    }

    group.finish();
}

fn bench_layer_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_serialization");
    let storm = random_storm(50, 7);
    let options = LayerOptions::default();

    group.bench_function("storm_layer_50", |b| {
        b.iter(|| storm_layer(black_box(&storm), &options))
    });

    let layer = storm_layer(&storm, &options);
    group.bench_function("to_json_50", |b| b.iter(|| black_box(&layer).to_json()));

    group.finish();
}

criterion_group!(benches, bench_circle, bench_cone, bench_layer_serialization);
criterion_main!(benches);
