use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::{Point2, Vector2};
use pocket_instruments::{
    GeoPoint, LevelMode, LevelSettings, MeasureSession, OrientationSample, Platform,
    ReferenceObject, TargetTracker, ZeroOffset, haversine_distance, initial_bearing,
    normalize_heading, read_level,
};
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<Vector2<f32>>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.016; // ~60 Hz motion events

            // Slow hand wobble around a resting pose plus sensor noise
            let wobble = time * 0.5 * 2.0 * PI;
            samples.push(Vector2::new(
                1.5 * wobble.sin() + rng.random_range(-0.05..0.05),
                1.5 * (wobble * 1.3).cos() + rng.random_range(-0.05..0.05),
            ));
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> Vector2<f32> {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

/// Benchmark the planar spirit-level reading
fn bench_planar_reading(c: &mut Criterion) {
    let alignment = Platform::Android.accel_alignment();
    let zero = ZeroOffset::capture(Vector2::new(0.3, -0.2));
    let settings = LevelSettings::default();
    let mut data = PreGeneratedData::new(1024, 42);

    c.bench_function("level_planar_reading", |b| {
        b.iter(|| {
            read_level(
                black_box(data.next()),
                black_box(alignment),
                black_box(zero),
                LevelMode::Planar,
                black_box(settings),
            )
        })
    });
}

/// Benchmark the single-axis bar reading
fn bench_bar_reading(c: &mut Criterion) {
    let alignment = Platform::Ios.accel_alignment();
    let zero = ZeroOffset::default();
    let settings = LevelSettings::default();
    let mut data = PreGeneratedData::new(1024, 43);

    c.bench_function("level_bar_reading", |b| {
        b.iter(|| {
            read_level(
                black_box(data.next()),
                black_box(alignment),
                black_box(zero),
                LevelMode::BarHorizontal,
                black_box(settings),
            )
        })
    });
}

/// Benchmark heading normalization from an alpha-platform event
fn bench_normalize_heading(c: &mut Criterion) {
    let sample = OrientationSample::from_alpha(123.456);

    c.bench_function("compass_normalize_heading", |b| {
        b.iter(|| normalize_heading(black_box(Platform::Android), black_box(sample)))
    });
}

/// Benchmark the haversine distance between two fixed points
fn bench_haversine_distance(c: &mut Criterion) {
    let from = GeoPoint::new(37.5665, 126.9780);
    let to = GeoPoint::new(35.1796, 129.0756);

    c.bench_function("geo_haversine_distance", |b| {
        b.iter(|| haversine_distance(black_box(from), black_box(to)))
    });
}

/// Benchmark the initial bearing between two fixed points
fn bench_initial_bearing(c: &mut Criterion) {
    let from = GeoPoint::new(37.5665, 126.9780);
    let to = GeoPoint::new(35.1796, 129.0756);

    c.bench_function("geo_initial_bearing", |b| {
        b.iter(|| initial_bearing(black_box(from), black_box(to)))
    });
}

/// Benchmark the per-fix target solution (distance + bearing)
fn bench_target_solution(c: &mut Criterion) {
    let mut tracker = TargetTracker::new();
    tracker.capture(GeoPoint::new(37.5796, 126.9770));
    let current = GeoPoint::new(37.5665, 126.9780);

    c.bench_function("geo_target_solution", |b| {
        b.iter(|| tracker.solution(black_box(current)))
    });
}

/// Benchmark a complete measurement session from photo to result
fn bench_measurement_session(c: &mut Criterion) {
    c.bench_function("measure_full_session", |b| {
        b.iter(|| {
            let mut session = MeasureSession::new();
            session.begin(black_box(ReferenceObject::CreditCard));
            session.drag(
                black_box(Point2::new(40.0, 200.0)),
                black_box(Point2::new(240.0, 200.0)),
            );
            session.confirm_reference().unwrap();
            session.drag(
                black_box(Point2::new(60.0, 340.0)),
                black_box(Point2::new(160.0, 340.0)),
            );
            session.end_drag()
        })
    });
}

criterion_group!(
    benches,
    bench_planar_reading,
    bench_bar_reading,
    bench_normalize_heading,
    bench_haversine_distance,
    bench_initial_bearing,
    bench_target_solution,
    bench_measurement_session
);

criterion_main!(benches);
