//! Benchmarks for the per-frame hot path.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shatter::{ShatterSimulation, Vec2};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for intensity in [0.0f32, 0.5, 1.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(intensity),
            &intensity,
            |b, &intensity| {
                let mut sim =
                    ShatterSimulation::with_rng(Vec2::ZERO, intensity, SmallRng::seed_from_u64(1));
                b.iter(|| black_box(sim.update(1.0 / 60.0, intensity)))
            },
        );
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let sim = ShatterSimulation::with_rng(Vec2::ZERO, 1.0, SmallRng::seed_from_u64(2));

    group.bench_function("json_100", |b| b.iter(|| black_box(sim.export_json())));
    group.bench_function("instances_100", |b| b.iter(|| black_box(sim.instance_bytes())));

    group.finish();
}

criterion_group!(benches, bench_step, bench_export);
criterion_main!(benches);
