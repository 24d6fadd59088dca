//! Benchmark for terrain generation and materialization.
//!
//! Run with: cargo bench --package mexis_procedural --bench generation_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mexis_procedural::{
    generate, materialize, HeadlessTiles, ResourceTable, WorldRng, WorldSeed,
};

fn benchmark_window_sized_world(c: &mut Criterion) {
    c.bench_function("generate_25x20", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(generate(25, 20, seed))
        });
    });
}

fn benchmark_large_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_world");

    // 1000x1000 cells
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);
    group.bench_function("generate_1000x1000", |b| {
        b.iter(|| black_box(generate(1000, 1000, 42)));
    });

    group.finish();
}

fn benchmark_materialize(c: &mut Criterion) {
    let canvas = generate(256, 256, 42).unwrap();
    let factory = HeadlessTiles::new(32);

    let mut group = c.benchmark_group("materialize");
    group.throughput(Throughput::Elements(256 * 256));
    group.bench_function("ground_256x256", |b| {
        b.iter(|| {
            let mut rng = WorldRng::from_seed(WorldSeed::new(7));
            black_box(materialize(&canvas, 32, &factory, &mut rng))
        });
    });

    let mut rng = WorldRng::from_seed(WorldSeed::new(7));
    let ground = materialize(&canvas, 32, &factory, &mut rng);
    let table = ResourceTable::default();
    group.bench_function("resources_256x256", |b| {
        b.iter(|| {
            let mut rng = WorldRng::from_seed(WorldSeed::new(9));
            black_box(table.overlay(&ground, &factory, &mut rng))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_window_sized_world,
    benchmark_large_world,
    benchmark_materialize,
);
criterion_main!(benches);
