//! Benchmarks for the per-frame field sampling hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery::catalog::{BodyCatalog, SyntheticCatalogConfig};
use orrery::coordinates::Planar;
use orrery::field::FieldSampler;

fn bench_single_sample(c: &mut Criterion) {
    let catalog = BodyCatalog::standard();
    let mut sampler = FieldSampler::new(&catalog);
    sampler.advance(&catalog, 12.5);

    c.bench_function("field_single_sample", |b| {
        b.iter(|| sampler.sample(black_box(Planar::new(120.0, -45.0))))
    });
}

fn bench_advance(c: &mut Criterion) {
    let catalog = BodyCatalog::standard();
    let mut sampler = FieldSampler::new(&catalog);

    c.bench_function("field_advance", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t += 1.0 / 60.0;
            sampler.advance(&catalog, black_box(t));
        })
    });
}

fn bench_grid(c: &mut Criterion) {
    let catalog = BodyCatalog::standard();
    let mut sampler = FieldSampler::new(&catalog);
    sampler.advance(&catalog, 12.5);

    c.bench_function("field_grid_64", |b| {
        b.iter(|| sampler.sample_grid(black_box(1600.0), 64))
    });
}

fn bench_many_bodies(c: &mut Criterion) {
    let catalog = SyntheticCatalogConfig::new()
        .with_count(64)
        .generate()
        .unwrap();
    let mut sampler = FieldSampler::new(&catalog);
    sampler.advance(&catalog, 3.0);

    c.bench_function("field_single_sample_64_bodies", |b| {
        b.iter(|| sampler.sample(black_box(Planar::new(500.0, 500.0))))
    });
}

criterion_group!(
    benches,
    bench_single_sample,
    bench_advance,
    bench_grid,
    bench_many_bodies
);
criterion_main!(benches);
