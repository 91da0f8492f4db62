//! Default-instance construction benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protodefaults::{full_registry, lite_registry};

fn bench_default_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_instances");

    group.bench_function("lite", |b| {
        b.iter(|| black_box(lite_registry().default_instances()))
    });

    group.bench_function("full", |b| {
        b.iter(|| black_box(full_registry().default_instances()))
    });

    group.bench_function("full_report", |b| {
        b.iter(|| black_box(full_registry().report()))
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("instantiate_by_name", |b| {
        b.iter(|| {
            black_box(
                full_registry()
                    .instantiate(black_box("com.example.tutorial.SecondMsg"))
                    .is_ok(),
            )
        })
    });
}

criterion_group!(benches, bench_default_instances, bench_lookup);
criterion_main!(benches);
