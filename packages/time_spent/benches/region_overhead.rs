//! Measures the overhead of timing a region, compared to not timing it at all.
//!
//! The region itself is empty, so everything measured is instrumentation cost.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

time_spent::define_counter!(EMPTY_REGION, OUTER_REGION);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_spent_overhead");

    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    group.bench_function("region_empty", |b| {
        b.iter(|| {
            time_spent::time_region!(EMPTY_REGION);
            black_box(());
        });
    });

    group.bench_function("region_nested_empty", |b| {
        b.iter(|| {
            time_spent::time_region!(OUTER_REGION);
            {
                time_spent::time_region!(EMPTY_REGION);
                black_box(());
            }
        });
    });

    group.finish();
}
