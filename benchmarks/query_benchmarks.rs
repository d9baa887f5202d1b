#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query mutation benchmarks over typical results-page addresses
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SHORT: &str = "?q=cats";
const TYPICAL: &str = "?q=how+to+cook+rice&p=2&t=images&safe=f";
const ENCODED: &str = "?q=%E6%97%A5%E6%9C%AC%E8%AA%9E+%E6%96%87%E5%AD%97&p=12&f=week&t=maps&safe=f";

fn bench_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("change");

    group.bench_function("append", |b| {
        b.iter(|| serp::change(black_box(SHORT), black_box("p"), black_box("2")));
    });

    group.bench_function("overwrite", |b| {
        b.iter(|| serp::change(black_box(TYPICAL), black_box("p"), black_box("3")));
    });

    group.bench_function("overwrite_encoded", |b| {
        b.iter(|| serp::change(black_box(ENCODED), black_box("q"), black_box("!w 日本語")));
    });

    group.bench_function("remove", |b| {
        b.iter(|| serp::change(black_box(TYPICAL), black_box("t"), black_box("")));
    });

    group.finish();
}

fn bench_remove_absent(c: &mut Criterion) {
    c.bench_function("remove_absent", |b| {
        b.iter(|| serp::remove(black_box(ENCODED), black_box("o")));
    });
}

criterion_group!(benches, bench_change, bench_remove_absent);
criterion_main!(benches);
