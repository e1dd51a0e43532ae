//! Query benchmarks
//!
//! Hits return only after all `k` probes; misses usually stop at the first
//! clear bit, so the two are measured separately.
use bloomset::CountingBloomFilter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_query_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_hits");

    for &size in SIZES {
        let (filter, items) = filled_filter(size, size / 2);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.contains(black_box(&items[idx % items.len()])).unwrap();
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_query_misses(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_misses");

    for &size in SIZES {
        let (filter, _) = filled_filter(size, size / 2);
        let probes = generate_strings(1_000, 24);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.contains(black_box(&probes[idx % probes.len()])).unwrap();
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_counting_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_query");
    let items = generate_strings(5_000, 32);
    let mut filter = CountingBloomFilter::new(10_000, 0.01, "FNV32").unwrap();
    for item in &items {
        filter.add(item).unwrap();
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("hit", |b| {
        let mut idx = 0;
        b.iter(|| {
            let hit = filter.contains(black_box(&items[idx % items.len()])).unwrap();
            idx += 1;
            hit
        });
    });

    group.finish();
}

criterion_group!(benches, bench_query_hits, bench_query_misses, bench_counting_query);
criterion_main!(benches);
