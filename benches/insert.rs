//! Single-item insert benchmarks
//!
//! 1. **By Size**: latency as filter capacity grows
//! 2. **By False Positive Rate**: lower rates mean more probes per insert
//! 3. **By Item Type**: u64 versus 32 and 256 byte strings
//! 4. **Counting**: nibble counter increments versus bit sets
use bloomset::{CountingBloomFilter, StandardBloomFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_insert_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_size");

    for &size in SIZES {
        let items = generate_strings(size, 32);

        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut filter = StandardBloomFilter::new(size, 0.01, "FNV32").unwrap();
                for item in &items {
                    filter.add(black_box(item)).unwrap();
                }
                filter
            });
        });
    }

    group.finish();
}

fn bench_insert_by_fpr(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_fpr");
    let items = generate_strings(10_000, 32);

    for &rate in FP_RATES {
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| {
                let mut filter = StandardBloomFilter::new(10_000, rate, "FNV32").unwrap();
                for item in &items {
                    filter.add(black_box(item)).unwrap();
                }
                filter
            });
        });
    }

    group.finish();
}

fn bench_insert_by_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_by_type");
    let count = 10_000;
    group.throughput(Throughput::Elements(count as u64));

    let numbers = generate_u64s(count);
    group.bench_function("u64", |b| {
        b.iter(|| {
            let mut filter = StandardBloomFilter::new(count, 0.01, "FNV32").unwrap();
            for n in &numbers {
                filter.add(black_box(n)).unwrap();
            }
            filter
        });
    });

    for len in [32usize, 256] {
        let strings = generate_strings(count, len);
        group.bench_with_input(BenchmarkId::new("string", len), &strings, |b, strings| {
            b.iter(|| {
                let mut filter = StandardBloomFilter::new(count, 0.01, "FNV32").unwrap();
                for s in strings {
                    filter.add(black_box(s)).unwrap();
                }
                filter
            });
        });
    }

    group.finish();
}

fn bench_counting_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_insert");
    let items = generate_strings(10_000, 32);
    group.throughput(Throughput::Elements(items.len() as u64));

    group.bench_function("add", |b| {
        b.iter(|| {
            let mut filter = CountingBloomFilter::new(10_000, 0.01, "FNV32").unwrap();
            for item in &items {
                filter.add(black_box(item)).unwrap();
            }
            filter
        });
    });

    group.bench_function("add_delete", |b| {
        b.iter(|| {
            let mut filter = CountingBloomFilter::new(10_000, 0.01, "FNV32").unwrap();
            for item in &items {
                filter.add(black_box(item)).unwrap();
            }
            for item in &items {
                filter.delete(black_box(item)).unwrap();
            }
            filter
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_by_size,
    bench_insert_by_fpr,
    bench_insert_by_type,
    bench_counting_insert
);
criterion_main!(benches);
