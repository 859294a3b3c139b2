//! Search and cache benchmarks
//!
//! Run with: `cargo bench -p citytz-core`

use std::hint::black_box;

use citytz_core::{CityIndex, CitySearch, LruCache, SearchOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Engine
// ============================================================================

fn bench_lookup_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_cold");
    let index = CityIndex::default();
    index.dataset_len().expect("embedded dataset loads");

    group.bench_function("exact", |b| {
        b.iter(|| {
            index.clear_cache();
            black_box(index.lookup_exact(black_box("Springfield")).unwrap())
        })
    });
    group.bench_function("partial", |b| {
        b.iter(|| {
            index.clear_cache();
            black_box(index.lookup_partial(black_box("springfield mo")).unwrap())
        })
    });
    group.bench_function("iso", |b| {
        b.iter(|| {
            index.clear_cache();
            black_box(index.lookup_by_iso_code(black_box("DE")).unwrap())
        })
    });

    group.finish();
}

fn bench_lookup_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_cached");
    let index = CityIndex::default();
    let options = SearchOptions::default();
    index.search("london", options).unwrap();
    index.lookup_exact("Chicago").unwrap();

    group.bench_function("exact", |b| {
        b.iter(|| black_box(index.lookup_exact(black_box("chicago")).unwrap()))
    });
    group.bench_function("search", |b| {
        b.iter(|| black_box(index.search(black_box("London"), options).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Cache
// ============================================================================

fn bench_cache_set_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_set");

    for size in [100, 1000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("lru", size), &size, |b, &size| {
            let cache: LruCache<u64, u64> = LruCache::new(size);
            let mut counter = 0u64;
            b.iter(|| {
                cache.set(black_box(counter), counter);
                counter = counter.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_cache_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_get_hit");

    for size in [100, 1000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("lru", size), &size, |b, &size| {
            let cache: LruCache<u64, u64> = LruCache::new(size);
            for i in 0..size as u64 {
                cache.set(i, i);
            }
            let mut counter = 0u64;
            b.iter(|| {
                let key = counter % (size as u64);
                black_box(cache.get(&black_box(key)));
                counter = counter.wrapping_add(1);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup_cold,
    bench_lookup_cached,
    bench_cache_set_with_eviction,
    bench_cache_get_hit
);
criterion_main!(benches);
