//! Concurrent Cache Benchmarks
//!
//! Measures how `ConcurrentScoredCache` behaves as more threads contend for
//! its single lock.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scored_cache::strategy::{FrequencyRecency, Gdsf, Lfuda, ScoringStrategy};
use scored_cache::ConcurrentScoredCache;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::thread;

const CACHE_SIZE: u64 = 10_000;
const OPS_PER_THREAD: u64 = 1_000;

fn make_cache<P: ScoringStrategy>(cap: u64, strategy: P) -> Arc<ConcurrentScoredCache<u64, u64, P>> {
    Arc::new(ConcurrentScoredCache::new(
        NonZeroU64::new(cap).unwrap(),
        strategy,
    ))
}

/// Every thread reads keys that are known to be resident
fn run_concurrent_reads<P>(cache: &Arc<ConcurrentScoredCache<u64, u64, P>>, num_threads: u64)
where
    P: ScoringStrategy + Send + 'static,
    P::Record: Send,
    P::Global: Send,
{
    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (t * OPS_PER_THREAD + i) % CACHE_SIZE;
                    black_box(cache.lookup(&key));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Lookup, then insert on miss, over a key space larger than the cache
fn run_concurrent_mixed<P>(cache: &Arc<ConcurrentScoredCache<u64, u64, P>>, num_threads: u64)
where
    P: ScoringStrategy + Send + 'static,
    P::Record: Send,
    P::Global: Send,
{
    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (t * 7919 + i * 31) % (CACHE_SIZE * 2);
                    if cache.lookup(&key).is_none() {
                        let _ = cache.insert(key, i, key % 8 + 1);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Reads");

    let cache = make_cache(CACHE_SIZE, FrequencyRecency::default());
    for i in 0..CACHE_SIZE {
        cache.insert(i, i, 1).unwrap();
    }

    for num_threads in [1u64, 2, 4, 8] {
        group.throughput(Throughput::Elements(num_threads * OPS_PER_THREAD));
        group.bench_with_input(
            BenchmarkId::new("FrequencyRecency", num_threads),
            &num_threads,
            |b, &n| b.iter(|| run_concurrent_reads(&cache, n)),
        );
    }

    group.finish();
}

fn concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Mixed");
    group.sample_size(20);

    let lfuda = make_cache(CACHE_SIZE * 4, Lfuda::default());
    let gdsf = make_cache(CACHE_SIZE * 4, Gdsf::default());

    for num_threads in [1u64, 4, 8] {
        group.throughput(Throughput::Elements(num_threads * OPS_PER_THREAD));
        group.bench_with_input(BenchmarkId::new("LFUDA", num_threads), &num_threads, |b, &n| {
            b.iter(|| run_concurrent_mixed(&lfuda, n))
        });
        group.bench_with_input(BenchmarkId::new("GDSF", num_threads), &num_threads, |b, &n| {
            b.iter(|| run_concurrent_mixed(&gdsf, n))
        });
    }

    group.finish();
}

criterion_group!(benches, concurrent_reads, concurrent_mixed);
criterion_main!(benches);
