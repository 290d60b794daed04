use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use scored_cache::config::ScoredCacheConfig;
use scored_cache::strategy::{
    FrequencyRecency, Gdsf, Lfu, Lfuda, Lru, LruK, ScoringStrategy, Weighted,
};
use scored_cache::ScoredCache;
use std::num::NonZeroU64;

const CACHE_SIZE: usize = 1000;

// Helper function to create caches with the init pattern
fn make_cache<P: ScoringStrategy>(cap: usize, strategy: P) -> ScoredCache<usize, usize, P> {
    let config = ScoredCacheConfig {
        capacity: NonZeroU64::new(cap as u64).unwrap(),
        consider_object_size: false,
    };
    ScoredCache::init(config, strategy, None)
}

/// Lookup hits, lookup misses and driver-style accesses that keep evicting.
fn bench_strategy<P: ScoringStrategy + Clone>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    name: &str,
    strategy: P,
) {
    let mut cache = make_cache(CACHE_SIZE, strategy.clone());
    for i in 0..CACHE_SIZE {
        cache.insert(i, i, 1).unwrap();
    }

    group.bench_function(format!("{} lookup hit", name), |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(cache.lookup(&(i % CACHE_SIZE)));
            }
        });
    });

    group.bench_function(format!("{} lookup miss", name), |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(cache.lookup(&(i + CACHE_SIZE)));
            }
        });
    });

    // Working set twice the capacity: about half the accesses evict
    let mut cache = make_cache(CACHE_SIZE, strategy);
    let mut next = 0usize;
    group.bench_function(format!("{} access with eviction", name), |b| {
        b.iter(|| {
            for _ in 0..100 {
                let key = (next * 7919) % (CACHE_SIZE * 2);
                next += 1;
                if cache.lookup(&key).is_none() {
                    black_box(cache.insert(key, key, 1)).unwrap();
                }
            }
        });
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cache Operations");

    bench_strategy(&mut group, "FrequencyRecency", FrequencyRecency::default());
    bench_strategy(&mut group, "LRU", Lru);
    bench_strategy(&mut group, "LFU", Lfu);
    bench_strategy(&mut group, "LFUDA", Lfuda::default());
    bench_strategy(&mut group, "GDSF", Gdsf::default());
    bench_strategy(&mut group, "LRU-2", LruK::<2>);
    bench_strategy(&mut group, "Weighted", Weighted::default());

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
