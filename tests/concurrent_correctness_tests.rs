//! Concurrent Cache Correctness Tests
//!
//! These tests validate that `ConcurrentScoredCache` keeps the single-threaded
//! eviction semantics and invariants while being accessed from many threads.
//!
//! ## Segments
//!
//! 1. **Strategy Correctness**: one thread, same decisions as `ScoredCache`
//! 2. **Thread Safety Invariants**: capacity and counters under contention

#![cfg(feature = "concurrent")]

use core::num::NonZeroU64;
use scored_cache::config::ScoredCacheConfig;
use scored_cache::strategy::{FrequencyRecency, Gdsf, Lfu, Lfuda, ScoringStrategy};
use scored_cache::{ConcurrentScoredCache, ScoredCache};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

fn make_cache<P: ScoringStrategy>(cap: u64, strategy: P) -> ConcurrentScoredCache<u64, u64, P> {
    ConcurrentScoredCache::new(NonZeroU64::new(cap).unwrap(), strategy)
}

// ============================================================================
// SEGMENT 1: STRATEGY CORRECTNESS THROUGH THE WRAPPER
// ============================================================================

#[test]
fn test_wrapper_matches_single_threaded_decisions() {
    let trace: Vec<u64> = (0..500u64).map(|i| (i * 7 + i / 3) % 23).collect();

    let shared = make_cache(8, Lfuda::default());
    let mut plain: ScoredCache<u64, u64, Lfuda> =
        ScoredCache::new(NonZeroU64::new(8).unwrap(), Lfuda::default());

    for &key in &trace {
        if shared.lookup(&key).is_none() {
            shared.insert(key, key, 1).unwrap();
        }
        if plain.lookup(&key).is_none() {
            plain.insert(key, key, 1).unwrap();
        }
    }

    let shared = shared.into_inner();
    let shared_keys: Vec<u64> = shared.keys().copied().collect();
    let plain_keys: Vec<u64> = plain.keys().copied().collect();
    assert_eq!(shared_keys, plain_keys);
    assert_eq!(shared.hit_count(), plain.hit_count());
    assert_eq!(shared.global_state(), plain.global_state());
}

#[test]
fn test_lfu_eviction_through_wrapper() {
    let cache = make_cache(3, Lfu);
    cache.insert(1, 10, 1).unwrap();
    cache.insert(2, 20, 1).unwrap();
    cache.insert(3, 30, 1).unwrap();

    cache.lookup(&1);
    cache.lookup(&1);
    cache.lookup(&3);

    cache.insert(4, 40, 1).unwrap();
    assert!(!cache.contains(&2), "Key 2 had the lowest frequency");
    assert!(cache.contains(&1));
    assert!(cache.contains(&3));
    assert!(cache.contains(&4));
}

#[test]
fn test_gdsf_size_accounting_through_wrapper() {
    let cache = make_cache(100, Gdsf::default());
    cache.insert(1, 0, 60).unwrap();
    cache.insert(2, 0, 30).unwrap();
    assert_eq!(cache.used_size(), 90);

    cache.insert(3, 0, 20).unwrap();
    assert!(!cache.contains(&1));
    assert_eq!(cache.used_size(), 50);
    assert!(cache.insert(4, 0, 101).unwrap_err().is_too_large());
}

// ============================================================================
// SEGMENT 2: THREAD SAFETY INVARIANTS
// ============================================================================

#[test]
fn test_capacity_never_exceeded_under_contention() {
    let cache = Arc::new(make_cache(64, FrequencyRecency::default()));
    let num_threads = 8;
    let ops_per_thread = 2_000u64;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = (i * 31 + t * 17) % 256;
                    let size = key % 4 + 1;
                    if cache.lookup(&key).is_none() {
                        // Another thread may have inserted the key in between
                        let _ = cache.insert(key, i, size);
                    }
                    assert!(cache.used_size() <= cache.capacity());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.used_size() <= 64);
    assert_eq!(
        cache.hit_count() + cache.miss_count(),
        num_threads * ops_per_thread
    );
}

#[test]
fn test_with_cache_lookup_or_insert_is_atomic() {
    let cache = Arc::new(make_cache(1_000, Lfu));
    let inserts = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let inserts = Arc::clone(&inserts);
            thread::spawn(move || {
                for key in 0..100u64 {
                    cache.with_cache(|inner| {
                        if inner.lookup(&key).is_none() {
                            inner.insert(key, key, 1).unwrap();
                            inserts.fetch_add(1, Ordering::Relaxed);
                        }
                    });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every key inserted exactly once, every other access a hit
    assert_eq!(inserts.load(Ordering::Relaxed), 100);
    assert_eq!(cache.len(), 100);
    assert_eq!(cache.miss_count(), 100);
    assert_eq!(cache.hit_count(), 700);
    assert_eq!(cache.access_count(), 800);
}

#[test]
fn test_clear_during_concurrent_access() {
    let config = ScoredCacheConfig {
        capacity: NonZeroU64::new(32).unwrap(),
        consider_object_size: false,
    };
    let cache: Arc<ConcurrentScoredCache<u64, u64, Lfu>> =
        Arc::new(ConcurrentScoredCache::init(config, Lfu, None));

    let writers: Vec<_> = (0..4u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..1_000u64 {
                    let key = t * 10_000 + i;
                    let _ = cache.insert(key, i, 1);
                }
            })
        })
        .collect();

    let clearer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for _ in 0..50 {
                cache.clear();
                thread::yield_now();
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    clearer.join().unwrap();

    assert!(cache.len() <= 32);
    assert_eq!(cache.used_size(), cache.len() as u64);
}
