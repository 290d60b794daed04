#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Choosing a Strategy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                    Which Scoring Strategy Should I Use?                      │
//! ├─────────────────────────────────────────────────────────────────────────────┤
//! │                                                                              │
//! │  Recency matters most? ──Yes──▶ Scans of cold keys? ──Yes──▶ LruK<2>         │
//! │        │                                │                                    │
//! │        No                               No ─────────────────▶ Lru            │
//! │        ▼                                                                     │
//! │  Frequency matters most? ──Yes──▶ Popularity drifts? ──Yes──▶ Lfuda          │
//! │        │                                │                                    │
//! │        No                               No ─────────────────▶ Lfu            │
//! │        ▼                                                                     │
//! │  Variable-sized objects? ──Yes──▶ Gdsf                                       │
//! │        │                                                                     │
//! │        No ──▶ FrequencyRecency, or Weighted to tune every term               │
//! │                                                                              │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Strategy | Description | Best Use Case |
//! |----------|-------------|---------------|
//! | [`FrequencyRecency`] | Weighted frequency minus idle time | General purpose default |
//! | [`Lru`] | Least Recently Used | Temporal locality |
//! | [`Lfu`] | Least Frequently Used | Stable popularity |
//! | [`Lfuda`] | LFU with Dynamic Aging | Long-running, evolving popularity |
//! | [`Gdsf`] | Greedy Dual-Size Frequency | CDNs, variable-sized objects |
//! | [`LruK`] | K-th most recent access | Scan-heavy workloads |
//! | [`Weighted`] | Frequency, idle time and size with decay | Hand-tuned heuristics |
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `lookup` | O(1) |
//! | `insert` without eviction | O(1) |
//! | each eviction | O(n) scan, plus O(n log n) to hand residents to `on_evict` in insertion order |
//!
//! ## Driving the Cache
//!
//! The cache never fetches values itself. A driver looks a key up and inserts
//! it on a miss:
//!
//! ```rust
//! use scored_cache::config::ScoredCacheConfig;
//! use scored_cache::strategy::Lfuda;
//! use scored_cache::ScoredCache;
//! use core::num::NonZeroU64;
//!
//! let config = ScoredCacheConfig {
//!     capacity: NonZeroU64::new(3).unwrap(),
//!     consider_object_size: false,
//! };
//! let mut cache: ScoredCache<u32, u32, Lfuda> = ScoredCache::init(config, Lfuda::default(), None);
//!
//! for key in [1, 2, 1, 3, 4, 1, 5] {
//!     if cache.lookup(&key).is_none() {
//!         cache.insert(key, key * 10, 1).unwrap();
//!     }
//! }
//!
//! assert!(cache.contains(&1));
//! assert_eq!(cache.hit_count(), 2);
//! assert_eq!(cache.miss_count(), 5);
//! assert_eq!(cache.access_count(), 7);
//! ```
//!
//! ## Concurrent Access
//!
//! With the `concurrent` feature, [`ConcurrentScoredCache`] shares one cache
//! between threads behind a single lock. See the [`concurrent`] module.

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Resident entry type.
///
/// `CacheEntry<V, M>` holds a value, its charged size, its insertion sequence
/// number and the strategy's metadata record `M`.
pub mod entry;

/// Metadata record types used by the shipped strategies.
pub mod meta;

/// Cache configuration.
pub mod config;

/// Errors returned by cache operations.
pub mod error;

/// Scoring strategies and the trait they implement.
pub mod strategy;

/// Per-key storage of entries and metadata records.
///
/// **Note**: This module is internal infrastructure. Use [`ScoredCache`] instead.
pub(crate) mod store;

/// The scoring cache engine.
pub mod cache;

/// Thread-safe wrapper around [`ScoredCache`].
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use cache::ScoredCache;
pub use config::ScoredCacheConfig;
pub use entry::CacheEntry;
pub use error::{CapacityError, DuplicateKeyError, InsertError, ZeroSizeError};
pub use strategy::{
    CacheStats, FrequencyRecency, Gdsf, GdsfGlobal, Lfu, Lfuda, LfudaGlobal, Lru, LruK,
    ScoringStrategy, Weighted,
};

pub use meta::{
    FrequencyRecencyMeta, GdsfMeta, HistoryMeta, LfuMeta, LfudaMeta, RecencyMeta, WeightedMeta,
};

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentScoredCache;
