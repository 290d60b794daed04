//! LRU-K scoring over a bounded access history.
//!
//! Each record remembers the ticks of its last `K` accesses. The score is the
//! tick of the K-th most recent access (the "backward K-distance" point):
//! the entry whose K-th last access lies furthest in the past is evicted.
//!
//! Entries with fewer than `K` accesses score 0 and are therefore evicted
//! before any entry with a full history. Among themselves they fall back to
//! the cache's insertion-order tie-break, which makes one-hit wonders leave
//! first-in first-out. This is what makes LRU-K scan resistant: a single pass
//! over many cold keys cannot displace keys referenced `K` times.
//!
//! `LruK<1>` behaves like [`Lru`](super::Lru).

use super::{CacheStats, ScoringStrategy};
use crate::meta::HistoryMeta;

/// Ranking by the K-th most recent access.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::LruK;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache = ScoredCache::new(NonZeroU64::new(2).unwrap(), LruK::<2>);
/// cache.insert("hot", 1, 1).unwrap();
/// cache.lookup(&"hot");                 // second reference
/// cache.insert("scan-1", 2, 1).unwrap();
/// cache.insert("scan-2", 3, 1).unwrap(); // evicts "scan-1", not "hot"
/// assert!(cache.contains(&"hot"));
/// assert!(!cache.contains(&"scan-1"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruK<const K: usize>;

impl<const K: usize> ScoringStrategy for LruK<K> {
    type Record = HistoryMeta<K>;
    type Global = ();

    fn init_global(&self) {}

    fn on_insert(&self, _size: u64, _global: &mut (), now: u64) -> HistoryMeta<K> {
        HistoryMeta::new(now)
    }

    fn on_hit(&self, record: &mut HistoryMeta<K>, _global: &mut (), now: u64) {
        record.record(now);
    }

    fn score(&self, record: &HistoryMeta<K>, _global: &(), _now: u64, _stats: &CacheStats) -> f64 {
        record.kth_most_recent().map_or(0.0, |tick| tick as f64)
    }

    fn name(&self) -> &'static str {
        "LRU-K"
    }
}
