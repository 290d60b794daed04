//! Least Frequently Used scoring.
//!
//! The score is the access count. Entries with the same count are evicted in
//! insertion order by the cache's tie-break, oldest first.
//!
//! LFU protects items that were popular at any point. If popularity shifts
//! over time, prefer [`Lfuda`](super::Lfuda).

use super::{CacheStats, ScoringStrategy};
use crate::meta::LfuMeta;

/// Frequency-only ranking.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::Lfu;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache = ScoredCache::new(NonZeroU64::new(2).unwrap(), Lfu);
/// cache.insert("rare", 1, 1).unwrap();
/// cache.insert("popular", 2, 1).unwrap();
///
/// for _ in 0..10 { cache.lookup(&"popular"); }
///
/// cache.insert("new", 3, 1).unwrap();  // "rare" evicted (lowest frequency)
/// assert!(cache.contains(&"popular"));
/// assert!(!cache.contains(&"rare"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lfu;

impl ScoringStrategy for Lfu {
    type Record = LfuMeta;
    type Global = ();

    fn init_global(&self) {}

    fn on_insert(&self, _size: u64, _global: &mut (), _now: u64) -> LfuMeta {
        LfuMeta::new(1)
    }

    fn on_hit(&self, record: &mut LfuMeta, _global: &mut (), _now: u64) {
        record.increment();
    }

    fn score(&self, record: &LfuMeta, _global: &(), _now: u64, _stats: &CacheStats) -> f64 {
        record.frequency as f64
    }

    fn name(&self) -> &'static str {
        "LFU"
    }
}
