//! Least Recently Used scoring.
//!
//! The score is the tick of the last access, so the entry idle the longest is
//! evicted. Because ticks are unique per access, LRU never produces ties.

use super::{CacheStats, ScoringStrategy};
use crate::meta::RecencyMeta;

/// Recency-only ranking.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::Lru;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache = ScoredCache::new(NonZeroU64::new(2).unwrap(), Lru);
/// cache.insert("a", 1, 1).unwrap();
/// cache.insert("b", 2, 1).unwrap();
/// cache.lookup(&"a");      // "a" becomes most recently used
/// cache.insert("c", 3, 1).unwrap();    // "b" evicted
/// assert!(cache.lookup(&"b").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lru;

impl ScoringStrategy for Lru {
    type Record = RecencyMeta;
    type Global = ();

    fn init_global(&self) {}

    fn on_insert(&self, _size: u64, _global: &mut (), now: u64) -> RecencyMeta {
        RecencyMeta { last_access: now }
    }

    fn on_hit(&self, record: &mut RecencyMeta, _global: &mut (), now: u64) {
        record.last_access = now;
    }

    fn score(&self, record: &RecencyMeta, _global: &(), _now: u64, _stats: &CacheStats) -> f64 {
        record.last_access as f64
    }

    fn name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_refreshes_recency() {
        let mut record = Lru.on_insert(1, &mut (), 3);
        assert_eq!(Lru.score(&record, &(), 3, &CacheStats::default()), 3.0);
        Lru.on_hit(&mut record, &mut (), 9);
        assert_eq!(record.last_access, 9);
        assert_eq!(Lru.score(&record, &(), 12, &CacheStats::default()), 9.0);
    }
}
