//! Least Frequently Used with Dynamic Aging (LFUDA) scoring.
//!
//! LFUDA addresses the "cache pollution" problem of plain LFU by incorporating
//! a cache-wide age. The age rises whenever an item is evicted, so old access
//! patterns are gradually forgotten and new popular items can compete fairly
//! against historically popular but now cold items.
//!
//! ## Mathematical Formulation
//!
//! ```text
//! For each cache entry i:
//!   - F_i = access frequency of item i
//!   - A_i = global age when item i was last accessed
//!   - Priority_i = F_i + A_i
//!
//! On eviction:
//!   - Select item j where Priority_j = min{Priority_i for all i}
//!   - Set global_age = Priority_j
//!
//! On access:
//!   - Increment F_i
//!   - Update A_i = global_age (item gets current age)
//! ```
//!
//! ## Aging Example
//!
//! ```text
//! global_age = 0
//!
//! insert("a")    →  a: freq=1, age=0, priority=1
//! lookup("a") x10→  a: freq=11, age=0, priority=11
//! insert("b")    →  b: freq=1, age=0, priority=1
//! insert("c")    →  c: freq=1, age=0, priority=1
//!
//! [Cache full, add "d"]
//! - Evict min priority (b, the older of b and c)
//! - Set global_age = 1
//!
//! insert("d")    →  d: freq=1, age=1, priority=2
//!
//! [Many evictions later, global_age = 100]
//! - "a" still has priority=11 (no recent access)
//! - New item "e" gets priority=101
//! - "a" becomes eviction candidate despite high frequency!
//! ```
//!
//! # Cross-Residency Memory
//!
//! The global age survives individual residencies: a key evicted and inserted
//! again starts with frequency 1 but at the age reached in the meantime.
//! [`ScoredCache::clear`](crate::ScoredCache::clear) resets the age to
//! `initial_age`.

use super::{CacheStats, Resident, ScoringStrategy};
use crate::meta::LfudaMeta;

/// Cache-wide LFUDA state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LfudaGlobal {
    /// Priority of the most recent victim (or the initial age).
    pub age: u64,
}

/// Frequency ranking with dynamic aging.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::Lfuda;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache = ScoredCache::new(NonZeroU64::new(1).unwrap(), Lfuda::default());
/// cache.insert("a", 1, 1).unwrap();
/// cache.lookup(&"a");
/// cache.insert("b", 2, 1).unwrap();  // evicts "a" (priority 2)
/// assert_eq!(cache.global_state().age, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lfuda {
    /// Age the cache starts with.
    pub initial_age: u64,
}

impl Lfuda {
    /// Creates the strategy with a starting age.
    pub fn new(initial_age: u64) -> Self {
        Self { initial_age }
    }
}

impl ScoringStrategy for Lfuda {
    type Record = LfudaMeta;
    type Global = LfudaGlobal;

    fn init_global(&self) -> LfudaGlobal {
        LfudaGlobal {
            age: self.initial_age,
        }
    }

    fn on_insert(&self, _size: u64, global: &mut LfudaGlobal, _now: u64) -> LfudaMeta {
        LfudaMeta::new(1, global.age)
    }

    fn on_hit(&self, record: &mut LfudaMeta, global: &mut LfudaGlobal, _now: u64) {
        record.frequency = record.frequency.saturating_add(1);
        record.age = global.age;
    }

    fn score(
        &self,
        record: &LfudaMeta,
        _global: &LfudaGlobal,
        _now: u64,
        _stats: &CacheStats,
    ) -> f64 {
        record.priority() as f64
    }

    fn on_evict<'a, I>(
        &self,
        evicted: &LfudaMeta,
        global: &mut LfudaGlobal,
        _now: u64,
        _stats: &CacheStats,
        _residents: I,
    ) where
        I: Iterator<Item = Resident<'a, LfudaMeta>>,
        LfudaMeta: 'a,
    {
        global.age = global.age.max(evicted.priority());
    }

    fn name(&self) -> &'static str {
        "LFUDA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_uses_current_age() {
        let strategy = Lfuda::new(5);
        let mut global = strategy.init_global();
        let record = strategy.on_insert(1, &mut global, 1);
        assert_eq!(record, LfudaMeta::new(1, 5));
        assert_eq!(strategy.score(&record, &global, 1, &CacheStats::default()), 6.0);
    }

    #[test]
    fn test_eviction_raises_age() {
        let strategy = Lfuda::default();
        let mut global = strategy.init_global();
        let mut record = strategy.on_insert(1, &mut global, 1);
        strategy.on_hit(&mut record, &mut global, 2);
        strategy.on_hit(&mut record, &mut global, 3);

        strategy.on_evict(&record, &mut global, 4, &CacheStats::default(), core::iter::empty());
        assert_eq!(global.age, 3);

        // Hit after aging picks up the new age
        let mut other = strategy.on_insert(1, &mut global, 5);
        assert_eq!(other.age, 3);
        strategy.on_hit(&mut other, &mut global, 6);
        assert_eq!(other.priority(), 5);
    }

    #[test]
    fn test_age_never_decreases() {
        let strategy = Lfuda::new(10);
        let mut global = strategy.init_global();
        let stale = LfudaMeta::new(1, 0);
        strategy.on_evict(&stale, &mut global, 1, &CacheStats::default(), core::iter::empty());
        assert_eq!(global.age, 10);
    }
}
