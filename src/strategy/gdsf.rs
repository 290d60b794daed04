//! Greedy Dual-Size Frequency (GDSF) scoring.
//!
//! GDSF combines frequency, size and aging. Small, frequently used objects are
//! worth more per unit of capacity than large, rarely used ones:
//!
//! ```text
//! priority = frequency / size + global_age
//! ```
//!
//! The priority is computed on insert and recomputed on every hit against the
//! age current at that moment. Evicting an item raises the global age to the
//! victim's priority, which lets new items overtake entries that have not been
//! accessed for a long time.
//!
//! # Cross-Residency Memory
//!
//! Like [`Lfuda`](super::Lfuda), the global age outlives each residency and is
//! only reset by [`ScoredCache::clear`](crate::ScoredCache::clear).

use super::{CacheStats, Resident, ScoringStrategy};
use crate::meta::GdsfMeta;

/// Cache-wide GDSF state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GdsfGlobal {
    /// Highest victim priority seen so far, or the initial age.
    pub age: f64,
}

/// Size-aware frequency ranking with aging.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::Gdsf;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache: ScoredCache<&str, Vec<u8>, _> =
///     ScoredCache::new(NonZeroU64::new(1000).unwrap(), Gdsf::default());
///
/// cache.insert("small.txt", vec![0u8; 100], 100).unwrap();
/// cache.insert("large.bin", vec![0u8; 800], 800).unwrap();
///
/// // Needs 300 units: the large, equally popular object goes first
/// cache.insert("medium.dat", vec![0u8; 300], 300).unwrap();
/// assert!(cache.contains(&"small.txt"));
/// assert!(!cache.contains(&"large.bin"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gdsf {
    /// Age the cache starts with.
    pub initial_age: f64,
}

impl Gdsf {
    /// Creates the strategy with a starting age.
    pub fn new(initial_age: f64) -> Self {
        Self { initial_age }
    }
}

impl ScoringStrategy for Gdsf {
    type Record = GdsfMeta;
    type Global = GdsfGlobal;

    fn init_global(&self) -> GdsfGlobal {
        GdsfGlobal {
            age: self.initial_age,
        }
    }

    fn on_insert(&self, size: u64, global: &mut GdsfGlobal, _now: u64) -> GdsfMeta {
        let mut record = GdsfMeta::new(1, size);
        record.calculate_priority(global.age);
        record
    }

    fn on_hit(&self, record: &mut GdsfMeta, global: &mut GdsfGlobal, _now: u64) {
        record.frequency = record.frequency.saturating_add(1);
        record.calculate_priority(global.age);
    }

    fn score(
        &self,
        record: &GdsfMeta,
        _global: &GdsfGlobal,
        _now: u64,
        _stats: &CacheStats,
    ) -> f64 {
        record.priority
    }

    fn on_evict<'a, I>(
        &self,
        evicted: &GdsfMeta,
        global: &mut GdsfGlobal,
        _now: u64,
        _stats: &CacheStats,
        _residents: I,
    ) where
        I: Iterator<Item = Resident<'a, GdsfMeta>>,
        GdsfMeta: 'a,
    {
        if evicted.priority > global.age {
            global.age = evicted.priority;
        }
    }

    fn name(&self) -> &'static str {
        "GDSF"
    }
}
