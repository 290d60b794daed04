//! Configurable weighted-sum scoring with decay on eviction.
//!
//! Most hand-tuned eviction heuristics reduce to a linear combination of a
//! few per-entry signals. `Weighted` exposes that combination directly:
//!
//! ```text
//! score = frequency_weight · frequency
//!       − recency_weight   · (now − last_access)
//!       − size_weight      · size
//! ```
//!
//! After every eviction, the frequency of each remaining entry is multiplied by
//! `decay` (never dropping below 1). This rescan costs O(n) per eviction and
//! keeps long-lived entries from accumulating an unbeatable frequency. A
//! `decay` of 1.0 disables the rescan.

use super::{CacheStats, Resident, ScoringStrategy};
use crate::meta::WeightedMeta;

/// Linear combination of frequency, idle time and size.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::{CacheStats, ScoringStrategy, Weighted};
///
/// let strategy = Weighted {
///     size_weight: 0.5,
///     ..Weighted::default()
/// };
/// let small = strategy.on_insert(1, &mut (), 1);
/// let large = strategy.on_insert(8, &mut (), 1);
/// let stats = CacheStats::default();
/// assert!(strategy.score(&large, &(), 1, &stats) < strategy.score(&small, &(), 1, &stats));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted {
    /// Weight of the (decayed) access frequency.
    pub frequency_weight: f64,
    /// Penalty per idle tick.
    pub recency_weight: f64,
    /// Penalty per unit of object size.
    pub size_weight: f64,
    /// Factor applied to every remaining frequency after an eviction, in `(0, 1]`.
    pub decay: f64,
}

impl Default for Weighted {
    fn default() -> Self {
        Self {
            frequency_weight: 1.0,
            recency_weight: 1.0,
            size_weight: 0.0,
            decay: 0.5,
        }
    }
}

impl ScoringStrategy for Weighted {
    type Record = WeightedMeta;
    type Global = ();

    fn init_global(&self) {}

    fn on_insert(&self, size: u64, _global: &mut (), now: u64) -> WeightedMeta {
        WeightedMeta {
            frequency: 1.0,
            last_access: now,
            size,
        }
    }

    fn on_hit(&self, record: &mut WeightedMeta, _global: &mut (), now: u64) {
        record.frequency += 1.0;
        record.last_access = now;
    }

    fn score(&self, record: &WeightedMeta, _global: &(), now: u64, _stats: &CacheStats) -> f64 {
        let idle = now.saturating_sub(record.last_access) as f64;
        self.frequency_weight * record.frequency
            - self.recency_weight * idle
            - self.size_weight * record.size as f64
    }

    fn on_evict<'a, I>(
        &self,
        _evicted: &WeightedMeta,
        _global: &mut (),
        _now: u64,
        _stats: &CacheStats,
        residents: I,
    ) where
        I: Iterator<Item = Resident<'a, WeightedMeta>>,
        WeightedMeta: 'a,
    {
        if self.decay >= 1.0 {
            return;
        }
        for resident in residents {
            resident.metadata.frequency = (resident.metadata.frequency * self.decay).max(1.0);
        }
    }

    fn name(&self) -> &'static str {
        "Weighted"
    }
}
