//! Frequency + recency scoring, the default strategy.
//!
//! Every access (the insert counts as the first) raises an entry's frequency and
//! resets its idle time. The score rewards frequency and penalizes idle ticks:
//!
//! ```text
//! score = frequency_weight · frequency − recency_weight · (now − last_access)
//! ```
//!
//! With the default weights of 1.0, an entry that was hit once more and touched
//! more recently than another always outranks it, so repeated hits never make
//! an entry more evictable.
//!
//! # Example
//!
//! ```text
//! capacity = 2
//!
//! insert A      tick 1   A: freq=1, last=1
//! insert B      tick 2   B: freq=1, last=2
//! lookup A      tick 3   A: freq=2, last=3
//! insert C      tick 4   A: 2 − 1 =  1
//!                        B: 1 − 2 = −1  ← evicted
//! ```

use super::{CacheStats, ScoringStrategy};
use crate::meta::FrequencyRecencyMeta;

/// Weighted frequency and recency ranking.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::{CacheStats, FrequencyRecency, ScoringStrategy};
///
/// let strategy = FrequencyRecency::default();
/// let mut record = strategy.on_insert(1, &mut (), 1);
/// let cold = strategy.score(&record, &(), 5, &CacheStats::default());
/// strategy.on_hit(&mut record, &mut (), 5);
/// assert!(strategy.score(&record, &(), 5, &CacheStats::default()) > cold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRecency {
    /// Weight of the access count.
    pub frequency_weight: f64,
    /// Penalty per idle tick.
    pub recency_weight: f64,
}

impl FrequencyRecency {
    /// Creates the strategy with explicit weights.
    pub fn new(frequency_weight: f64, recency_weight: f64) -> Self {
        Self {
            frequency_weight,
            recency_weight,
        }
    }
}

impl Default for FrequencyRecency {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl ScoringStrategy for FrequencyRecency {
    type Record = FrequencyRecencyMeta;
    type Global = ();

    fn init_global(&self) {}

    fn on_insert(&self, _size: u64, _global: &mut (), now: u64) -> FrequencyRecencyMeta {
        FrequencyRecencyMeta::new(now)
    }

    fn on_hit(&self, record: &mut FrequencyRecencyMeta, _global: &mut (), now: u64) {
        record.touch(now);
    }

    fn score(
        &self,
        record: &FrequencyRecencyMeta,
        _global: &(),
        now: u64,
        _stats: &CacheStats,
    ) -> f64 {
        self.frequency_weight * record.frequency as f64
            - self.recency_weight * record.idle(now) as f64
    }

    fn name(&self) -> &'static str {
        "FrequencyRecency"
    }
}
