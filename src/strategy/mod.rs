//! Scoring Strategies
//!
//! A scoring strategy decides which resident entry a [`ScoredCache`](crate::ScoredCache)
//! evicts. The cache owns the entries, the logical clock and the strategy's
//! global state; the strategy only supplies the rules:
//!
//! - how a fresh record looks ([`on_insert`](ScoringStrategy::on_insert))
//! - how a hit changes it ([`on_hit`](ScoringStrategy::on_hit))
//! - how records rank against each other ([`score`](ScoringStrategy::score))
//! - what happens to global state and the remaining records after an eviction
//!   ([`on_evict`](ScoringStrategy::on_evict))
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                         ScoredCache<K, V, P>                          │
//! │                                                                       │
//! │  lookup(k) ──hit──▶ P::on_hit(&mut record, &mut global, now)          │
//! │                                                                       │
//! │  insert(k, v, size)                                                   │
//! │     │ while used + size > capacity:                                   │
//! │     │    victim = argmin P::score(&record, &global, now, &stats)      │
//! │     │             (ties → smallest insertion sequence number)         │
//! │     │    remove victim                                                │
//! │     │    P::on_evict(&victim, &mut global, now, &stats, residents)    │
//! │     ▼                                                                 │
//! │  record = P::on_insert(size, &mut global, now)                        │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Available Strategies
//!
//! | Strategy | Score (lower = evicted first) | Global state |
//! |----------|-------------------------------|--------------|
//! | [`FrequencyRecency`] | `wf·frequency − wr·idle_ticks` | none |
//! | [`Lru`] | last access tick | none |
//! | [`Lfu`] | access frequency | none |
//! | [`Lfuda`] | `frequency + age` | cache age |
//! | [`Gdsf`] | `frequency / size + age` | cache age |
//! | [`LruK`] | K-th most recent access tick | none |
//! | [`Weighted`] | weighted sum of frequency, idle time and size | none |
//!
//! # Writing a Strategy
//!
//! ```
//! use scored_cache::strategy::{CacheStats, ScoringStrategy};
//!
//! /// Evicts the largest object first.
//! #[derive(Debug, Default)]
//! struct LargestFirst;
//!
//! impl ScoringStrategy for LargestFirst {
//!     type Record = u64;
//!     type Global = ();
//!
//!     fn init_global(&self) {}
//!
//!     fn on_insert(&self, size: u64, _global: &mut (), _now: u64) -> u64 {
//!         size
//!     }
//!
//!     fn on_hit(&self, _record: &mut u64, _global: &mut (), _now: u64) {}
//!
//!     fn score(&self, record: &u64, _global: &(), _now: u64, _stats: &CacheStats) -> f64 {
//!         // Negated so that the largest object has the smallest score
//!         -(*record as f64)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "LargestFirst"
//!     }
//! }
//! ```

mod frequency_recency;
mod gdsf;
mod lfu;
mod lfuda;
mod lru;
mod lru_k;
mod weighted;

pub use self::frequency_recency::FrequencyRecency;
pub use self::gdsf::{Gdsf, GdsfGlobal};
pub use self::lfu::Lfu;
pub use self::lfuda::{Lfuda, LfudaGlobal};
pub use self::lru::Lru;
pub use self::lru_k::LruK;
pub use self::weighted::Weighted;

/// A remaining resident entry, handed to [`ScoringStrategy::on_evict`] so a
/// strategy can rebalance other records after an eviction.
#[derive(Debug)]
pub struct Resident<'a, M> {
    /// Size charged against capacity.
    pub size: u64,
    /// Insertion sequence number.
    pub seq: u64,
    /// The entry's metadata record.
    pub metadata: &'a mut M,
}

/// Snapshot of cache-wide counters, handed to [`ScoringStrategy::score`] and
/// [`ScoringStrategy::on_evict`].
///
/// During an insert the incoming object is not counted yet. Inside `on_evict`
/// the victim is already gone from `used`, `len` and `evictions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total capacity in size units.
    pub capacity: u64,
    /// Sum of the sizes of all resident entries.
    pub used: u64,
    /// Number of resident entries.
    pub len: usize,
    /// Lookups that found their key.
    pub hits: u64,
    /// Lookups that did not find their key.
    pub misses: u64,
    /// Entries evicted so far.
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    /// Fraction of capacity taken by resident entries.
    pub fn occupancy(&self) -> f64 {
        self.used as f64 / self.capacity.max(1) as f64
    }
}

/// Eviction policy plugged into a [`ScoredCache`](crate::ScoredCache).
///
/// Implementations hold only tunable constants. Per-key state lives in
/// [`Record`](Self::Record) values owned by the cache, cache-wide state in a
/// single [`Global`](Self::Global) value owned by the cache, and time is the
/// cache's access counter passed in as `now`. Ranking and eviction hooks also
/// get a [`CacheStats`] snapshot for heuristics that depend on capacity
/// pressure or the hit ratio.
///
/// # Contract
///
/// - [`score`](Self::score) is pure: same inputs, same output, no mutation.
///   Lower scores are evicted first. A strategy that wants to evict the
///   "largest" of something negates it.
/// - `now` is always the counter value at call time. Never cache it in a
///   record to stand in for the current time.
/// - A record fresh from [`on_insert`](Self::on_insert) must score without
///   dividing by zero; it may be chosen as a victim before any hit.
/// - [`on_hit`](Self::on_hit) runs exactly once per hit.
/// - [`on_evict`](Self::on_evict) runs once per eviction, after the victim
///   was removed and before the incoming object's `on_insert`.
pub trait ScoringStrategy {
    /// Per-key metadata record.
    type Record;

    /// Cache-wide state shared by all records.
    type Global;

    /// Builds the global state. Called at construction and on `clear`.
    fn init_global(&self) -> Self::Global;

    /// Builds the record for an object that just became resident.
    ///
    /// Must not depend on any other key's record.
    fn on_insert(&self, size: u64, global: &mut Self::Global, now: u64) -> Self::Record;

    /// Updates a record after a hit.
    fn on_hit(&self, record: &mut Self::Record, global: &mut Self::Global, now: u64);

    /// Ranks a record. Lower is evicted first.
    fn score(
        &self,
        record: &Self::Record,
        global: &Self::Global,
        now: u64,
        stats: &CacheStats,
    ) -> f64;

    /// Reacts to an eviction.
    ///
    /// `evicted` is the record that was just discarded. `residents` yields every
    /// entry still in the cache in insertion order, so rebalancing is the same
    /// whatever the hash seed. Iterating it is O(n); strategies that don't
    /// rebalance should leave it untouched.
    fn on_evict<'a, I>(
        &self,
        evicted: &Self::Record,
        global: &mut Self::Global,
        now: u64,
        stats: &CacheStats,
        residents: I,
    ) where
        I: Iterator<Item = Resident<'a, Self::Record>>,
        Self::Record: 'a,
    {
        let _ = (evicted, global, now, stats, residents);
    }

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
