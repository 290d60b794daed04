//! Scored Cache Implementation
//!
//! [`ScoredCache`] is a fixed-capacity key→value store whose eviction decisions
//! are delegated to a [`ScoringStrategy`]. The cache owns every piece of state:
//! the resident entries, one metadata record per entry, the strategy's global
//! state and a logical clock. The strategy only says how records are created,
//! updated and ranked.
//!
//! # How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  ScoredCache (capacity = 4 units, used = 4, clock = 17)                 │
//! │                                                                          │
//! │  MetadataStore: HashMap<K, CacheEntry<V, P::Record>>                     │
//! │  ┌──────────┬──────┬─────┬──────────────────────────┬────────┐           │
//! │  │ key      │ size │ seq │ record                   │ score  │           │
//! │  ├──────────┼──────┼─────┼──────────────────────────┼────────┤           │
//! │  │ "a"      │  1   │  0  │ freq=5, last=16          │  4.0   │           │
//! │  │ "b"      │  2   │  3  │ freq=1, last=9           │ -7.0 ← victim     │
//! │  │ "c"      │  1   │  4  │ freq=2, last=12          │ -3.0   │           │
//! │  └──────────┴──────┴─────┴──────────────────────────┴────────┘           │
//! │                                                                          │
//! │  P::Global (e.g. LFUDA age)      hits / misses / evictions               │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Victim selection scans every resident entry, so eviction is O(n). Hits and
//! inserts without eviction are O(1).
//!
//! ## Operations
//!
//! | Operation | Action | Clock |
//! |-----------|--------|-------|
//! | `lookup(key)` hit | `on_hit` updates the record, value returned | +1 |
//! | `lookup(key)` miss | `None`, miss counted | unchanged |
//! | `insert(key, value, size)` | evict until it fits, then `on_insert` | +1 |
//! | `insert` rejected | error returned, nothing changes | unchanged |
//! | `peek`, `metadata`, `victim` | read only | unchanged |
//!
//! A driver that calls `lookup` and, on `None`, `insert` therefore advances the
//! clock exactly once per access.
//!
//! ## Tie-Breaking
//!
//! Scores that compare equal are resolved by insertion sequence number: the
//! entry inserted earliest is evicted. Map iteration order never influences
//! which key is chosen.
//!
//! # Failure Semantics
//!
//! `insert` is all-or-nothing. A duplicate key, a zero-sized object or an
//! object larger than the whole cache is rejected before anything is touched.
//! Once those checks pass, the insert cannot fail.
//!
//! # Thread Safety
//!
//! `ScoredCache` is not synchronized; every mutating operation takes `&mut self`.
//! For shared access use `ConcurrentScoredCache` (requires the `concurrent`
//! feature), which places the whole cache behind one lock.

extern crate alloc;

use crate::config::ScoredCacheConfig;
use crate::entry::CacheEntry;
use crate::error::{CapacityError, DuplicateKeyError, InsertError, ZeroSizeError};
use crate::store::MetadataStore;
use crate::strategy::{CacheStats, FrequencyRecency, ScoringStrategy};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroU64;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A fixed-capacity cache that evicts the entry its strategy scores lowest.
///
/// # Examples
///
/// ```
/// use scored_cache::strategy::FrequencyRecency;
/// use scored_cache::ScoredCache;
/// use core::num::NonZeroU64;
///
/// let mut cache = ScoredCache::new(NonZeroU64::new(2).unwrap(), FrequencyRecency::default());
///
/// cache.insert("a", 1, 1).unwrap();
/// cache.insert("b", 2, 1).unwrap();
/// assert_eq!(cache.lookup(&"a"), Some(&1));
///
/// // "b" is less frequent and older than "a"
/// cache.insert("c", 3, 1).unwrap();
/// assert_eq!(cache.lookup(&"b"), None);
/// assert!(cache.contains(&"a"));
/// assert!(cache.contains(&"c"));
/// ```
pub struct ScoredCache<K, V, P: ScoringStrategy = FrequencyRecency, S = DefaultHashBuilder> {
    /// Capacity configuration, fixed at construction
    config: ScoredCacheConfig,

    /// Eviction policy
    strategy: P,

    /// Cache-wide strategy state
    global: P::Global,

    /// Resident entries with their metadata records
    store: MetadataStore<K, V, P::Record, S>,

    /// Sum of resident entry sizes
    used: u64,

    /// Logical clock, advanced once per hit and once per successful insert
    clock: u64,

    /// Sequence number handed to the next inserted entry
    next_seq: u64,

    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<K, V, P> ScoredCache<K, V, P, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    P: ScoringStrategy,
{
    /// Creates a size-aware cache with the given capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use scored_cache::strategy::Lru;
    /// use scored_cache::ScoredCache;
    /// use core::num::NonZeroU64;
    ///
    /// let cache: ScoredCache<&str, u32, Lru> = ScoredCache::new(NonZeroU64::new(10).unwrap(), Lru);
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    pub fn new(capacity: NonZeroU64, strategy: P) -> Self {
        Self::init(ScoredCacheConfig::with_capacity(capacity), strategy, None)
    }

    /// Creates a cache from a configuration with an optional hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity configuration
    /// * `strategy` - Scoring strategy, including its tunable constants
    /// * `hasher` - Optional custom hash builder. If `None`, uses `DefaultHashBuilder`
    pub fn init(
        config: ScoredCacheConfig,
        strategy: P,
        hasher: Option<DefaultHashBuilder>,
    ) -> Self {
        Self::with_hasher(config, strategy, hasher.unwrap_or_default())
    }
}

impl<K, V, P, S> ScoredCache<K, V, P, S>
where
    K: Hash + Eq + Clone,
    P: ScoringStrategy,
    S: BuildHasher,
{
    /// Creates a cache with a custom hash builder.
    pub fn with_hasher(config: ScoredCacheConfig, strategy: P, hash_builder: S) -> Self {
        let global = strategy.init_global();
        ScoredCache {
            config,
            strategy,
            global,
            store: MetadataStore::with_hasher(hash_builder),
            used: 0,
            clock: 0,
            next_seq: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Total capacity in size units.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.config.capacity.get()
    }

    /// The configuration the cache was built with.
    #[inline]
    pub fn config(&self) -> &ScoredCacheConfig {
        &self.config
    }

    /// Number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no entry is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Sum of the sizes of all resident entries.
    #[inline]
    pub fn used_size(&self) -> u64 {
        self.used
    }

    /// Capacity not taken by resident entries.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.capacity() - self.used
    }

    /// Current value of the logical clock.
    #[inline]
    pub fn access_count(&self) -> u64 {
        self.clock
    }

    /// Number of lookups that found their key.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that did not find their key.
    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.misses
    }

    /// Number of entries evicted to make room for inserts.
    #[inline]
    pub fn eviction_count(&self) -> u64 {
        self.evictions
    }

    /// Snapshot of the counters strategies see while ranking and evicting.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            capacity: self.capacity(),
            used: self.used,
            len: self.store.len(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    /// The scoring strategy.
    #[inline]
    pub fn strategy(&self) -> &P {
        &self.strategy
    }

    /// The strategy's cache-wide state.
    #[inline]
    pub fn global_state(&self) -> &P::Global {
        &self.global
    }

    /// Returns `true` if the key is resident. Does not count as an access.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.contains_key(key)
    }

    /// Returns the value for `key` without touching metadata or the clock.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.get(key).map(|entry| &entry.value)
    }

    /// Returns the metadata record of a resident key.
    #[inline]
    pub fn metadata<Q>(&self, key: &Q) -> Option<&P::Record>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.get(key).map(|entry| &entry.metadata)
    }

    /// Returns the full resident entry for a key.
    #[inline]
    pub fn entry<Q>(&self, key: &Q) -> Option<&CacheEntry<V, P::Record>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.store.get(key)
    }

    /// Looks up a key.
    ///
    /// On a hit the clock advances, the strategy's `on_hit` updates the key's
    /// record and the value is returned. On a miss `None` is returned and only
    /// the miss counter changes; fetching the value and calling
    /// [`insert`](Self::insert) is up to the caller.
    pub fn lookup<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.touch(key).map(|entry| &entry.value)
    }

    /// Like [`lookup`](Self::lookup), with mutable access to the value.
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.touch(key).map(|entry| &mut entry.value)
    }

    fn touch<Q>(&mut self, key: &Q) -> Option<&mut CacheEntry<V, P::Record>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.store.get_mut(key) {
            Some(entry) => {
                self.clock += 1;
                self.hits += 1;
                self.strategy
                    .on_hit(&mut entry.metadata, &mut self.global, self.clock);
                trace!(
                    "{}: hit seq={} now={}",
                    self.strategy.name(),
                    entry.seq(),
                    self.clock
                );
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Inserts a key that is not resident.
    ///
    /// Evicts the lowest-scoring entries, one at a time, until the object fits.
    /// With `consider_object_size` disabled the object is charged one unit
    /// regardless of `size`.
    ///
    /// # Errors
    ///
    /// - [`InsertError::DuplicateKey`] if `key` is already resident
    /// - [`InsertError::ZeroSize`] if `size` is 0 and sizes count against capacity
    /// - [`InsertError::Capacity`] if the object alone exceeds the capacity
    ///
    /// In every case the cache is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use scored_cache::strategy::Lfu;
    /// use scored_cache::ScoredCache;
    /// use core::num::NonZeroU64;
    ///
    /// let mut cache = ScoredCache::new(NonZeroU64::new(2).unwrap(), Lfu);
    /// cache.insert("a", 1, 1).unwrap();
    ///
    /// assert!(cache.insert("a", 2, 1).unwrap_err().is_duplicate_key());
    /// assert!(cache.insert("big", 3, 3).unwrap_err().is_too_large());
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.peek(&"a"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V, size: u64) -> Result<(), InsertError> {
        if self.store.contains_key(&key) {
            debug!("{}: rejected insert of resident key", self.strategy.name());
            return Err(DuplicateKeyError.into());
        }

        let charged = self.config.effective_size(size);
        if charged == 0 {
            debug!("{}: rejected zero-sized object", self.strategy.name());
            return Err(ZeroSizeError.into());
        }

        let capacity = self.capacity();
        if charged > capacity {
            debug!(
                "{}: rejected object of size {} (capacity {})",
                self.strategy.name(),
                charged,
                capacity
            );
            return Err(CapacityError::ObjectTooLarge {
                size: charged,
                capacity,
            }
            .into());
        }

        self.clock += 1;
        let now = self.clock;

        while charged > self.remaining() {
            let (victim, score) = self.select_victim(now);
            self.evict(&victim, score, now);
        }

        let metadata = self.strategy.on_insert(charged, &mut self.global, now);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.store
            .insert(key, CacheEntry::new(value, charged, seq, now, metadata));
        self.used += charged;

        trace!(
            "{}: inserted seq={} size={} now={} used={}/{}",
            self.strategy.name(),
            seq,
            charged,
            now,
            self.used,
            capacity
        );
        self.debug_assert_accounting();
        Ok(())
    }

    /// The key that would be evicted next, scored at the current clock.
    ///
    /// Read only: no record, counter or global state changes.
    pub fn victim(&self) -> Option<&K> {
        self.lowest_score(self.clock).map(|(key, _)| key)
    }

    /// Scores every resident entry at `now` and returns the lowest, with ties
    /// going to the smallest sequence number.
    fn lowest_score(&self, now: u64) -> Option<(&K, f64)> {
        let stats = self.stats();
        let mut best: Option<(&K, f64, u64)> = None;
        for (key, entry) in self.store.iter() {
            let score = self
                .strategy
                .score(&entry.metadata, &self.global, now, &stats);
            let replace = match best {
                None => true,
                Some((_, best_score, best_seq)) => match compare_scores(score, best_score) {
                    Ordering::Less => true,
                    Ordering::Equal => entry.seq() < best_seq,
                    Ordering::Greater => false,
                },
            };
            if replace {
                best = Some((key, score, entry.seq()));
            }
        }
        best.map(|(key, score, _)| (key, score))
    }

    /// Picks the next victim.
    ///
    /// # Panics
    ///
    /// Panics if nothing is resident. `insert` only evicts while the incoming
    /// object does not fit, and it was already checked to fit an empty cache.
    fn select_victim(&self, now: u64) -> (K, f64) {
        match self.lowest_score(now) {
            Some((key, score)) => (key.clone(), score),
            None => panic!(
                "invariant violation: eviction required with no resident entries (used={}, capacity={})",
                self.used,
                self.capacity()
            ),
        }
    }

    /// Removes `key` and its record, then lets the strategy react.
    fn evict(&mut self, key: &K, score: f64, now: u64) {
        let Some(entry) = self.store.remove(key) else {
            panic!("invariant violation: selected victim is not resident");
        };
        self.used = match self.used.checked_sub(entry.size) {
            Some(used) => used,
            None => panic!(
                "invariant violation: evicted size {} exceeds used size {}",
                entry.size, self.used
            ),
        };
        self.evictions += 1;

        debug!(
            "{}: evicted seq={} size={} score={} now={}",
            self.strategy.name(),
            entry.seq(),
            entry.size,
            score,
            now
        );

        let stats = self.stats();
        self.strategy.on_evict(
            &entry.metadata,
            &mut self.global,
            now,
            &stats,
            self.store.residents_mut(),
        );
    }

    /// Resident `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store
            .iter_by_seq()
            .map(|(key, entry)| (key, &entry.value))
    }

    /// Resident keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.store.iter_by_seq().map(|(key, _)| key)
    }

    /// Drops every entry and returns the cache to its freshly constructed state.
    ///
    /// No eviction callbacks run. The strategy's global state is rebuilt with
    /// `init_global`, and the clock, sequence numbers and counters restart at zero.
    pub fn clear(&mut self) {
        self.store.clear();
        self.global = self.strategy.init_global();
        self.used = 0;
        self.clock = 0;
        self.next_seq = 0;
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }

    #[inline]
    fn debug_assert_accounting(&self) {
        debug_assert!(
            self.used <= self.capacity(),
            "invariant violation: used size {} exceeds capacity {}",
            self.used,
            self.capacity()
        );
        debug_assert_eq!(
            self.used,
            self.store.total_size(),
            "invariant violation: used size drifted from resident entries"
        );
    }
}

/// Orders scores so that `0.0 == -0.0` and NaN sorts above every number.
#[inline]
fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

impl<K, V, P, S> fmt::Debug for ScoredCache<K, V, P, S>
where
    P: ScoringStrategy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoredCache")
            .field("strategy", &self.strategy.name())
            .field("capacity", &self.config.capacity)
            .field("used", &self.used)
            .field("len", &self.store.len())
            .field("clock", &self.clock)
            .finish()
    }
}
