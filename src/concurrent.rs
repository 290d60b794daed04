//! Concurrent Scored Cache
//!
//! [`ConcurrentScoredCache`] shares one [`ScoredCache`] between threads by
//! placing the whole cache behind a single `parking_lot::Mutex`.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  ConcurrentScoredCache                                     │
//! │                                                            │
//! │   thread A ─┐                                              │
//! │   thread B ─┼──▶ Mutex ──▶ ScoredCache<K, V, P, S>         │
//! │   thread C ─┘              (entries, records, global,      │
//! │                             clock, counters)               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is not sharded. Victim selection compares every resident entry
//! and strategies such as LFUDA and GDSF keep one cache-wide age, so splitting
//! the key space would change which key gets evicted. One lock keeps eviction
//! decisions identical to the single-threaded cache; every operation,
//! including a lookup hit, is serialized.
//!
//! A `Mutex` rather than an `RwLock`: a lookup hit updates the entry's record
//! and the clock, so every operation needs exclusive access anyway.
//!
//! # Zero-Copy Access
//!
//! [`lookup`](ConcurrentScoredCache::lookup) clones the value out. Use
//! [`lookup_with`](ConcurrentScoredCache::lookup_with) to work on the value
//! while the lock is held:
//!
//! ```
//! use scored_cache::concurrent::ConcurrentScoredCache;
//! use scored_cache::strategy::Lfu;
//! use core::num::NonZeroU64;
//!
//! let cache = ConcurrentScoredCache::new(NonZeroU64::new(100).unwrap(), Lfu);
//! cache.insert("greeting", String::from("hello world"), 11).unwrap();
//!
//! assert_eq!(cache.lookup_with(&"greeting", |v| v.len()), Some(11));
//! assert_eq!(cache.lookup(&"greeting").as_deref(), Some("hello world"));
//! ```

use crate::cache::ScoredCache;
use crate::config::ScoredCacheConfig;
use crate::error::InsertError;
use crate::strategy::{CacheStats, ScoringStrategy};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroU64;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe [`ScoredCache`] behind one lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. [`lookup`](Self::lookup) additionally needs `Clone`.
/// - `P`: Scoring strategy.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// The wrapper is `Send + Sync` whenever the keys, values, strategy, records,
/// global state and hash builder are `Send`.
///
/// # Example
///
/// ```
/// use scored_cache::concurrent::ConcurrentScoredCache;
/// use scored_cache::strategy::FrequencyRecency;
/// use core::num::NonZeroU64;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cache = Arc::new(ConcurrentScoredCache::new(
///     NonZeroU64::new(1000).unwrap(),
///     FrequencyRecency::default(),
/// ));
///
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || {
///             for i in 0..100u64 {
///                 let key = t * 1000 + i;
///                 if cache.lookup(&key).is_none() {
///                     let _ = cache.insert(key, i, 1);
///                 }
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(cache.len(), 400);
/// ```
pub struct ConcurrentScoredCache<K, V, P: ScoringStrategy, S = DefaultHashBuilder> {
    inner: Mutex<ScoredCache<K, V, P, S>>,
}

impl<K, V, P> ConcurrentScoredCache<K, V, P, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    P: ScoringStrategy,
{
    /// Creates a size-aware concurrent cache with the given capacity.
    pub fn new(capacity: NonZeroU64, strategy: P) -> Self {
        Self::init(ScoredCacheConfig::with_capacity(capacity), strategy, None)
    }

    /// Creates a concurrent cache from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity configuration
    /// * `strategy` - Scoring strategy
    /// * `hasher` - Optional custom hash builder. If `None`, uses `DefaultHashBuilder`
    pub fn init(
        config: ScoredCacheConfig,
        strategy: P,
        hasher: Option<DefaultHashBuilder>,
    ) -> Self {
        Self::from_cache(ScoredCache::init(config, strategy, hasher))
    }
}

impl<K, V, P, S> ConcurrentScoredCache<K, V, P, S>
where
    K: Hash + Eq + Clone,
    P: ScoringStrategy,
    S: BuildHasher,
{
    /// Wraps an existing cache, keeping its entries and counters.
    pub fn from_cache(cache: ScoredCache<K, V, P, S>) -> Self {
        ConcurrentScoredCache {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> ScoredCache<K, V, P, S> {
        self.inner.into_inner()
    }

    /// Looks up a key and clones the value out on a hit.
    ///
    /// Counts as an access exactly like [`ScoredCache::lookup`].
    pub fn lookup<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().lookup(key).cloned()
    }

    /// Looks up a key and applies `f` to the value while the lock is held.
    pub fn lookup_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().lookup(key).map(f)
    }

    /// Looks up a key and applies `f` to a mutable value while the lock is held.
    pub fn lookup_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().lookup_mut(key).map(f)
    }

    /// Inserts a key that is not resident, evicting as needed.
    ///
    /// See [`ScoredCache::insert`] for the error cases.
    pub fn insert(&self, key: K, value: V, size: u64) -> Result<(), InsertError> {
        self.inner.lock().insert(key, value, size)
    }

    /// Returns `true` if the key is resident. Does not count as an access.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no entry is resident.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Sum of the sizes of all resident entries.
    pub fn used_size(&self) -> u64 {
        self.inner.lock().used_size()
    }

    /// Total capacity in size units.
    pub fn capacity(&self) -> u64 {
        self.inner.lock().capacity()
    }

    /// Current value of the logical clock.
    pub fn access_count(&self) -> u64 {
        self.inner.lock().access_count()
    }

    /// Number of lookups that found their key.
    pub fn hit_count(&self) -> u64 {
        self.inner.lock().hit_count()
    }

    /// Number of lookups that did not find their key.
    pub fn miss_count(&self) -> u64 {
        self.inner.lock().miss_count()
    }

    /// Snapshot of capacity, occupancy and counters, taken under the lock.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Drops every entry and resets the clock, counters and global state.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access to the inner cache.
    ///
    /// Useful for several operations that must observe one consistent state,
    /// such as a lookup followed by an insert on miss.
    pub fn with_cache<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ScoredCache<K, V, P, S>) -> R,
    {
        f(&mut self.inner.lock())
    }
}

impl<K, V, P, S> core::fmt::Debug for ConcurrentScoredCache<K, V, P, S>
where
    P: ScoringStrategy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentScoredCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentScoredCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
