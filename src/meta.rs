//! Strategy-Specific Metadata Records
//!
//! Each scoring strategy keeps a fixed-shape record per resident key. The
//! records are defined here so they can be inspected through
//! [`ScoredCache::metadata`](crate::ScoredCache::metadata) and constructed
//! directly in tests.
//!
//! # Metadata Types
//!
//! | Strategy | Metadata Type | Description |
//! |----------|---------------|-------------|
//! | `FrequencyRecency` | `FrequencyRecencyMeta` | Access count and last access tick |
//! | `Lru`      | `RecencyMeta`   | Last access tick |
//! | `Lfu`      | `LfuMeta`       | Access frequency counter |
//! | `Lfuda`    | `LfudaMeta`     | Frequency and age at last access |
//! | `Gdsf`     | `GdsfMeta`      | Frequency, size and cached priority |
//! | `LruK<K>`  | `HistoryMeta<K>`| Bounded history of the last K access ticks |
//! | `Weighted` | `WeightedMeta`  | Decaying frequency, last access tick, size |
//!
//! Every record starts with a frequency of at least 1 so ratios computed from
//! a never-hit entry stay finite.
//!
//! # Usage
//!
//! ```
//! use scored_cache::meta::{GdsfMeta, HistoryMeta, LfuMeta};
//!
//! let lfu_meta = LfuMeta::new(1);
//! assert_eq!(lfu_meta.frequency, 1);
//!
//! let mut history: HistoryMeta<2> = HistoryMeta::new(5);
//! assert_eq!(history.kth_most_recent(), None);
//! history.record(9);
//! assert_eq!(history.kth_most_recent(), Some(5));
//!
//! let mut gdsf_meta = GdsfMeta::new(1, 4);
//! assert_eq!(gdsf_meta.calculate_priority(0.0), 0.25);
//! ```

/// Metadata for recency-only ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecencyMeta {
    /// Access counter value at the most recent insert or hit.
    pub last_access: u64,
}

/// Metadata for LFU (Least Frequently Used) ranking.
///
/// # Examples
///
/// ```
/// use scored_cache::meta::LfuMeta;
///
/// let mut meta = LfuMeta::new(1);
/// assert_eq!(meta.increment(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfuMeta {
    /// Access frequency count. Starts at 1 on insert.
    pub frequency: u64,
}

impl LfuMeta {
    /// Creates a new LFU metadata with the specified initial frequency.
    #[inline]
    pub fn new(frequency: u64) -> Self {
        Self { frequency }
    }

    /// Increments the frequency counter and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> u64 {
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }
}

impl Default for LfuMeta {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Metadata for the default frequency + recency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRecencyMeta {
    /// Number of accesses (insert counts as the first one).
    pub frequency: u64,
    /// Access counter value at the most recent insert or hit.
    pub last_access: u64,
}

impl FrequencyRecencyMeta {
    /// Metadata for an object inserted at tick `now`.
    #[inline]
    pub fn new(now: u64) -> Self {
        Self {
            frequency: 1,
            last_access: now,
        }
    }

    /// Records an access at tick `now`.
    #[inline]
    pub fn touch(&mut self, now: u64) {
        self.frequency = self.frequency.saturating_add(1);
        self.last_access = now;
    }

    /// Ticks elapsed since the last access.
    #[inline]
    pub fn idle(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_access)
    }
}

/// Metadata for LFUDA (LFU with Dynamic Aging) ranking.
///
/// # Algorithm
///
/// Entry priority = frequency + age
/// - `age` is a snapshot of the cache-wide age taken at insert and refreshed on every hit
/// - When an item is evicted, the cache-wide age rises to the evicted item's priority
///
/// # Examples
///
/// ```
/// use scored_cache::meta::LfudaMeta;
///
/// let meta = LfudaMeta::new(1, 10);
/// assert_eq!(meta.priority(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfudaMeta {
    /// Access frequency count.
    pub frequency: u64,
    /// Cache-wide age observed at the most recent insert or hit.
    pub age: u64,
}

impl LfudaMeta {
    /// Creates a new LFUDA metadata with the specified frequency and age.
    #[inline]
    pub fn new(frequency: u64, age: u64) -> Self {
        Self { frequency, age }
    }

    /// Calculates the effective priority (frequency + age).
    #[inline]
    pub fn priority(&self) -> u64 {
        self.frequency.saturating_add(self.age)
    }
}

/// Metadata for GDSF (Greedy Dual-Size Frequency) ranking.
///
/// # Priority Calculation
///
/// ```text
/// priority = (frequency / size) + global_age
/// ```
///
/// The cache never admits a zero-sized object, so `size` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdsfMeta {
    /// Access frequency count.
    pub frequency: u64,
    /// Size charged for the object.
    pub size: u64,
    /// Priority computed at the most recent insert or hit.
    pub priority: f64,
}

impl GdsfMeta {
    /// Creates a new GDSF metadata with the given frequency and size.
    /// The priority is left at zero until [`calculate_priority`](Self::calculate_priority).
    #[inline]
    pub fn new(frequency: u64, size: u64) -> Self {
        Self {
            frequency,
            size,
            priority: 0.0,
        }
    }

    /// Recomputes and stores the priority against the given global age.
    #[inline]
    pub fn calculate_priority(&mut self, global_age: f64) -> f64 {
        self.priority = (self.frequency as f64 / self.size as f64) + global_age;
        self.priority
    }
}

/// Bounded history of the most recent `K` access ticks (LRU-K).
///
/// `history[0]` is the most recent access. Slots beyond the number of
/// recorded accesses are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMeta<const K: usize> {
    history: [u64; K],
    accesses: u64,
}

impl<const K: usize> HistoryMeta<K> {
    /// History holding a single access at tick `now`.
    #[inline]
    pub fn new(now: u64) -> Self {
        let mut meta = Self {
            history: [0; K],
            accesses: 0,
        };
        meta.record(now);
        meta
    }

    /// Pushes an access tick, dropping the oldest one once `K` are held.
    pub fn record(&mut self, now: u64) {
        if K == 0 {
            return;
        }
        self.history.copy_within(0..K - 1, 1);
        self.history[0] = now;
        self.accesses = self.accesses.saturating_add(1);
    }

    /// Total number of accesses recorded, including those no longer in the window.
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Tick of the most recent access.
    #[inline]
    pub fn last_access(&self) -> Option<u64> {
        self.history.first().copied().filter(|_| self.accesses > 0)
    }

    /// Tick of the K-th most recent access, if at least `K` accesses happened.
    #[inline]
    pub fn kth_most_recent(&self) -> Option<u64> {
        if K == 0 || self.accesses < K as u64 {
            None
        } else {
            Some(self.history[K - 1])
        }
    }

    /// Recorded ticks, most recent first.
    #[inline]
    pub fn ticks(&self) -> &[u64] {
        let held = (self.accesses.min(K as u64)) as usize;
        &self.history[..held]
    }
}

/// Metadata for the configurable weighted-sum ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMeta {
    /// Access frequency. Decays on every eviction, never below 1.
    pub frequency: f64,
    /// Access counter value at the most recent insert or hit.
    pub last_access: u64,
    /// Size charged for the object.
    pub size: u64,
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::format;

    #[test]
    fn test_lfu_meta_default() {
        let meta = LfuMeta::default();
        assert_eq!(meta.frequency, 1);
    }

    #[test]
    fn test_lfu_meta_increment() {
        let mut meta = LfuMeta::new(1);
        assert_eq!(meta.increment(), 2);
        assert_eq!(meta.increment(), 3);
        assert_eq!(meta.frequency, 3);

        let mut saturated = LfuMeta::new(u64::MAX);
        assert_eq!(saturated.increment(), u64::MAX);
    }

    #[test]
    fn test_frequency_recency_touch() {
        let mut meta = FrequencyRecencyMeta::new(4);
        assert_eq!(meta.frequency, 1);
        assert_eq!(meta.idle(10), 6);

        meta.touch(10);
        assert_eq!(meta.frequency, 2);
        assert_eq!(meta.last_access, 10);
        assert_eq!(meta.idle(10), 0);
    }

    #[test]
    fn test_lfuda_meta_priority() {
        let meta = LfudaMeta::new(10, 5);
        assert_eq!(meta.priority(), 15);
        assert_eq!(LfudaMeta::new(u64::MAX, 1).priority(), u64::MAX);
    }

    #[test]
    fn test_gdsf_meta_calculate_priority() {
        let mut meta = GdsfMeta::new(4, 2);
        // priority = frequency/size + global_age = 4/2 + 10 = 12
        let priority = meta.calculate_priority(10.0);
        assert_eq!(priority, 12.0);
        assert_eq!(meta.priority, 12.0);
    }

    #[test]
    fn test_history_meta_window() {
        let mut meta: HistoryMeta<3> = HistoryMeta::new(1);
        assert_eq!(meta.ticks(), &[1]);
        assert_eq!(meta.kth_most_recent(), None);

        meta.record(4);
        meta.record(9);
        assert_eq!(meta.ticks(), &[9, 4, 1]);
        assert_eq!(meta.kth_most_recent(), Some(1));

        meta.record(12);
        assert_eq!(meta.ticks(), &[12, 9, 4]);
        assert_eq!(meta.kth_most_recent(), Some(4));
        assert_eq!(meta.last_access(), Some(12));
        assert_eq!(meta.accesses(), 4);
    }

    #[test]
    fn test_history_meta_single_slot() {
        let mut meta: HistoryMeta<1> = HistoryMeta::new(2);
        assert_eq!(meta.kth_most_recent(), Some(2));
        meta.record(7);
        assert_eq!(meta.kth_most_recent(), Some(7));
        assert_eq!(meta.ticks(), &[7]);
    }

    #[test]
    fn test_metadata_debug() {
        let lfu = LfuMeta::new(5);
        let debug_str = format!("{:?}", lfu);
        assert!(debug_str.contains("LfuMeta"));
        assert!(debug_str.contains("5"));

        let history: HistoryMeta<2> = HistoryMeta::new(3);
        let debug_str = format!("{:?}", history);
        assert!(debug_str.contains("HistoryMeta"));
    }
}
