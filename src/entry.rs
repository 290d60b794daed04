//! Resident Cache Entry Type
//!
//! This module provides the `CacheEntry<V, M>` structure stored for every
//! resident key. The generic `M` parameter is the scoring strategy's metadata
//! record, so the value and the record that ranks it always live and die
//! together.
//!
//! # Memory Layout
//!
//! Each entry has the following overhead:
//! - `value: V` - User's value type
//! - `size: u64` - 8 bytes (size charged against capacity)
//! - `seq: u64` - 8 bytes (insertion order, used to break score ties)
//! - `inserted_at: u64` - 8 bytes (logical tick of the insert)
//! - `metadata: M` - strategy-defined
//!
//! The key is not stored here; it is the key of the map slot that owns the entry.
//!
//! # Timestamps
//!
//! There is no wall clock. `inserted_at` is the value of the cache's access
//! counter when the entry was created, which keeps every run reproducible.

use core::fmt;

/// A resident object together with its strategy-specific metadata record.
///
/// # Examples
///
/// ```
/// use scored_cache::entry::CacheEntry;
///
/// let entry = CacheEntry::new("payload", 4, 0, 1, ());
/// assert_eq!(entry.value, "payload");
/// assert_eq!(entry.size, 4);
/// assert_eq!(entry.seq(), 0);
/// assert_eq!(entry.inserted_at(), 1);
/// ```
pub struct CacheEntry<V, M> {
    /// The cached value
    pub value: V,

    /// Size charged against the cache capacity. Already normalized to 1 when
    /// the cache ignores object sizes.
    pub size: u64,

    /// Insertion sequence number, unique for the lifetime of the cache.
    seq: u64,

    /// Access counter value at insertion.
    inserted_at: u64,

    /// Strategy-specific metadata record.
    pub metadata: M,
}

impl<V, M> CacheEntry<V, M> {
    /// Creates a new entry.
    ///
    /// # Arguments
    ///
    /// * `value` - The cached value
    /// * `size` - Size charged against capacity
    /// * `seq` - Insertion sequence number
    /// * `inserted_at` - Logical tick of the insert
    /// * `metadata` - Initial metadata record produced by the strategy
    #[inline]
    pub fn new(value: V, size: u64, seq: u64, inserted_at: u64, metadata: M) -> Self {
        Self {
            value,
            size,
            seq,
            inserted_at,
            metadata,
        }
    }

    /// Insertion sequence number. Smaller means inserted earlier.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Access counter value when the entry was inserted.
    #[inline]
    pub fn inserted_at(&self) -> u64 {
        self.inserted_at
    }

    /// Number of ticks the entry has been resident as of `now`.
    #[inline]
    pub fn residency(&self, now: u64) -> u64 {
        now.saturating_sub(self.inserted_at)
    }
}

impl<V: Clone, M: Clone> Clone for CacheEntry<V, M> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            size: self.size,
            seq: self.seq,
            inserted_at: self.inserted_at,
            metadata: self.metadata.clone(),
        }
    }
}

impl<V: fmt::Debug, M: fmt::Debug> fmt::Debug for CacheEntry<V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("value", &self.value)
            .field("size", &self.size)
            .field("seq", &self.seq)
            .field("inserted_at", &self.inserted_at)
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::format;
    use alloc::vec;

    #[derive(Debug, Clone, PartialEq)]
    struct TestMeta {
        frequency: u64,
    }

    #[test]
    fn test_new_entry() {
        let entry = CacheEntry::new(42, 1, 7, 3, TestMeta { frequency: 1 });
        assert_eq!(entry.value, 42);
        assert_eq!(entry.size, 1);
        assert_eq!(entry.seq(), 7);
        assert_eq!(entry.inserted_at(), 3);
        assert_eq!(entry.metadata.frequency, 1);
    }

    #[test]
    fn test_residency() {
        let entry = CacheEntry::new("v", 1, 0, 10, ());
        assert_eq!(entry.residency(10), 0);
        assert_eq!(entry.residency(15), 5);
        // A stale clock never underflows
        assert_eq!(entry.residency(3), 0);
    }

    #[test]
    fn test_clone_entry() {
        let entry = CacheEntry::new(vec![1, 2, 3], 3, 1, 2, TestMeta { frequency: 100 });
        let cloned = entry.clone();

        assert_eq!(cloned.value, entry.value);
        assert_eq!(cloned.size, entry.size);
        assert_eq!(cloned.seq(), entry.seq());
        assert_eq!(cloned.metadata, entry.metadata);
    }

    #[test]
    fn test_metadata_is_mutable() {
        let mut entry = CacheEntry::new("value", 1, 0, 0, TestMeta { frequency: 0 });
        entry.metadata.frequency += 1;
        assert_eq!(entry.metadata.frequency, 1);
    }

    #[test]
    fn test_debug_impl() {
        let entry = CacheEntry::new(42, 1, 0, 0, ());
        let debug_str = format!("{:?}", entry);
        assert!(debug_str.contains("CacheEntry"));
        assert!(debug_str.contains("42"));
        assert!(debug_str.contains("seq"));
    }
}
