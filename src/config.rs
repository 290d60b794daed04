//! Cache Configuration Module
//!
//! This module provides the configuration structure for [`ScoredCache`](crate::ScoredCache).
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! The engine configuration only describes capacity. Everything that shapes
//! eviction decisions (weights, decay rates, initial ages) belongs to the
//! scoring strategy and is set on the strategy value passed next to the config.
//! Both are fixed for the lifetime of the cache.
//!
//! # Sizing Guidelines
//!
//! `capacity` is measured in the same abstract unit as the `size` argument of
//! [`ScoredCache::insert`](crate::ScoredCache::insert): bytes, blocks, pages,
//! or anything else the caller chooses.
//!
//! With `consider_object_size: false` every object counts as one unit, so
//! `capacity` becomes a plain entry count and the sizes passed to `insert` are
//! ignored. Strategies see the charged size of 1 as well, so size-aware
//! scoring such as GDSF degrades to its frequency term.
//!
//! # Examples
//!
//! ```
//! use scored_cache::config::ScoredCacheConfig;
//! use scored_cache::strategy::FrequencyRecency;
//! use scored_cache::ScoredCache;
//! use core::num::NonZeroU64;
//!
//! // 10MB size-aware cache
//! let config = ScoredCacheConfig {
//!     capacity: NonZeroU64::new(10 * 1024 * 1024).unwrap(),
//!     consider_object_size: true,
//! };
//!
//! let cache: ScoredCache<String, Vec<u8>, _> =
//!     ScoredCache::init(config, FrequencyRecency::default(), None);
//! assert_eq!(cache.capacity(), 10 * 1024 * 1024);
//! ```

use core::fmt;
use core::num::NonZeroU64;

/// Configuration for a [`ScoredCache`](crate::ScoredCache).
///
/// # Fields
///
/// - `capacity`: Total size budget, in the caller's size unit
/// - `consider_object_size`: When `false`, every object counts as size 1
///
/// # Examples
///
/// ```
/// use scored_cache::config::ScoredCacheConfig;
/// use core::num::NonZeroU64;
///
/// // Count-based: at most 100 entries, whatever their size
/// let config = ScoredCacheConfig {
///     capacity: NonZeroU64::new(100).unwrap(),
///     consider_object_size: false,
/// };
/// assert_eq!(config.effective_size(4096), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoredCacheConfig {
    /// Total capacity, compared against the sum of resident entry sizes.
    pub capacity: NonZeroU64,
    /// Whether object sizes count against capacity. When `false`, each
    /// object occupies exactly one unit.
    pub consider_object_size: bool,
}

impl ScoredCacheConfig {
    /// Creates a size-aware configuration with the given capacity.
    #[inline]
    pub fn with_capacity(capacity: NonZeroU64) -> Self {
        Self {
            capacity,
            consider_object_size: true,
        }
    }

    /// Size charged against capacity for an object of the given size.
    #[inline]
    pub fn effective_size(&self, size: u64) -> u64 {
        if self.consider_object_size {
            size
        } else {
            1
        }
    }
}

impl fmt::Debug for ScoredCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoredCacheConfig")
            .field("capacity", &self.capacity)
            .field("consider_object_size", &self.consider_object_size)
            .finish()
    }
}
