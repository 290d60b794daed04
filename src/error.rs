//! Error types returned by cache operations.
//!
//! Only [`ScoredCache::insert`](crate::ScoredCache::insert) can fail in a
//! recoverable way. Every failure mode leaves the cache untouched: no entry is
//! evicted, no metadata is updated and the access counter does not advance.
//!
//! Broken internal invariants (selecting a victim from an empty cache, size
//! accounting drifting from the resident entries) are bugs, not errors, and
//! panic instead of being reported here.

use thiserror::Error;

/// The object can never fit, regardless of how much is evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The object's effective size is larger than the total capacity.
    #[error("object of size {size} exceeds total cache capacity {capacity}")]
    ObjectTooLarge {
        /// Effective size of the rejected object.
        size: u64,
        /// Total capacity of the cache.
        capacity: u64,
    },
}

/// The key is already resident; a key cannot be resident twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("key is already resident in the cache")]
pub struct DuplicateKeyError;

/// The object has size zero while sizes count against capacity.
///
/// A zero-sized object would take up an entry without using capacity, so the
/// number of resident entries could grow without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("object size must be greater than zero")]
pub struct ZeroSizeError;

/// Failure of [`ScoredCache::insert`](crate::ScoredCache::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// See [`CapacityError`].
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    /// See [`DuplicateKeyError`].
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),
    /// See [`ZeroSizeError`].
    #[error(transparent)]
    ZeroSize(#[from] ZeroSizeError),
}

impl InsertError {
    /// Returns `true` if the insert was rejected because the key was resident.
    #[inline]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, InsertError::DuplicateKey(_))
    }

    /// Returns `true` if the insert was rejected because the object has size zero.
    #[inline]
    pub fn is_zero_size(&self) -> bool {
        matches!(self, InsertError::ZeroSize(_))
    }

    /// Returns `true` if the insert was rejected because the object is too large.
    #[inline]
    pub fn is_too_large(&self) -> bool {
        matches!(
            self,
            InsertError::Capacity(CapacityError::ObjectTooLarge { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_object_too_large_message() {
        let err = CapacityError::ObjectTooLarge {
            size: 3,
            capacity: 2,
        };
        assert_eq!(
            err.to_string(),
            "object of size 3 exceeds total cache capacity 2"
        );
    }

    #[test]
    fn test_insert_error_conversions() {
        let err: InsertError = DuplicateKeyError.into();
        assert!(err.is_duplicate_key());
        assert!(!err.is_too_large());
        assert_eq!(err.to_string(), "key is already resident in the cache");

        let err: InsertError = CapacityError::ObjectTooLarge {
            size: 10,
            capacity: 1,
        }
        .into();
        assert!(err.is_too_large());
        assert!(!err.is_duplicate_key());

        let err: InsertError = ZeroSizeError.into();
        assert!(err.is_zero_size());
        assert!(!err.is_too_large());
        assert_eq!(err.to_string(), "object size must be greater than zero");
    }
}
