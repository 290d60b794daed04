//! Resident entry and metadata storage.
//!
//! `MetadataStore` maps each resident key to a single [`CacheEntry`] slot that
//! holds the value, its size and the strategy's metadata record. Because the
//! record is part of the slot, a record exists exactly when its key is
//! resident: both are created by one map insert and destroyed by one map
//! removal.
//!
//! **Note**: This module is internal infrastructure. The cache is the only
//! owner of a store and is responsible for the size accounting built on top
//! of it.

extern crate alloc;

use crate::entry::CacheEntry;
use crate::strategy::Resident;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Per-key storage of resident entries and their metadata records.
pub(crate) struct MetadataStore<K, V, M, S = DefaultHashBuilder> {
    map: HashMap<K, CacheEntry<V, M>, S>,
}

impl<K, V, M, S> MetadataStore<K, V, M, S> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Hash + Eq, V, M, S: BuildHasher> MetadataStore<K, V, M, S> {
    /// Creates an empty store using the given hash builder.
    pub(crate) fn with_hasher(hash_builder: S) -> Self {
        MetadataStore {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    #[inline]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    #[inline]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&CacheEntry<V, M>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    #[inline]
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut CacheEntry<V, M>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    /// Makes `key` resident.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already resident. Callers check residency first, so
    /// reaching the panic means the store and the cache disagree.
    pub(crate) fn insert(&mut self, key: K, entry: CacheEntry<V, M>) {
        if self.map.insert(key, entry).is_some() {
            panic!("invariant violation: metadata store overwrote a resident entry");
        }
    }

    /// Removes `key`, returning its entry together with its metadata record.
    #[inline]
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<CacheEntry<V, M>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    /// Every resident entry, in map order.
    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &CacheEntry<V, M>)> {
        self.map.iter()
    }

    /// Every resident entry sorted by insertion sequence number.
    pub(crate) fn iter_by_seq(&self) -> impl Iterator<Item = (&K, &CacheEntry<V, M>)> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_unstable_by_key(|(_, entry)| entry.seq());
        entries.into_iter()
    }

    /// Mutable views of every resident record in insertion order, handed to
    /// eviction callbacks.
    pub(crate) fn residents_mut(&mut self) -> impl Iterator<Item = Resident<'_, M>> {
        let mut entries: Vec<_> = self.map.values_mut().collect();
        entries.sort_unstable_by_key(|entry| entry.seq());
        entries.into_iter().map(|entry| Resident {
            size: entry.size,
            seq: entry.seq(),
            metadata: &mut entry.metadata,
        })
    }

    /// Sum of resident sizes, recomputed from scratch.
    pub(crate) fn total_size(&self) -> u64 {
        self.map.values().map(|entry| entry.size).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, V, M, S> core::fmt::Debug for MetadataStore<K, V, M, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetadataStore")
            .field("len", &self.map.len())
            .finish()
    }
}
