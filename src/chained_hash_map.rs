//! ChainedHashMap: fixed bucket array over arena-backed chains.

use crate::chain::{ChainIter, Chains, Link};
use crate::config::{Capacity, MapConfig};
use crate::error::ConfigError;
use core::fmt;

/// Integer-keyed map with a bucket count fixed at construction.
///
/// Keys hash to `key mod capacity` (normalized for negative keys).
/// Colliding keys share a chain; new keys go to the tail of their
/// chain, updates overwrite in place. The table never grows, so chains
/// lengthen as the load factor rises.
pub struct ChainedHashMap<V> {
    capacity: Capacity,
    buckets: Box<[Option<Link>]>, // chain heads, one per bucket
    chains: Chains<V>,
}

impl<V> ChainedHashMap<V> {
    /// Map with the default 1000 buckets.
    pub fn new() -> Self {
        let capacity = Capacity::DEFAULT;
        Self::from_parts(capacity, vec![None; capacity.get()])
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_buckets(Capacity::new(capacity)?)
    }

    pub fn from_config(config: &MapConfig) -> Result<Self, ConfigError> {
        Self::with_buckets(config.validate()?)
    }

    /// Build a map with `capacity` buckets.
    ///
    /// Fails with `ConfigError::CapacityTooLarge` when the bucket array
    /// cannot be allocated.
    pub fn with_buckets(capacity: Capacity) -> Result<Self, ConfigError> {
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity.get())
            .map_err(|_| ConfigError::CapacityTooLarge(capacity.get() as u64))?;
        buckets.resize(capacity.get(), None);
        Ok(Self::from_parts(capacity, buckets))
    }

    fn from_parts(capacity: Capacity, buckets: Vec<Option<Link>>) -> Self {
        tracing::trace!(capacity = capacity.get(), "creating chained hash map");
        Self {
            capacity,
            buckets: buckets.into_boxed_slice(),
            chains: Chains::new(),
        }
    }

    /// Number of buckets. Never changes.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.chains.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored keys per bucket. Informational; nothing rehashes.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Bucket that `key` belongs to, always in `[0, capacity)`.
    #[inline]
    pub fn bucket_index(&self, key: i64) -> usize {
        // i128 keeps the remainder exact for any usize capacity.
        (key as i128).rem_euclid(self.capacity.get() as i128) as usize
    }

    /// Number of entries chained in bucket `index`; 0 when out of range.
    pub fn bucket_len(&self, index: usize) -> usize {
        self.chain(index).count()
    }

    /// Insert `value` under `key`.
    ///
    /// A new key is appended to the tail of its bucket's chain and `None`
    /// is returned. An existing key keeps its chain position; its value
    /// is replaced and the previous one returned.
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        let index = self.bucket_index(key);
        self.chains.upsert(&mut self.buckets[index], key, value)
    }

    /// Value for `key`, inserting `default()` first if it is absent.
    pub fn get_or_insert_with<F>(&mut self, key: i64, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = self.bucket_index(key);
        self.chains
            .get_or_insert_with(&mut self.buckets[index], key, default)
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        self.chains.get(self.buckets[self.bucket_index(key)], key)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let head = self.buckets[self.bucket_index(key)];
        self.chains.get_mut(head, key)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.chains
            .find(self.buckets[self.bucket_index(key)], key)
            .is_some()
    }

    /// Remove `key` and return its value.
    ///
    /// A missing key leaves the map untouched, returns `None`, and is
    /// reported at debug level.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.bucket_index(key);
        let removed = self.chains.unlink(&mut self.buckets[index], key);
        if removed.is_none() {
            tracing::debug!(key, bucket = index, "key does not exist");
        }
        removed
    }

    /// Entries of bucket `index`, head first. Empty when out of range.
    pub(crate) fn chain(&self, index: usize) -> ChainIter<'_, V> {
        let head = self.buckets.get(index).copied().flatten();
        self.chains.iter(head)
    }
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ChainedHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
