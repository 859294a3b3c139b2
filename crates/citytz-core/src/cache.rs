// crates/citytz-core/src/cache.rs

//! Thread-safe LRU cache with hit/miss/eviction accounting.
//!
//! One [`parking_lot::RwLock`] guards the entries and the counters. `get`
//! reorders the recency list, so it takes the write side like `set` and
//! `clear`; only `len`, `max_size`, `stats`, `peek` and `contains` read under
//! the shared side. Every critical section is O(1) apart from `clear`.
//!
//! Counters live for the lifetime of the cache and are **not** reset by
//! [`LruCache::clear`]; only the entries are dropped. Dashboards reading
//! cumulative hit/miss numbers rely on this.

use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Capacity used when a cache is requested with a capacity of zero.
pub const DEFAULT_MAX_CACHE_SIZE: usize = 1000;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_CACHE_SIZE) {
    Some(n) => n,
    None => panic!("DEFAULT_MAX_CACHE_SIZE must be non-zero"),
};

/// Point-in-time snapshot of a cache's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Maximum number of entries
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped to make room for new ones
    pub evictions: u64,
    /// `hits / (hits + misses) * 100`, or 0 before the first lookup
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

struct Inner<K: Hash + Eq, V> {
    entries: lru::LruCache<K, V>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

/// Bounded least-recently-used cache.
///
/// ```rust
/// use citytz_core::cache::LruCache;
///
/// let cache = LruCache::new(2);
/// cache.set("a", 1);
/// cache.set("b", 2);
/// assert_eq!(cache.get("a"), Some(1)); // "a" is now most recently used
/// cache.set("c", 3); // evicts "b"
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.stats().evictions, 1);
/// ```
pub struct LruCache<K: Hash + Eq, V> {
    inner: RwLock<Inner<K, V>>,
    max_size: usize,
}

impl<K: Hash + Eq, V: Clone> Default for LruCache<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHE_SIZE)
    }
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// Create a cache holding at most `max_size` entries.
    ///
    /// A capacity of zero falls back to [`DEFAULT_MAX_CACHE_SIZE`] instead of
    /// failing.
    pub fn new(max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(DEFAULT_CAPACITY);
        Self {
            inner: RwLock::new(Inner {
                entries: lru::LruCache::new(capacity),
                hits: 0,
                misses: 0,
                evictions: 0,
            }),
            max_size: capacity.get(),
        }
    }

    /// Look up `key`, promoting it to most recently used on a hit.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut inner = self.inner.write();
        match inner.entries.get(key).cloned() {
            Some(value) => {
                inner.hits += 1;
                Some(value)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Insert or overwrite `key`.
    ///
    /// Overwriting keeps the size unchanged and promotes the entry. A new key
    /// that would push the cache past capacity evicts exactly one entry, the
    /// least recently used.
    pub fn set(&self, key: K, value: V) {
        let mut inner = self.inner.write();
        if let Some(slot) = inner.entries.get_mut(&key) {
            *slot = value;
            return;
        }
        if inner.entries.push(key, value).is_some() {
            inner.evictions += 1;
            trace!(evictions = inner.evictions, "evicted least recently used entry");
        }
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let dropped = inner.entries.len();
        inner.entries.clear();
        debug!(dropped, "cache cleared");
    }

    /// Read `key` without promoting it and without touching the counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().entries.peek(key).cloned()
    }

    /// Like [`LruCache::peek`], without cloning.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().entries.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.read();
        let lookups = inner.hits + inner.misses;
        let hit_rate = if lookups > 0 {
            inner.hits as f64 / lookups as f64 * 100.0
        } else {
            0.0
        };
        CacheStats {
            size: inner.entries.len(),
            max_size: self.max_size,
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
            hit_rate,
        }
    }
}
