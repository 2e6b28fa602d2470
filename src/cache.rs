//! Bounded LRU memoisation for expensive lookups.
//!
//! [`LruMemo`] caches completed results only: a computation that fails is
//! returned to the caller and retried on the next request. [`Memoized`] binds
//! a memo to the function it caches, built with [`memoize`] for infallible
//! functions and [`try_memoize`] for fallible ones.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Capacity used when zero is requested.
pub const DEFAULT_CAPACITY: usize = 4 * 7 * 2;

const DEFAULT_NON_ZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Hit/miss counters for a memo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Number of times the wrapped computation ran.
    pub misses: u64,
    /// Entries pushed out because the memo was full.
    pub evictions: u64,
}

/// LRU cache of computed values.
///
/// Reads through [`LruMemo::get_or_compute`] refresh recency; inserting past
/// capacity evicts the least recently used key.
pub struct LruMemo<K: Hash + Eq, V> {
    cache: LruCache<K, V>,
    stats: MemoStats,
}

impl<K: Hash + Eq + Clone, V: Clone> LruMemo<K, V> {
    /// Create a memo holding at most `capacity` entries.
    ///
    /// If capacity is 0, uses [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_NON_ZERO);
        Self {
            cache: LruCache::new(capacity),
            stats: MemoStats::default(),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        match self.try_get_or_compute(key, |k| Ok::<V, std::convert::Infallible>(compute(k))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like [`get_or_compute`](Self::get_or_compute), for fallible
    /// computations. An `Err` is passed through and nothing is cached.
    pub fn try_get_or_compute<E>(
        &mut self,
        key: K,
        compute: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.cache.get(&key) {
            self.stats.hits += 1;
            trace!("Memo hit");
            return Ok(value.clone());
        }

        self.stats.misses += 1;
        let value = compute(&key)?;
        if self.cache.push(key, value.clone()).is_some() {
            self.stats.evictions += 1;
            trace!("Memo evicted least recently used entry");
        }
        Ok(value)
    }

    /// Whether `key` is cached. Does not touch recency.
    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains(key)
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        let dropped = self.cache.len();
        self.cache.clear();
        debug!(dropped, "Memo cleared");
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of cached entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Counters since construction. [`clear`](Self::clear) keeps them.
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

/// A function wrapped in an [`LruMemo`].
pub struct Memoized<K: Hash + Eq, V, F> {
    memo: LruMemo<K, V>,
    f: F,
}

/// Wrap `f` so that each distinct key is computed at most once until it is
/// evicted or the cache is cleared.
pub fn memoize<K, V, F>(f: F, capacity: usize) -> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: FnMut(&K) -> V,
{
    Memoized {
        memo: LruMemo::new(capacity),
        f,
    }
}

/// Wrap a fallible `f`. Only `Ok` values are cached; see [`Memoized::try_apply`].
pub fn try_memoize<K, V, E, F>(f: F, capacity: usize) -> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: FnMut(&K) -> Result<V, E>,
{
    Memoized {
        memo: LruMemo::new(capacity),
        f,
    }
}

impl<K: Hash + Eq + Clone, V: Clone, F> Memoized<K, V, F> {
    /// `f(key)`, from the cache when possible.
    pub fn apply(&mut self, key: K) -> V
    where
        F: FnMut(&K) -> V,
    {
        let f = &mut self.f;
        self.memo.get_or_compute(key, |k| f(k))
    }

    /// `f(key)` for a fallible `f`. An `Err` is returned as is and the key
    /// stays uncached, so the next call runs `f` again.
    pub fn try_apply<E>(&mut self, key: K) -> Result<V, E>
    where
        F: FnMut(&K) -> Result<V, E>,
    {
        let f = &mut self.f;
        self.memo.try_get_or_compute(key, |k| f(k))
    }

    /// Drop every cached result.
    pub fn clear_cache(&mut self) {
        self.memo.clear();
    }

    /// Underlying memo, for inspecting its size and stats.
    pub fn memo(&self) -> &LruMemo<K, V> {
        &self.memo
    }
}
