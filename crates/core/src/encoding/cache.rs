//! Memoization of segmentation results.
//!
//! Source code repeats the same identifiers constantly, so every novel
//! input is segmented once and replayed from here afterwards. Entries are
//! never evicted.

use ahash::AHashMap;
use compact_str::CompactString;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe, append-only cache from marker-terminated input to subwords.
#[derive(Debug, Default)]
pub struct SegmentCache {
    entries: Mutex<AHashMap<CompactString, Vec<CompactString>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SegmentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, AHashMap<CompactString, Vec<CompactString>>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the cached segmentation of `key`, or compute and store it.
    ///
    /// The lock is not held while `segment` runs. When two threads race on
    /// the same key, the first stored result is kept.
    pub fn get_or_insert_with<F>(&self, key: &str, segment: F) -> Vec<CompactString>
    where
        F: FnOnce(&str) -> Vec<CompactString>,
    {
        if let Some(cached) = self.entries().get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let pieces = segment(key);

        self.entries()
            .entry(CompactString::new(key))
            .or_insert(pieces)
            .clone()
    }

    /// Get a cached segmentation without computing one.
    pub fn get(&self, key: &str) -> Option<Vec<CompactString>> {
        self.entries().get(key).cloned()
    }

    /// Check whether `key` has been segmented before.
    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Clear all entries and reset the counters.
    pub fn clear(&self) {
        self.entries().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;

        CacheStats {
            entries: self.len(),
            hits,
            misses,
            hit_rate: (lookups > 0).then(|| hits as f64 / lookups as f64),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to segment
    pub misses: u64,
    /// Hits over all lookups (None before the first lookup)
    pub hit_rate: Option<f64>,
}
