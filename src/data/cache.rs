//! Bounded in-memory memoization cache.
//!
//! Replaces the hosting framework's implicit script-level cache with explicit
//! memoization: entries are keyed by the input's checksum and bounded by both
//! count and age. Eviction beyond those bounds means recompute, never an
//! error. Concurrent first accesses may compute the same entry twice; values
//! come from side-effect-free derivations, so either result is kept.

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::CacheConfig;
use crate::data::error::DataResult;

struct Entry<T> {
    value: Arc<T>,
    inserted_at: Instant,
}

/// Count- and age-bounded cache of computed values keyed by string identity.
pub struct MemoCache<T> {
    entries: RwLock<HashMap<String, Entry<T>>>,
    max_entries: usize,
    max_age: Duration,
}

impl<T> MemoCache<T> {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries: config.max_entries.max(1),
            max_age: config.max_age,
        }
    }

    /// Look up a live entry. Expired entries count as misses.
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read();
        entries.get(key).and_then(|entry| {
            if entry.inserted_at.elapsed() > self.max_age {
                None
            } else {
                Some(Arc::clone(&entry.value))
            }
        })
    }

    /// Return the cached value for `key`, computing and inserting it on a miss.
    ///
    /// The computation runs outside the lock. Two racing callers may both
    /// compute; whichever inserts last wins, and both get a usable value.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> DataResult<Arc<T>>
    where
        F: FnOnce() -> DataResult<T>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        debug!("cache miss for key {}", key);
        let value = Arc::new(compute()?);
        self.insert(key.to_string(), Arc::clone(&value));
        Ok(value)
    }

    /// Number of retained entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn insert(&self, key: String, value: Arc<T>) {
        let mut entries = self.entries.write();
        entries.retain(|_, entry| entry.inserted_at.elapsed() <= self.max_age);
        entries.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
        while entries.len() > self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_entries: usize, max_age: Duration) -> CacheConfig {
        CacheConfig {
            max_entries,
            max_age,
        }
    }

    #[test]
    fn test_hit_after_compute() {
        let cache: MemoCache<u32> = MemoCache::new(&config(4, Duration::from_secs(60)));
        let v = cache.get_or_compute("a", || Ok(41)).unwrap();
        assert_eq!(*v, 41);
        // Second access must not recompute
        let v = cache.get_or_compute("a", || panic!("recomputed")).unwrap();
        assert_eq!(*v, 41);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_count_bound_evicts_oldest() {
        let cache: MemoCache<u32> = MemoCache::new(&config(2, Duration::from_secs(60)));
        cache.get_or_compute("a", || Ok(1)).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        cache.get_or_compute("b", || Ok(2)).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        cache.get_or_compute("c", || Ok(3)).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_age_bound_forces_recompute() {
        let cache: MemoCache<u32> = MemoCache::new(&config(4, Duration::ZERO));
        cache.get_or_compute("a", || Ok(1)).unwrap();
        std::thread::sleep(Duration::from_millis(2));
        let v = cache.get_or_compute("a", || Ok(2)).unwrap();
        assert_eq!(*v, 2);
    }

    #[test]
    fn test_compute_error_propagates_and_caches_nothing() {
        let cache: MemoCache<u32> = MemoCache::new(&config(4, Duration::from_secs(60)));
        let err = cache.get_or_compute("a", || {
            Err(crate::data::error::DataError::Export("boom".to_string()))
        });
        assert!(err.is_err());
        assert!(cache.is_empty());
    }
}
