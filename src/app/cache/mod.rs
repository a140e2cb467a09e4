//! Time-bounded memoization for HAPI fetches
//!
//! `StaleCache` is a generic staleness cache: a value fetched within `ttl`
//! is served from memory, anything older is treated as absent and fetched
//! again. It deliberately does not de-duplicate in-flight fetches:
//! concurrent callers that miss on the same key may each run the fetch,
//! and the last writer's result becomes the cached value. Entries never
//! leave this module; callers only ever see cloned values.

mod config;

pub use config::CacheConfig;

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// A cached value plus the moment it was fetched
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

/// Generic time-bounded memoization keyed by request identity
#[derive(Debug)]
pub struct StaleCache<K, V> {
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> Default for StaleCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> StaleCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value when fresh, otherwise run `fetch` and store
    /// its result
    ///
    /// The map lock is never held across the fetch await, so a slow fetch
    /// does not block unrelated keys. Failed fetches leave the cache
    /// untouched; the next caller retries.
    pub async fn get_or_fetch<E, F, Fut>(&self, key: K, ttl: Duration, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get_fresh(&key, ttl).await {
            return Ok(value);
        }

        let value = fetch().await?;

        let mut entries = self.entries.lock().await;
        entries.insert(
            key,
            CacheEntry {
                value: value.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(value)
    }

    /// Look up a value no older than `ttl`
    pub async fn get_fresh(&self, key: &K, ttl: Duration) -> Option<V> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < ttl)
            .map(|entry| entry.value.clone())
    }

    /// Drop the entry for a key, forcing the next call to fetch
    pub async fn invalidate(&self, key: &K) {
        self.entries.lock().await.remove(key);
    }

    /// Drop all entries
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Number of entries currently held (fresh or stale)
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
