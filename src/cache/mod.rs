//! Injected TTL cache for computed summaries. The route layer owns the
//! instance; nothing in the extraction or summarization core caches.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// Key/value store with per-entry expiry.
pub trait Cache<V>: Send + Sync {
    fn get(&self, key: &str) -> Option<V>;
    fn set(&self, key: &str, value: V, ttl: Duration);
}

/// Cache key for one article at one summary percentage.
pub fn cache_key(url: &str, percent: u8) -> String {
    format!("summary:{:x}", md5::compute(format!("{url}#{percent}")))
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// In-process cache backed by a concurrent map. Expired entries are dropped
/// lazily on read and in bulk by [`MemoryCache::purge_expired`].
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    store: Arc<DashMap<String, CacheEntry<V>>>,
}

impl<V> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.store.len();
        self.store.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.store.len())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> Cache<V> for MemoryCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let now = Utc::now();
        let entry = self.store.get(key)?;
        if entry.expires_at > now {
            return Some(entry.value.clone());
        }
        drop(entry);
        self.store.remove_if(key, |_, entry| entry.expires_at <= now);
        None
    }

    fn set(&self, key: &str, value: V, ttl: Duration) {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.store
            .insert(key.to_string(), CacheEntry { value, expires_at });
    }
}
