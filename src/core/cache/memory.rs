use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    expires_at: Option<Instant>,
}

/// In-process cache backed by a `HashMap`.
///
/// Expired entries are ignored on read but never swept.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    map: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn get(&self, key: &str) -> Option<Value> {
        let guard = self.map.read().await;
        let entry = guard.get(key)?;
        match entry.expires_at {
            Some(at) if Instant::now() > at => None,
            _ => Some(entry.value.clone()),
        }
    }

    pub(crate) async fn set(&self, key: &str, value: Value, ttl: Duration) {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Instant::now().checked_add(ttl)
        };
        let mut guard = self.map.write().await;
        guard.insert(key.to_string(), CacheEntry { value, expires_at });
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}
