//! Pluggable response cache.
//!
//! A [`Cache`] is either an in-process map or a Redis connection. Both store decoded JSON
//! values under opaque string keys with a time-to-live. Reads of a missing or expired key
//! and backend failures look the same to callers: the value is simply absent.

mod memory;
mod networked;

pub use memory::MemoryCache;
pub use networked::RedisCache;

use serde_json::Value;
use std::time::Duration;

/// Default time allowed for the initial Redis connection before falling back to memory.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Defines the behavior of the cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

/// A shared handle to a cache backend.
///
/// Cloning is cheap; clones share the same underlying store.
#[derive(Clone, Debug)]
pub enum Cache {
    /// In-process map. Nothing survives a restart.
    Memory(MemoryCache),
    /// Networked Redis backend.
    Redis(RedisCache),
}

impl Default for Cache {
    fn default() -> Self {
        Self::memory()
    }
}

impl Cache {
    /// Creates an empty in-memory cache.
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryCache::new())
    }

    /// Connects to a Redis server.
    ///
    /// # Errors
    ///
    /// Returns the underlying Redis error if the URL is invalid or the server is unreachable.
    pub async fn redis(url: &str) -> Result<Self, ::redis::RedisError> {
        Ok(Self::Redis(RedisCache::connect(url).await?))
    }

    /// Connects to Redis at `url`, falling back to an in-memory cache if the server cannot be
    /// reached within a short timeout.
    pub async fn connect_or_memory(url: &str) -> Self {
        match tokio::time::timeout(CONNECT_TIMEOUT, RedisCache::connect(url)).await {
            Ok(Ok(redis)) => Self::Redis(redis),
            Ok(Err(_e)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "redis unavailable, using in-memory cache");
                Self::memory()
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("redis connection timed out, using in-memory cache");
                Self::memory()
            }
        }
    }

    /// Returns `true` if this handle is backed by Redis.
    #[must_use]
    pub const fn is_networked(&self) -> bool {
        matches!(self, Self::Redis(_))
    }

    /// Returns the value stored under `key`, or `None` if it is absent or expired.
    pub async fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::Memory(m) => m.get(key).await,
            Self::Redis(r) => r.get(key).await,
        }
    }

    /// Stores `value` under `key`. A zero `ttl` means the entry never expires.
    pub async fn set(&self, key: &str, value: &Value, ttl: Duration) {
        match self {
            Self::Memory(m) => m.set(key, value.clone(), ttl).await,
            Self::Redis(r) => r.set(key, value, ttl).await,
        }
    }
}
