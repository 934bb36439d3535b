use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Redis-backed cache. Values are stored as JSON text; TTLs are enforced by the server.
#[derive(Clone)]
pub struct RedisCache {
    url: String,
    connection: MultiplexedConnection,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache").field("url", &self.url).finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Opens a multiplexed connection to the server at `url` (e.g. `redis://127.0.0.1/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the server cannot be reached.
    pub async fn connect(url: &str) -> redis::RedisResult<Self> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url, "connecting to redis");
        let client = Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self {
            url: url.to_string(),
            connection,
        })
    }

    pub(crate) async fn get(&self, key: &str) -> Option<Value> {
        let mut conn = self.connection.clone();
        let raw: Option<String> = match conn.get(key).await {
            Ok(v) => v,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_e, "redis GET failed");
                return None;
            }
        };
        match serde_json::from_str(&raw?) {
            Ok(v) => Some(v),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, error = %_e, "discarding undecodable cache entry");
                None
            }
        }
    }

    pub(crate) async fn set(&self, key: &str, value: &Value, ttl: Duration) {
        let json = value.to_string();
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<()> = if ttl.is_zero() {
            conn.set(key, json).await
        } else {
            // SET EX rejects zero; round sub-second TTLs up.
            conn.set_ex(key, json, ttl.as_secs().max(1)).await
        };
        if let Err(_e) = result {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, error = %_e, "redis SET failed");
        }
    }
}
