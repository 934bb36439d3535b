//! Needs a running Redis server: `REDIS_URL=redis://127.0.0.1/ cargo test -- --ignored`.

use iex_rs::Cache;
use redis::AsyncCommands;
use serde_json::json;
use std::time::Duration;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string())
}

async fn raw_connection() -> redis::aio::MultiplexedConnection {
    redis::Client::open(redis_url())
        .unwrap()
        .get_multiplexed_async_connection()
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn values_round_trip_as_json_text() {
    let cache = Cache::redis(&redis_url()).await.unwrap();
    assert!(cache.is_networked());
    let key = "iex-rs:test:round-trip";
    let value = json!({"AAPL": {"quote": {"latestPrice": 155.47, "tags": ["tech"]}}});

    cache.set(key, &value, Duration::from_secs(60)).await;

    assert_eq!(cache.get(key).await, Some(value.clone()));
    let mut conn = raw_connection().await;
    let stored: String = conn.get(key).await.unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&stored).unwrap(), value);
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn ttl_is_set_on_the_server() {
    let cache = Cache::redis(&redis_url()).await.unwrap();
    let mut conn = raw_connection().await;

    cache.set("iex-rs:test:ttl", &json!(1), Duration::from_secs(120)).await;
    let ttl: i64 = conn.ttl("iex-rs:test:ttl").await.unwrap();
    assert!((1..=120).contains(&ttl), "ttl was {ttl}");

    // Sub-second TTLs are rounded up to one second.
    cache.set("iex-rs:test:short", &json!(1), Duration::from_millis(10)).await;
    let ttl: i64 = conn.ttl("iex-rs:test:short").await.unwrap();
    assert!((0..=1).contains(&ttl), "ttl was {ttl}");

    // Zero means no expiry.
    cache.set("iex-rs:test:forever", &json!(1), Duration::ZERO).await;
    let ttl: i64 = conn.ttl("iex-rs:test:forever").await.unwrap();
    assert_eq!(ttl, -1);
    let _: () = conn.del("iex-rs:test:forever").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn undecodable_entries_read_as_absent() {
    let cache = Cache::redis(&redis_url()).await.unwrap();
    let mut conn = raw_connection().await;
    let _: () = conn
        .set_ex("iex-rs:test:garbage", "{not json", 60)
        .await
        .unwrap();

    assert_eq!(cache.get("iex-rs:test:garbage").await, None);
    assert_eq!(cache.get("iex-rs:test:never-set").await, None);
}
