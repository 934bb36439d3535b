//! Centralized constants for default endpoints, UA and cache lifetimes.

use std::time::Duration;

pub(crate) const USER_AGENT: &str = concat!("iex-rs/", env!("CARGO_PKG_VERSION"));

/// Production API root.
pub(crate) const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable/";

/// Sandbox API root (test data, separate tokens).
pub(crate) const SANDBOX_BASE_URL: &str = "https://sandbox.iexapis.com/stable/";

/// Lifetime of memoized endpoint responses.
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Lifetime of the cached reference symbol list.
pub(crate) const DEFAULT_SYMBOLS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Fixed cache key of the reference symbol list.
pub(crate) const SYMBOLS_CACHE_KEY: &str = "iex:ref-data:symbols";
