//! Core components of the `iex-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IexClient`] and its builder.
//! - The primary [`IexError`] type.
//! - The pluggable response [`Cache`].
//! - The cached request primitive shared by every endpoint.

/// Response cache backends and per-call cache policy.
pub mod cache;
/// The main client (`IexClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IexError`) for the crate.
pub mod error;

pub(crate) mod batch;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IexClient`
pub use cache::{Cache, CacheMode};
pub use client::{IexClient, IexClientBuilder};
pub use error::IexError;
