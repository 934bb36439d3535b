//! iex-rs: ergonomic client for the IEX stock market data API.
//!
//! The client loads the exchange's reference symbol list once, at construction, and runs
//! every user-supplied symbol through it: symbols are upper-cased and unknown ones are
//! silently dropped. Expensive endpoints (company, news, chart, financials) are memoized in a
//! pluggable [`Cache`]; quotes and prices are always fetched fresh.
//!
//! ```no_run
//! # use iex_rs::{Cache, IexClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), iex_rs::IexError> {
//! let cache = Cache::connect_or_memory("redis://127.0.0.1/").await;
//! let client = IexClient::builder()
//!     .token_file("iex.json")
//!     .cache(cache)
//!     .build()
//!     .await?;
//!
//! let quotes = iex_rs::quotes(&client, ["aapl", "msft", "not-a-symbol"]).await?;
//! assert!(!quotes.contains_key("NOT-A-SYMBOL"));
//!
//! let found = client.symbols().search("apple");
//! println!("{found:?}");
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod company;
pub mod core;
pub mod financials;
pub mod format;
pub mod news;
pub mod quote;
pub mod symbols;
pub mod ticker;

pub use chart::{ChartPoint, ChartRange, Ohlc, chart};
pub use company::{Company, companies};
pub use crate::core::{Cache, CacheMode, IexClient, IexClientBuilder, IexError};
pub use financials::{FinancialReport, FinancialsBuilder, Period, financials};
pub use format::pretty_numbers;
pub use news::{NewsBuilder, NewsItem, news};
pub use quote::{Quote, QuotesBuilder, prices, quotes};
pub use symbols::{SymbolDirectory, SymbolLabel};
pub use ticker::Ticker;

/// Installs a `tracing` subscriber driven by `RUST_LOG`, for tests and local experiments.
/// Safe to call more than once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
