mod api;
mod model;
mod wire;

pub use model::{NewsItem, related_symbols};

use std::collections::BTreeSet;

use crate::core::{CacheMode, IexClient, IexError};

/// Fewest articles that can be requested per symbol.
pub const MIN_NEWS_COUNT: u32 = 1;
/// Most articles that can be requested per symbol.
pub const MAX_NEWS_COUNT: u32 = 50;
const DEFAULT_NEWS_COUNT: u32 = 10;

/// Fetch recent news for several symbols with default settings.
///
/// # Errors
///
/// Per-symbol failures are logged and skipped, so this currently always succeeds; the `Result`
/// is kept for parity with the other endpoints.
pub async fn news<I, S>(client: &IexClient, symbols: I) -> Result<BTreeSet<NewsItem>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NewsBuilder::new(client).symbols(symbols).fetch().await
}

/// A builder for fetching news articles for one or more symbols.
///
/// The news endpoint is per symbol, so one request is made for each known symbol, in order.
/// Results are merged into a set, dropping articles shared between symbols.
pub struct NewsBuilder {
    client: IexClient,
    symbols: Vec<String>,
    count: u32,
    cache_mode: CacheMode,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with no symbols.
    #[must_use]
    pub fn new(client: &IexClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            count: DEFAULT_NEWS_COUNT,
            cache_mode: CacheMode::Use,
        }
    }

    /// Set the symbols to fetch news for.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.symbols = syms.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Sets the number of articles to request per symbol, clamped to
    /// [`MIN_NEWS_COUNT`]..=[`MAX_NEWS_COUNT`].
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count.clamp(MIN_NEWS_COUNT, MAX_NEWS_COUNT);
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Executes the requests and returns the deduplicated articles.
    ///
    /// A failure for one symbol is logged and skipped; the remaining symbols are still fetched.
    ///
    /// # Errors
    ///
    /// Does not currently fail; see [`news`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(count = self.count)))]
    pub async fn fetch(self) -> Result<BTreeSet<NewsItem>, IexError> {
        let mut out = BTreeSet::new();

        for symbol in self.client.symbols().normalize(&self.symbols) {
            match api::fetch_news(&self.client, &symbol, self.count, self.cache_mode).await {
                Ok(items) => out.extend(items),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = %symbol, error = %_e, "news fetch failed, skipping");
                }
            }
        }

        Ok(out)
    }
}
