use std::collections::BTreeSet;

use crate::chart::{self, ChartPoint, ChartRange};
use crate::company::{self, Company};
use crate::financials::{FinancialReport, FinancialsBuilder};
use crate::news::{NewsBuilder, NewsItem};
use crate::quote::{self, Quote, QuotesBuilder};
use crate::core::{CacheMode, IexClient, IexError};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with an [`IexClient`] and a symbol in any case. Every method resolves
/// the symbol through the client's directory first and fails with
/// [`IexError::InvalidArgument`] if it is unknown, before any request is made.
///
/// # Example
///
/// ```no_run
/// # use iex_rs::{IexClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IexClient::builder().token_file("iex.json").build().await?;
/// let ticker = Ticker::new(&client, "aapl");
///
/// let quote = ticker.quote().await?;
/// println!("{} last traded at {:?}", quote.symbol, quote.latest_price);
///
/// let month = ticker.chart("1m").await?;
/// println!("{} points over the last month", month.len());
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    client: IexClient,
    symbol: String,
    cache_mode: CacheMode,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &IexClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for the cached endpoints (company, news, chart, financials).
    /// Quotes and prices are never cached.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// The canonical symbol, if the directory knows it.
    #[must_use]
    pub fn symbol(&self) -> Option<String> {
        self.client.symbols().resolve(&self.symbol).ok()
    }

    /// The company name from the symbol directory.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if the symbol is unknown.
    pub fn name(&self) -> Result<String, IexError> {
        let symbol = self.resolve()?;
        self.client
            .symbols()
            .name_of([&symbol])
            .remove(&symbol)
            .ok_or_else(|| IexError::InvalidArgument(format!("unknown symbol: {symbol}")))
    }

    fn resolve(&self) -> Result<String, IexError> {
        self.client.symbols().resolve(&self.symbol)
    }

    fn missing(&self, what: &str) -> IexError {
        IexError::Data(format!("no {what} returned for {}", self.symbol))
    }

    /* ---------------- Quotes ---------------- */

    /// Fetches a fresh quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown, the request fails, or the response has no
    /// quote for the symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn quote(&self) -> Result<Quote, IexError> {
        let symbol = self.resolve()?;
        QuotesBuilder::new(&self.client)
            .add_symbol(symbol.clone())
            .fetch()
            .await?
            .remove(&symbol)
            .ok_or_else(|| self.missing("quote"))
    }

    /// Fetches the last trade price.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown, the request fails, or no price was returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn price(&self) -> Result<f64, IexError> {
        let symbol = self.resolve()?;
        quote::prices(&self.client, [&symbol])
            .await?
            .remove(&symbol)
            .ok_or_else(|| self.missing("price"))
    }

    /* ---------------- Company ---------------- */

    /// Fetches company information.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown, the request fails, or no company record was
    /// returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn company(&self) -> Result<Company, IexError> {
        let symbol = self.resolve()?;
        company::fetch_companies(&self.client, [&symbol], self.cache_mode)
            .await?
            .remove(&symbol)
            .ok_or_else(|| self.missing("company"))
    }

    /* ---------------- News ---------------- */

    /// Fetches the latest news with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if the symbol is unknown.
    pub async fn news(&self) -> Result<BTreeSet<NewsItem>, IexError> {
        self.news_builder()?.fetch().await
    }

    /// A news builder preset with this ticker's symbol and cache mode.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if the symbol is unknown.
    pub fn news_builder(&self) -> Result<NewsBuilder, IexError> {
        let symbol = self.resolve()?;
        Ok(NewsBuilder::new(&self.client)
            .symbols([symbol])
            .cache_mode(self.cache_mode))
    }

    /* ---------------- Chart ---------------- */

    /// Fetches chart rows over `range` (e.g. `"1d"`, `"6m"`, `"5y"`).
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidRange`] for an unsupported range, [`IexError::InvalidArgument`]
    /// for an unknown symbol, or any request error.
    pub async fn chart(&self, range: &str) -> Result<Vec<ChartPoint>, IexError> {
        let range: ChartRange = range.parse()?;
        self.chart_range(range).await
    }

    /// Fetches chart rows over a typed range.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] for an unknown symbol, or any request error.
    pub async fn chart_range(&self, range: ChartRange) -> Result<Vec<ChartPoint>, IexError> {
        chart::fetch_chart(&self.client, &self.symbol, range, self.cache_mode).await
    }

    /* ---------------- Financials ---------------- */

    /// Fetches quarterly financial reports, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is unknown, the request fails, or the response has no
    /// financials entry for the symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn financials(&self) -> Result<Vec<FinancialReport>, IexError> {
        let symbol = self.resolve()?;
        FinancialsBuilder::new(&self.client)
            .symbols([&symbol])
            .cache_mode(self.cache_mode)
            .fetch()
            .await?
            .remove(&symbol)
            .ok_or_else(|| self.missing("financials"))
    }
}
