mod model;

pub use model::{FinancialReport, Period};

use std::collections::BTreeMap;

use crate::core::batch::fetch_batch;
use crate::core::{CacheMode, IexClient, IexError};

/// Fetch quarterly financial reports for several symbols.
///
/// # Errors
///
/// Returns an error if the request fails or returns malformed data.
pub async fn financials<I, S>(
    client: &IexClient,
    symbols: I,
) -> Result<BTreeMap<String, Vec<FinancialReport>>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FinancialsBuilder::new(client).symbols(symbols).fetch().await
}

/// A builder for batch financial report requests.
pub struct FinancialsBuilder {
    client: IexClient,
    symbols: Vec<String>,
    period: Period,
    cache_mode: CacheMode,
}

impl FinancialsBuilder {
    /// Creates a builder with no symbols, quarterly period and cached reads.
    #[must_use]
    pub fn new(client: &IexClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            period: Period::default(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Set the symbols to query.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.symbols = syms.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Request annual or quarterly reports.
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Executes the request. Each known symbol maps to its reports, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns malformed data.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(period = self.period.as_str())))]
    pub async fn fetch(self) -> Result<BTreeMap<String, Vec<FinancialReport>>, IexError> {
        let symbols = self.client.symbols().normalize(&self.symbols);
        let extra = [("period", self.period.as_str().to_string())];
        let raw = fetch_batch(&self.client, &symbols, "financials", &extra, self.cache_mode).await?;

        Ok(raw
            .into_iter()
            .map(|(symbol, node)| (symbol, model::reports_from(node)))
            .collect())
    }
}
