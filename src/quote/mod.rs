mod model;
mod wire;

pub use model::Quote;

use std::collections::BTreeMap;

use crate::core::batch::{MAX_BATCH_SYMBOLS, fetch_batch};
use crate::core::{CacheMode, IexClient, IexError};

/* ---------------- Public API ---------------- */

/// Fetch quotes for several symbols through the batch endpoint.
///
/// Unknown symbols are dropped; quotes are never served from the cache.
///
/// # Errors
///
/// Returns an error if any batch request fails or returns malformed data.
pub async fn quotes<I, S>(client: &IexClient, symbols: I) -> Result<BTreeMap<String, Quote>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    QuotesBuilder::new(client).symbols(symbols).fetch().await
}

/// Fetch the last trade price of several symbols from `tops/last`.
///
/// Unknown symbols are dropped and an empty input makes no request. Never cached.
///
/// # Errors
///
/// Returns an error if the request fails or returns malformed data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn prices<I, S>(client: &IexClient, symbols: I) -> Result<BTreeMap<String, f64>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symbols: Vec<String> = client.symbols().normalize(symbols).into_iter().collect();
    let mut out = BTreeMap::new();

    for chunk in symbols.chunks(MAX_BATCH_SYMBOLS) {
        let params = [("symbols", chunk.join(","))];
        let body = client
            .get_json(&["tops", "last"], &params, CacheMode::Bypass)
            .await?;
        let trades: Vec<wire::LastTrade> = serde_json::from_value(body)?;
        out.extend(
            trades
                .into_iter()
                .filter_map(|t| Some((t.symbol.to_uppercase(), t.price?))),
        );
    }

    Ok(out)
}

/// Builder for batch quote snapshots.
pub struct QuotesBuilder {
    client: IexClient,
    symbols: Vec<String>,
}

impl QuotesBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(client: &IexClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
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

    /// Add a single symbol.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Execute the request and return the quotes keyed by symbol (one per symbol found).
    ///
    /// # Errors
    ///
    /// Returns an error if any batch request fails or returns malformed data.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(requested = self.symbols.len())))]
    pub async fn fetch(self) -> Result<BTreeMap<String, Quote>, IexError> {
        let symbols = self.client.symbols().normalize(&self.symbols);
        let raw = fetch_batch(&self.client, &symbols, "quote", &[], CacheMode::Bypass).await?;

        raw.into_iter()
            .map(|(symbol, node)| -> Result<(String, Quote), IexError> {
                let node: wire::QuoteNode = serde_json::from_value(node)?;
                let quote = model::from_node(&symbol, node);
                Ok((symbol, quote))
            })
            .collect()
    }
}
