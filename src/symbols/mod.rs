//! The directory of ticker symbols the exchange knows about.
//!
//! Every user-supplied symbol passes through here before a request is built: symbols are
//! upper-cased and anything the directory does not contain is silently dropped.

mod wire;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::core::client::SYMBOLS_CACHE_KEY;
use crate::core::{IexClient, IexError};

/// A symbol paired with a display label of the form `"<symbol> - <name>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolLabel {
    /// The canonical (upper-case) ticker symbol.
    pub symbol: String,
    /// Human readable label, e.g. `"AAPL - Apple Inc."`.
    pub label: String,
}

/// Mapping of canonical ticker symbols to company names.
///
/// Loaded once per client and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolDirectory {
    entries: BTreeMap<String, String>,
}

fn canonical(symbol: &str) -> Option<String> {
    let s = symbol.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_uppercase())
    }
}

impl SymbolDirectory {
    /// Builds a directory from `(symbol, name)` pairs. Symbols are upper-cased.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(k, v)| canonical(k.as_ref()).map(|k| (k, v.into())))
            .collect();
        Self { entries }
    }

    /// Number of known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no symbols are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `symbol` (in any case) is known.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        canonical(symbol).is_some_and(|s| self.entries.contains_key(&s))
    }

    /// Iterates over `(symbol, name)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Upper-cases every input and keeps only the symbols present in the directory.
    ///
    /// Unknown symbols are dropped without error; an empty or all-unknown input yields an
    /// empty set.
    pub fn normalize<I, S>(&self, symbols: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols
            .into_iter()
            .filter_map(|s| canonical(s.as_ref()))
            .filter(|s| self.entries.contains_key(s))
            .collect()
    }

    /// Company names for the known symbols among `symbols`.
    pub fn name_of<I, S>(&self, symbols: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.normalize(symbols)
            .into_iter()
            .filter_map(|s| {
                let name = self.entries.get(&s)?.clone();
                Some((s, name))
            })
            .collect()
    }

    /// Case-insensitive substring search over both symbols and company names.
    pub fn search(&self, text: &str) -> BTreeMap<String, String> {
        let needle = text.trim().to_lowercase();
        let found: BTreeMap<String, String> = self
            .entries
            .iter()
            .filter(|(sym, name)| {
                sym.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if found.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(query = text, "no symbols matched");
        }
        found
    }

    /// Every known symbol with a `"<symbol> - <name>"` label, in symbol order.
    #[must_use]
    pub fn all(&self) -> Vec<SymbolLabel> {
        self.entries
            .iter()
            .map(|(symbol, name)| SymbolLabel {
                symbol: symbol.clone(),
                label: format!("{symbol} - {name}"),
            })
            .collect()
    }

    /// Canonical form of a single symbol, for operations that need exactly one.
    pub(crate) fn resolve(&self, symbol: &str) -> Result<String, IexError> {
        self.normalize([symbol])
            .into_iter()
            .next()
            .ok_or_else(|| IexError::InvalidArgument(format!("unknown symbol: {symbol}")))
    }

    /// Populates the directory from the cache, or from `ref-data/symbols` on a miss.
    pub(crate) async fn load(client: &IexClient, ttl: Duration) -> Result<Self, IexError> {
        let cache = client.cache();

        if let Some(hit) = cache.get(SYMBOLS_CACHE_KEY).await {
            match serde_json::from_value::<BTreeMap<String, String>>(hit) {
                Ok(map) if !map.is_empty() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(count = map.len(), "symbol directory from cache");
                    return Ok(Self::from_entries(map));
                }
                Ok(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("cached symbol directory is empty, refetching");
                }
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %_e, "cached symbol directory unreadable, refetching");
                }
            }
        }

        let mut url = client.endpoint(&["ref-data", "symbols"])?;
        url.query_pairs_mut().append_pair("filter", "symbol,name");
        let raw = client.send_json(url).await?;

        let rows: Vec<wire::SymbolRow> = serde_json::from_value(raw)?;
        let directory = Self::from_entries(
            rows.into_iter()
                .filter_map(|r| Some((r.symbol?, r.name.unwrap_or_default()))),
        );

        cache
            .set(SYMBOLS_CACHE_KEY, &serde_json::to_value(&directory.entries)?, ttl)
            .await;
        Ok(directory)
    }
}
