mod model;

pub use model::Company;

use std::collections::BTreeMap;

use crate::core::batch::fetch_batch;
use crate::core::{CacheMode, IexClient, IexError};

/// Fetch company information for several symbols in one batch request.
///
/// Unknown symbols are dropped. Responses are cached.
///
/// # Errors
///
/// Returns an error if the request fails or returns malformed data.
pub async fn companies<I, S>(
    client: &IexClient,
    symbols: I,
) -> Result<BTreeMap<String, Company>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fetch_companies(client, symbols, CacheMode::Use).await
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub(crate) async fn fetch_companies<I, S>(
    client: &IexClient,
    symbols: I,
    cache_mode: CacheMode,
) -> Result<BTreeMap<String, Company>, IexError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symbols = client.symbols().normalize(symbols);
    let raw = fetch_batch(client, &symbols, "company", &[], cache_mode).await?;

    let mut out = BTreeMap::new();
    for (symbol, node) in raw {
        out.insert(symbol, serde_json::from_value(node)?);
    }
    Ok(out)
}
