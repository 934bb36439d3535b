use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::{CacheMode, IexClient, IexError};

/// Most symbols the batch endpoint accepts in a single call.
pub(crate) const MAX_BATCH_SYMBOLS: usize = 100;

/// Fetches one data `kind` (`quote`, `company`, `financials`, ...) for `symbols` through
/// `stock/market/batch`, chunked to [`MAX_BATCH_SYMBOLS`] and issued sequentially.
///
/// Returns the `kind` sub-object of every symbol present in the responses. An empty symbol set
/// makes no request.
pub(crate) async fn fetch_batch(
    client: &IexClient,
    symbols: &BTreeSet<String>,
    kind: &str,
    extra: &[(&str, String)],
    cache_mode: CacheMode,
) -> Result<BTreeMap<String, Value>, IexError> {
    let all: Vec<&str> = symbols.iter().map(String::as_str).collect();
    let mut out = BTreeMap::new();

    for chunk in all.chunks(MAX_BATCH_SYMBOLS) {
        let mut params = vec![("symbols", chunk.join(",")), ("types", kind.to_string())];
        params.extend(extra.iter().cloned());

        let body = client
            .get_json(&["stock", "market", "batch"], &params, cache_mode)
            .await?;
        let Value::Object(by_symbol) = body else {
            return Err(IexError::Data(format!("batch {kind}: expected an object")));
        };

        for (symbol, mut node) in by_symbol {
            if let Some(inner) = node.get_mut(kind).map(Value::take)
                && !inner.is_null()
            {
                out.insert(symbol.to_uppercase(), inner);
            }
        }
    }

    Ok(out)
}
