//! OHLC chart data for a single symbol.

mod model;
mod range;
mod wire;

pub use model::{ChartPoint, Ohlc};
pub use range::ChartRange;

use crate::core::{CacheMode, IexClient, IexError};

/// Fetch chart rows for `symbol` over `range` (e.g. `"1m"`, `"ytd"`).
///
/// The range is validated before anything else, then the symbol; neither check touches the
/// network.
///
/// # Errors
///
/// Returns [`IexError::InvalidRange`] for an unsupported range, [`IexError::InvalidArgument`]
/// for an unknown symbol, or any request error.
pub async fn chart(client: &IexClient, symbol: &str, range: &str) -> Result<Vec<ChartPoint>, IexError> {
    let range: ChartRange = range.parse()?;
    fetch_chart(client, symbol, range, CacheMode::Use).await
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub(crate) async fn fetch_chart(
    client: &IexClient,
    symbol: &str,
    range: ChartRange,
    cache_mode: CacheMode,
) -> Result<Vec<ChartPoint>, IexError> {
    let symbol = client.symbols().resolve(symbol)?;
    let body = client
        .get_json(&["stock", &symbol, "chart", range.as_str()], &[], cache_mode)
        .await?;
    let nodes: Vec<wire::ChartNode> = serde_json::from_value(body)?;
    Ok(model::shape(range, nodes))
}
