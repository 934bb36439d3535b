use crate::{
    core::{CacheMode, IexClient, IexError},
    news::{model::NewsItem, wire},
};

/// Fetches the last `count` articles for one canonical symbol.
///
/// Articles that cannot be parsed are skipped.
pub(super) async fn fetch_news(
    client: &IexClient,
    symbol: &str,
    count: u32,
    cache_mode: CacheMode,
) -> Result<Vec<NewsItem>, IexError> {
    let count = count.to_string();
    let body = client
        .get_json(&["stock", symbol, "news", "last", &count], &[], cache_mode)
        .await?;

    let nodes: Vec<wire::NewsNode> = serde_json::from_value(body)?;
    let items = nodes
        .into_iter()
        .filter_map(|node| match NewsItem::from_node(node) {
            Ok(item) => Some(item),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, error = %_e, "skipping malformed article");
                None
            }
        })
        .collect();

    Ok(items)
}
