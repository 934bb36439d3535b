//! The cached GET-and-decode primitive every endpoint is built on.

use serde_json::Value;
use url::Url;

use crate::core::{CacheMode, IexClient, IexError};

/// Builds a deterministic cache key from an endpoint URL and its query parameters.
///
/// Parameters are sorted by name (then value) so that the same logical request always maps to
/// the same key whatever order the parameters were supplied in.
pub(crate) fn cache_key(endpoint: &Url, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return endpoint.as_str().to_string();
    }
    let mut sorted: Vec<_> = params.iter().collect();
    sorted.sort();
    let query = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{query}", endpoint.as_str())
}

impl IexClient {
    /// Joins `segments` onto the API root, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, IexError> {
        let mut url = self.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| IexError::Data("base URL cannot carry path segments".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs `segments` with `params`, decoding the JSON body, consulting and filling the cache
    /// according to `cache_mode`.
    pub(crate) async fn get_json(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
        cache_mode: CacheMode,
    ) -> Result<Value, IexError> {
        let endpoint = self.endpoint(segments)?;
        let key = cache_key(&endpoint, params);

        if cache_mode == CacheMode::Use
            && let Some(hit) = self.cache().get(&key).await
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %key, "cache hit");
            return Ok(hit);
        }

        let mut url = endpoint;
        if !params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
        }
        let value = self.send_json(url).await?;

        if cache_mode != CacheMode::Bypass {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %key, "cache store");
            self.cache().set(&key, &value, self.cache_ttl()).await;
        }
        Ok(value)
    }

    /// Issues one GET against `url` (token appended) and decodes the body as JSON.
    ///
    /// Non-success statuses become errors carrying the status and body. Reported URLs never
    /// include the token.
    pub(crate) async fn send_json(&self, url: Url) -> Result<Value, IexError> {
        let shown = url.to_string();
        let mut url = url;
        if let Some(token) = self.token() {
            url.query_pairs_mut().append_pair("token", token);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %shown, "GET");
        let resp = self
            .http()
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(IexError::from_status(status.as_u16(), shown, body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}
