use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsNode {
    #[serde(default)]
    pub(crate) datetime: Option<RawTimestamp>,
    #[serde(default)]
    pub(crate) headline: Option<String>,
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    // Comma separated tags: tickers mixed with sector names and internal ids.
    #[serde(default)]
    pub(crate) related: Option<String>,
}

/// The legacy API sends ISO-8601 strings, the cloud API epoch milliseconds.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTimestamp {
    Millis(i64),
    Text(String),
}
