use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use super::wire::{NewsNode, RawTimestamp};
use crate::core::IexError;

/// Tokens at least this many characters long are never treated as ticker symbols.
const MAX_SYMBOL_LEN: usize = 6;

/// One news article.
///
/// Every field takes part in equality, hashing and ordering. Items order by publish time
/// first, so a `BTreeSet<NewsItem>` iterates chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NewsItem {
    /// When the article was published.
    pub date_time: DateTime<Utc>,
    /// The headline of the article.
    pub headline: String,
    /// The publisher, e.g. `"SeekingAlpha"`.
    pub source: String,
    /// A direct link to the article.
    pub url: String,
    pub summary: String,
    /// Ticker symbols the article is tagged with.
    pub symbols: BTreeSet<String>,
}

impl NewsItem {
    /// Parses one raw article as returned by the news endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Json`] if the value is not an article record and [`IexError::Data`]
    /// if a required field is missing or the timestamp cannot be parsed.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, IexError> {
        let node: NewsNode = serde_json::from_value(value.clone())?;
        Self::from_node(node)
    }

    pub(crate) fn from_node(node: NewsNode) -> Result<Self, IexError> {
        let missing = |field: &str| IexError::Data(format!("news: missing {field}"));

        let date_time = match node.datetime.ok_or_else(|| missing("datetime"))? {
            RawTimestamp::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(ms)
                .ok_or_else(|| IexError::Data(format!("news: timestamp out of range: {ms}")))?,
            RawTimestamp::Text(s) => parse_timestamp(&s)?,
        };

        Ok(Self {
            date_time,
            headline: node.headline.ok_or_else(|| missing("headline"))?,
            source: node.source.unwrap_or_default(),
            url: node.url.ok_or_else(|| missing("url"))?,
            summary: node.summary.unwrap_or_default(),
            symbols: related_symbols(node.related.as_deref().unwrap_or_default()),
        })
    }

    /// An HTML anchor pointing at the article, e.g. `<a href="URL">HEADLINE</a>`.
    #[must_use]
    pub fn headline_link(&self) -> String {
        format!("<a href=\"{}\">{}</a>", self.url, self.headline)
    }
}

/// Extracts ticker symbols from a comma separated tag list.
///
/// Keeps tokens shorter than six characters that are entirely upper-case:
/// `"AAPL,Computer Hardware,CON31167138,F"` yields `{"AAPL", "F"}`.
#[must_use]
pub fn related_symbols(related: &str) -> BTreeSet<String> {
    related
        .split(',')
        .map(str::trim)
        .filter(|t| {
            !t.is_empty() && t.chars().count() < MAX_SYMBOL_LEN && t.to_uppercase() == *t
        })
        .map(str::to_string)
        .collect()
}

/// Parses an ISO-8601 timestamp. Offset-less values are taken as UTC.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, IexError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(IexError::Data(format!("news: unparseable timestamp: {s}")))
}
