use chrono::{DateTime, Utc};
use serde::Serialize;

use super::wire::QuoteNode;

/// A snapshot of current trading data for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// The ticker symbol.
    pub symbol: String,
    /// The company's display name.
    pub company_name: Option<String>,
    /// The primary listing exchange.
    pub primary_exchange: Option<String>,
    /// The most recent price.
    pub latest_price: Option<f64>,
    /// Change from the previous close.
    pub change: Option<f64>,
    /// Change from the previous close as a fraction (0.01 = 1%).
    pub change_percent: Option<f64>,
    /// Shares traded in the latest session.
    pub latest_volume: Option<u64>,
    /// Previous session's closing price.
    pub previous_close: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Price to earnings ratio.
    pub pe_ratio: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    /// When the quote was last updated.
    pub latest_update: Option<DateTime<Utc>>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn from_node(fallback_symbol: &str, n: QuoteNode) -> Quote {
    Quote {
        symbol: n.symbol.unwrap_or_else(|| fallback_symbol.to_string()),
        company_name: n.company_name,
        primary_exchange: n.primary_exchange,
        latest_price: n.latest_price,
        change: n.change,
        change_percent: n.change_percent,
        latest_volume: n.latest_volume.filter(|v| *v >= 0.0).map(|v| v as u64),
        previous_close: n.previous_close,
        market_cap: n.market_cap,
        pe_ratio: n.pe_ratio,
        week52_high: n.week52_high,
        week52_low: n.week52_low,
        latest_update: n.latest_update.and_then(DateTime::<Utc>::from_timestamp_millis),
    }
}
