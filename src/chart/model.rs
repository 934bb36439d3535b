use chrono::NaiveDate;
use serde::Serialize;

use super::ChartRange;
use super::wire::ChartNode;

/// Open, high, low and close prices of one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlc {
    /// Mean of the four prices.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }
}

/// One row of chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Display label: the minute label for intraday data, `MM/DD` for ranges within a year,
    /// `YYYY-MM-DD` otherwise.
    pub label: String,
    /// Average price over the interval.
    pub average: f64,
    /// Interval prices; `None` for intraday points.
    pub ohlc: Option<Ohlc>,
}

/// Turns raw chart nodes into rows for `range`.
///
/// Intraday data is sampled at minutes ending in 0 or 5 and points without a positive average
/// are skipped. Daily data keeps every point that has a date and all four prices.
pub(crate) fn shape(range: ChartRange, nodes: Vec<ChartNode>) -> Vec<ChartPoint> {
    if range.is_intraday() {
        nodes.into_iter().filter_map(intraday_point).collect()
    } else {
        nodes
            .into_iter()
            .filter_map(|n| daily_point(range, n))
            .collect()
    }
}

fn intraday_point(node: ChartNode) -> Option<ChartPoint> {
    let minute = node.minute?;
    if !minute.trim_end().ends_with(['0', '5']) {
        return None;
    }
    let average = node
        .average
        .filter(|a| *a > 0.0)
        .or(node.market_average.filter(|a| *a > 0.0))?;
    Some(ChartPoint {
        label: node.label.unwrap_or(minute),
        average,
        ohlc: None,
    })
}

fn daily_point(range: ChartRange, node: ChartNode) -> Option<ChartPoint> {
    let date = NaiveDate::parse_from_str(node.date.as_deref()?, "%Y-%m-%d").ok()?;
    let ohlc = Ohlc {
        open: node.open?,
        high: node.high?,
        low: node.low?,
        close: node.close?,
    };
    let label = if range.is_short() {
        date.format("%m/%d").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    };
    Some(ChartPoint {
        label,
        average: node.vwap.filter(|v| *v > 0.0).unwrap_or_else(|| ohlc.mean()),
        ohlc: Some(ohlc),
    })
}
