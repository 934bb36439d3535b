use serde::Deserialize;

/// One point of `/stock/{symbol}/chart/{range}`. Intraday points carry `minute`, `label` and
/// `average`; daily points carry `date` and OHLC values.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartNode {
    #[serde(default)]
    pub(crate) date: Option<String>,
    #[serde(default)]
    pub(crate) minute: Option<String>,
    #[serde(default)]
    pub(crate) label: Option<String>,
    #[serde(default)]
    pub(crate) average: Option<f64>,
    #[serde(default)]
    pub(crate) market_average: Option<f64>,
    #[serde(default)]
    pub(crate) open: Option<f64>,
    #[serde(default)]
    pub(crate) high: Option<f64>,
    #[serde(default)]
    pub(crate) low: Option<f64>,
    #[serde(default)]
    pub(crate) close: Option<f64>,
    #[serde(default)]
    pub(crate) vwap: Option<f64>,
}
