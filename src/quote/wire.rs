use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteNode {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    pub(crate) company_name: Option<String>,
    pub(crate) primary_exchange: Option<String>,
    pub(crate) latest_price: Option<f64>,
    pub(crate) change: Option<f64>,
    pub(crate) change_percent: Option<f64>,
    pub(crate) latest_volume: Option<f64>,
    pub(crate) previous_close: Option<f64>,
    pub(crate) market_cap: Option<f64>,
    pub(crate) pe_ratio: Option<f64>,
    pub(crate) week52_high: Option<f64>,
    pub(crate) week52_low: Option<f64>,
    /// Epoch milliseconds.
    pub(crate) latest_update: Option<i64>,
}

/* ------------- /tops/last ------------- */

#[derive(Deserialize)]
pub(crate) struct LastTrade {
    pub(crate) symbol: String,
    pub(crate) price: Option<f64>,
}
