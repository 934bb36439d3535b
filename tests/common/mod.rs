#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use iex_rs::{Cache, IexClient, IexClientBuilder};
use serde_json::{Value, json};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn symbol_rows() -> Value {
    json!([
        {"symbol": "AAPL", "name": "Apple Inc."},
        {"symbol": "BAC", "name": "Bank of America Corporation"},
        {"symbol": "FB", "name": "Facebook Inc."},
        {"symbol": "GOOG", "name": "Alphabet Inc."},
        {"symbol": "MSFT", "name": "Microsoft Corporation"},
        {"symbol": "PINE", "name": "Pineapple Holdings"}
    ])
}

pub fn mock_symbols(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/ref-data/symbols")
            .query_param("filter", "symbol,name");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(symbol_rows());
    })
}

pub fn builder_for(server: &MockServer) -> IexClientBuilder {
    IexClient::builder().base_url(Url::parse(&server.base_url()).unwrap())
}

/// A client against `server` with a fresh in-memory cache. Mocks the symbol list.
pub async fn client_for(server: &MockServer) -> IexClient {
    let _symbols = mock_symbols(server);
    builder_for(server).cache(Cache::memory()).build().await.unwrap()
}

pub fn quote_node(symbol: &str, price: f64) -> Value {
    json!({
        "symbol": symbol,
        "companyName": format!("{symbol} Corp"),
        "primaryExchange": "NASDAQ",
        "latestPrice": price,
        "change": 1.25,
        "changePercent": 0.0081,
        "latestVolume": 20_567_140,
        "previousClose": price - 1.25,
        "marketCap": 812_000_000_000.0_f64,
        "peRatio": 17.8,
        "week52High": 160.0,
        "week52Low": 104.08,
        "latestUpdate": 1_502_914_200_000_i64
    })
}

pub fn article(headline: &str, datetime: &str, related: &str) -> Value {
    json!({
        "datetime": datetime,
        "headline": headline,
        "source": "SeekingAlpha",
        "url": format!("https://example.com/{}", headline.replace(' ', "-")),
        "summary": "No summary available.",
        "related": related
    })
}
