use httpmock::Method::GET;
use iex_rs::{IexError, Ticker};
use serde_json::json;

use crate::common::{client_for, quote_node, setup_server};

#[tokio::test]
async fn ticker_resolves_lowercase_symbols() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("symbols", "AAPL")
            .query_param("types", "quote");
        then.status(200)
            .json_body(json!({"AAPL": {"quote": quote_node("AAPL", 155.47)}}));
    });

    let ticker = Ticker::new(&client, "aapl");

    assert_eq!(ticker.symbol().as_deref(), Some("AAPL"));
    assert_eq!(ticker.name().unwrap(), "Apple Inc.");
    let quote = ticker.quote().await.unwrap();
    mock.assert();
    assert_eq!(quote.symbol, "AAPL");
}

#[tokio::test]
async fn ticker_price() {
    let server = setup_server();
    let client = client_for(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/tops/last").query_param("symbols", "FB");
        then.status(200)
            .json_body(json!([{"symbol": "FB", "price": 171.0, "size": 5, "time": 0}]));
    });

    let price = Ticker::new(&client, "fb").price().await.unwrap();

    assert!((price - 171.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn unknown_ticker_fails_before_any_request() {
    let server = setup_server();
    let client = client_for(&server).await;
    let ticker = Ticker::new(&client, "ZZZZZZ");

    assert!(ticker.symbol().is_none());
    assert!(matches!(ticker.name(), Err(IexError::InvalidArgument(_))));
    assert!(matches!(ticker.quote().await, Err(IexError::InvalidArgument(_))));
    assert!(matches!(ticker.company().await, Err(IexError::InvalidArgument(_))));
    assert!(matches!(ticker.news().await, Err(IexError::InvalidArgument(_))));
    assert!(matches!(ticker.chart("1m").await, Err(IexError::InvalidArgument(_))));
    assert!(matches!(ticker.financials().await, Err(IexError::InvalidArgument(_))));
}

#[tokio::test]
async fn quote_missing_from_response_is_a_data_error() {
    let server = setup_server();
    let client = client_for(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/stock/market/batch");
        then.status(200).json_body(json!({}));
    });

    let err = Ticker::new(&client, "goog").quote().await.unwrap_err();

    assert!(matches!(err, IexError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn financials_missing_from_response_is_a_data_error() {
    let server = setup_server();
    let client = client_for(&server).await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("types", "financials");
        then.status(200).json_body(json!({"GOOG": {"financials": null}}));
    });

    let err = Ticker::new(&client, "goog").financials().await.unwrap_err();

    assert!(matches!(err, IexError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_financials_are_not_an_error() {
    let server = setup_server();
    let client = client_for(&server).await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("types", "financials");
        then.status(200)
            .json_body(json!({"MSFT": {"financials": {"symbol": "MSFT", "financials": []}}}));
    });

    let reports = Ticker::new(&client, "msft").financials().await.unwrap();

    assert!(reports.is_empty());
}
