use httpmock::Method::GET;
use serde_json::json;

use crate::common::{client_for, quote_node, setup_server};

#[tokio::test]
async fn quotes_batch_known_symbols_only() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("symbols", "AAPL,FB")
            .query_param("types", "quote");
        then.status(200).json_body(json!({
            "AAPL": {"quote": quote_node("AAPL", 155.47)},
            "FB": {"quote": quote_node("FB", 171.0)}
        }));
    });

    let quotes = iex_rs::quotes(&client, ["aapl", "fb", "zzaa"]).await.unwrap();

    mock.assert();
    assert_eq!(quotes.len(), 2);
    assert!(!quotes.contains_key("ZZAA"));
    let aapl = &quotes["AAPL"];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.latest_price, Some(155.47));
    assert_eq!(aapl.latest_volume, Some(20_567_140));
    assert_eq!(aapl.company_name.as_deref(), Some("AAPL Corp"));
    assert_eq!(
        aapl.latest_update.map(|t| t.timestamp()),
        Some(1_502_914_200)
    );
}

#[tokio::test]
async fn quotes_are_never_cached() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("types", "quote");
        then.status(200)
            .json_body(json!({"MSFT": {"quote": quote_node("MSFT", 72.5)}}));
    });

    iex_rs::quotes(&client, ["msft"]).await.unwrap();
    iex_rs::quotes(&client, ["msft"]).await.unwrap();

    mock.assert_calls(2);
}

#[tokio::test]
async fn unknown_symbols_make_no_request() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/market/batch");
        then.status(500);
    });

    let quotes = iex_rs::quotes(&client, ["zzzz", "qqqqqq"]).await.unwrap();
    let prices = iex_rs::prices(&client, Vec::<String>::new()).await.unwrap();

    mock.assert_calls(0);
    assert!(quotes.is_empty());
    assert!(prices.is_empty());
}

#[tokio::test]
async fn missing_quote_entries_are_left_out() {
    let server = setup_server();
    let client = client_for(&server).await;
    server.mock(|when, then| {
        when.method(GET).path("/stock/market/batch");
        then.status(200).json_body(json!({
            "AAPL": {"quote": quote_node("AAPL", 1.0)},
            "GOOG": {"quote": null}
        }));
    });

    let quotes = iex_rs::quotes(&client, ["aapl", "goog"]).await.unwrap();

    assert_eq!(quotes.keys().collect::<Vec<_>>(), ["AAPL"]);
}

#[tokio::test]
async fn prices_come_from_last_trades() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tops/last")
            .query_param("symbols", "AAPL,MSFT");
        then.status(200).json_body(json!([
            {"symbol": "AAPL", "price": 155.47, "size": 100, "time": 1_502_914_200_000_i64},
            {"symbol": "MSFT", "price": 72.5, "size": 10, "time": 1_502_914_200_000_i64}
        ]));
    });

    let prices = iex_rs::prices(&client, ["msft", "aapl", "nope"]).await.unwrap();
    iex_rs::prices(&client, ["msft", "aapl"]).await.unwrap();

    mock.assert_calls(2);
    assert_eq!(prices.len(), 2);
    assert!((prices["AAPL"] - 155.47).abs() < f64::EPSILON);
}
