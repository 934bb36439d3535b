use httpmock::Method::GET;
use iex_rs::{Cache, CacheMode, Ticker};
use serde_json::json;

use crate::common::{builder_for, client_for, mock_symbols, setup_server};

fn company_body() -> serde_json::Value {
    json!({
        "AAPL": {"company": {
            "symbol": "AAPL",
            "companyName": "Apple Inc.",
            "exchange": "Nasdaq Global Select",
            "industry": "Computer Hardware",
            "website": "http://www.apple.com",
            "description": "Apple Inc is designs, manufactures and markets mobile communication and media devices.",
            "CEO": "Timothy D. Cook",
            "issueType": "cs",
            "sector": "Technology",
            "tags": ["Technology", "Consumer Electronics"]
        }}
    })
}

#[tokio::test]
async fn company_is_parsed_and_cached() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("symbols", "AAPL")
            .query_param("types", "company");
        then.status(200).json_body(company_body());
    });

    let first = iex_rs::companies(&client, ["aapl"]).await.unwrap();
    let second = iex_rs::companies(&client, ["AAPL"]).await.unwrap();

    mock.assert_calls(1);
    assert_eq!(first, second);
    let apple = &first["AAPL"];
    assert_eq!(apple.ceo.as_deref(), Some("Timothy D. Cook"));
    assert_eq!(apple.issue_type.as_deref(), Some("cs"));
    assert_eq!(apple.tags.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn cache_key_is_the_url_and_sorted_params_without_token() {
    let server = setup_server();
    let _symbols = mock_symbols(&server);
    let cache = Cache::memory();
    let client = builder_for(&server)
        .token("pk_secret")
        .cache(cache.clone())
        .build()
        .await
        .unwrap();
    server.mock(|when, then| {
        when.method(GET).path("/stock/market/batch");
        then.status(200).json_body(company_body());
    });

    iex_rs::companies(&client, ["aapl"]).await.unwrap();

    let key = format!(
        "{}/stock/market/batch?symbols=AAPL&types=company",
        server.base_url()
    );
    assert_eq!(cache.get(&key).await, Some(company_body()));
}

#[tokio::test]
async fn refresh_and_bypass_modes() {
    let server = setup_server();
    let client = client_for(&server).await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stock/market/batch")
            .query_param("types", "company");
        then.status(200).json_body(company_body());
    });

    let ticker = Ticker::new(&client, "aapl");
    ticker.company().await.unwrap();
    mock.assert_calls(1);

    // Refresh skips the read but rewrites the entry.
    Ticker::new(&client, "aapl")
        .cache_mode(CacheMode::Refresh)
        .company()
        .await
        .unwrap();
    mock.assert_calls(2);

    ticker.company().await.unwrap();
    mock.assert_calls(2);

    // Bypass neither reads nor writes.
    Ticker::new(&client, "aapl")
        .cache_mode(CacheMode::Bypass)
        .company()
        .await
        .unwrap();
    mock.assert_calls(3);
}
