//! Behavior tests for the Yahoo provider's upstream handling.
//!
//! A scripted transport stands in for Yahoo so these run offline; each test
//! reads as given/when/then against the requests the provider actually sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alpaca_core::http_client::HttpFuture;
use alpaca_core::{
    CircuitState, DateRange, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    MarketDataProvider, NewsRequest, PriceRequest, RetryConfig, SourceErrorKind, Symbol,
    YahooProvider, YahooProviderBuilder,
};
use serde_json::{json, Value};
use time::macros::date;

type Scripted = Result<HttpResponse, HttpError>;

/// Answers by URL fragment; the last scripted response for a route repeats.
#[derive(Default)]
struct ScriptedHttpClient {
    routes: Mutex<Vec<(&'static str, VecDeque<Scripted>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn with_crumb() -> Self {
        Self::default()
            .route("fc.yahoo.com", vec![Ok(HttpResponse::new(404, "<html>"))])
            .route("getcrumb", vec![Ok(HttpResponse::ok_json("crumb123"))])
    }

    fn route(self, fragment: &'static str, responses: Vec<Scripted>) -> Self {
        self.routes
            .lock()
            .expect("routes lock")
            .push((fragment, responses.into()));
        self
    }

    fn requests_to(&self, fragment: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("requests lock")
            .iter()
            .filter(|request| request.url.contains(fragment))
            .cloned()
            .collect()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        let response = {
            let mut routes = self.routes.lock().expect("routes lock");
            routes
                .iter_mut()
                .find(|(fragment, _)| request.url.contains(fragment))
                .and_then(|(_, queue)| {
                    if queue.len() > 1 {
                        queue.pop_front()
                    } else {
                        queue.front().cloned()
                    }
                })
                .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
        };
        self.requests.lock().expect("requests lock").push(request);
        Box::pin(async move { response })
    }
}

fn provider(client: &Arc<ScriptedHttpClient>) -> YahooProviderBuilder {
    YahooProvider::builder()
        .with_http_client(client.clone())
        .with_retry(RetryConfig::no_retry())
        .with_requests_per_second(1_000)
}

fn january() -> DateRange {
    DateRange::new(date!(2024 - 01 - 01), date!(2024 - 02 - 01)).expect("valid range")
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn chart_body(symbol: &str) -> String {
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": symbol, "gmtoffset": -18000 },
                // 2024-01-02, -03 and -04 at 14:30 UTC.
                "timestamp": [1704205800, 1704292200, 1704378600],
                "indicators": {
                    "quote": [{
                        "open": [185.0, 184.0, 182.0],
                        "high": [186.0, 185.0, 183.0],
                        "low": [183.0, 182.5, 180.9],
                        "close": [185.6, 184.2, 181.9],
                        "volume": [82488700, 58414500, 71983600]
                    }],
                    "adjclose": [{ "adjclose": [185.6, 184.2, 181.9] }]
                }
            }],
            "error": null
        }
    })
    .to_string()
}

fn chart_ok(symbol: &str) -> Scripted {
    Ok(HttpResponse::ok_json(chart_body(symbol)))
}

#[tokio::test]
async fn when_chart_is_returned_provider_builds_daily_series_with_crumb() {
    // Given: Yahoo answers the handshake and the chart call
    let client = Arc::new(
        ScriptedHttpClient::with_crumb().route("/v8/finance/chart", vec![chart_ok("AAPL")]),
    );
    let yahoo = provider(&client).build();

    // When: Prices are fetched for January
    let series = yahoo
        .fetch_prices(PriceRequest::new(symbol("aapl"), january()))
        .await
        .expect("prices");

    // Then: Three exchange-local daily bars come back
    assert_eq!(series.len(), 3);
    assert_eq!(series.bars()[0].date, date!(2024 - 01 - 02));
    assert_eq!(series.last_close(), Some(181.9));

    // And: The request carries the window, daily interval and crumb
    let chart_requests = client.requests_to("/v8/finance/chart");
    assert_eq!(chart_requests.len(), 1);
    let url = &chart_requests[0].url;
    assert!(url.contains("/AAPL?period1=1704067200&period2=1706745600"), "url={url}");
    assert!(url.contains("interval=1d"));
    assert!(url.contains("crumb=crumb123"));
    assert_eq!(
        chart_requests[0].headers.get("referer").map(String::as_str),
        Some("https://finance.yahoo.com/")
    );
}

#[tokio::test]
async fn when_symbol_is_an_index_caret_is_url_encoded() {
    let client = Arc::new(
        ScriptedHttpClient::with_crumb().route("/v8/finance/chart", vec![chart_ok("^GSPC")]),
    );
    let yahoo = provider(&client).build();

    yahoo
        .fetch_prices(PriceRequest::new(symbol("^GSPC"), january()))
        .await
        .expect("prices");

    let url = &client.requests_to("/v8/finance/chart")[0].url;
    assert!(url.contains("/chart/%5EGSPC?"), "url={url}");
}

#[tokio::test]
async fn when_symbol_is_unknown_provider_returns_empty_series() {
    // Given: Yahoo reports the symbol as not found
    let not_found = json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
        }
    })
    .to_string();
    let client = Arc::new(
        ScriptedHttpClient::with_crumb()
            .route("/v8/finance/chart", vec![Ok(HttpResponse::new(404, not_found))]),
    );
    let yahoo = provider(&client).build();

    // When / Then: The result is an empty series, not an error
    let series = yahoo
        .fetch_prices(PriceRequest::new(symbol("ZZZZ9"), january()))
        .await
        .expect("unknown symbol is not an error");
    assert!(series.is_empty());
}

#[tokio::test]
async fn when_crumb_is_rejected_provider_refreshes_once_and_reissues() {
    // Given: The first chart call is rejected as unauthorized
    let client = Arc::new(ScriptedHttpClient::with_crumb().route(
        "/v8/finance/chart",
        vec![Ok(HttpResponse::new(401, "Unauthorized")), chart_ok("AAPL")],
    ));
    let yahoo = provider(&client).build();

    // When: Prices are fetched
    let series = yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("prices after refresh");

    // Then: The crumb was fetched twice and the chart call re-issued once
    assert_eq!(series.len(), 3);
    assert_eq!(client.requests_to("getcrumb").len(), 2);
    assert_eq!(client.requests_to("/v8/finance/chart").len(), 2);
}

#[tokio::test]
async fn when_upstream_is_briefly_unavailable_provider_retries() {
    // Given: One 503 before a good answer, and a retry budget
    let client = Arc::new(ScriptedHttpClient::with_crumb().route(
        "/v8/finance/chart",
        vec![Ok(HttpResponse::new(503, "busy")), chart_ok("AAPL")],
    ));
    let yahoo = provider(&client)
        .with_retry(RetryConfig::fixed(Duration::ZERO, 2))
        .build();

    // When / Then: The fetch succeeds on the second attempt
    let series = yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("retried");
    assert_eq!(series.len(), 3);
    assert_eq!(client.requests_to("/v8/finance/chart").len(), 2);
}

#[tokio::test]
async fn when_upstream_keeps_failing_circuit_breaker_stops_calls() {
    // Given: Every chart call fails with a server error
    let client = Arc::new(
        ScriptedHttpClient::with_crumb()
            .route("/v8/finance/chart", vec![Ok(HttpResponse::new(500, "boom"))]),
    );
    let yahoo = provider(&client).build();
    let request = PriceRequest::new(symbol("MSFT"), january());

    // When: Three calls fail
    for _ in 0..3 {
        let error = yahoo
            .fetch_prices(request.clone())
            .await
            .expect_err("server error");
        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
        assert!(error.message().contains("status 500"));
    }

    // Then: The next call is rejected without reaching Yahoo
    let error = yahoo.fetch_prices(request).await.expect_err("breaker open");
    assert!(error.message().contains("circuit breaker is open"));
    assert_eq!(yahoo.circuit_breaker().state(), CircuitState::Open);
    assert_eq!(client.requests_to("/v8/finance/chart").len(), 3);
}

#[tokio::test]
async fn when_transport_fails_error_is_unavailable() {
    let client = Arc::new(ScriptedHttpClient::with_crumb().route(
        "/v8/finance/chart",
        vec![Err(HttpError::new("connection reset"))],
    ));
    let yahoo = provider(&client).build();

    let error = yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect_err("transport failure");
    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert!(error.retryable());
}

#[tokio::test]
async fn when_crumb_cannot_be_obtained_fetch_fails() {
    let client = Arc::new(
        ScriptedHttpClient::default()
            .route("getcrumb", vec![Ok(HttpResponse::new(200, "<html>blocked</html>"))]),
    );
    let yahoo = provider(&client).build();

    let error = yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect_err("no crumb");
    assert!(error.message().contains("crumb"));
    assert!(client.requests_to("/v8/finance/chart").is_empty());
}

#[tokio::test]
async fn when_news_is_requested_provider_posts_service_config_and_drops_ads() {
    // Given: A stream with an advertisement between two articles
    let stream = json!({
        "data": { "tickerStream": { "stream": [
            { "id": "a", "content": { "title": "First" } },
            { "id": "ad", "ad": ["sponsor"], "content": { "title": "Buy now" } },
            { "id": "b", "content": { "title": "Second" } },
            { "id": "c", "content": { "title": "Third" } }
        ] } }
    })
    .to_string();
    let client = Arc::new(
        ScriptedHttpClient::with_crumb().route("/xhr/ncp", vec![Ok(HttpResponse::ok_json(stream))]),
    );
    let yahoo = provider(&client).build();

    // When: Two records are requested
    let records = yahoo
        .fetch_news(NewsRequest::new(symbol("tsla"), 2).expect("valid"))
        .await
        .expect("news");

    // Then: The first two non-ad records come back raw
    let titles: Vec<&str> = records
        .iter()
        .filter_map(|record| record.string_at("/content/title"))
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    // And: The POST body names the symbol
    let news_requests = client.requests_to("/xhr/ncp");
    assert_eq!(news_requests[0].method, HttpMethod::Post);
    let body: Value =
        serde_json::from_str(news_requests[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body["serviceConfig"]["s"], json!(["TSLA"]));
    assert!(news_requests[0].url.contains("queryRef=latestNews"));
}

#[tokio::test]
async fn when_cookie_is_preissued_session_fetch_is_skipped() {
    let client = Arc::new(
        ScriptedHttpClient::with_crumb().route("/v8/finance/chart", vec![chart_ok("AAPL")]),
    );
    let yahoo = provider(&client).with_cookie("A3=session").build();

    yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("prices");

    assert!(client.requests_to("fc.yahoo.com").is_empty());
    let chart = &client.requests_to("/v8/finance/chart")[0];
    assert_eq!(chart.headers.get("cookie").map(String::as_str), Some("A3=session"));
}

#[tokio::test]
async fn when_adjustment_is_disabled_raw_closes_are_kept() {
    let body = json!({
        "chart": { "result": [{
            "meta": { "symbol": "AAPL", "gmtoffset": 0 },
            "timestamp": [1704205800],
            "indicators": {
                "quote": [{ "open": [10.0], "high": [10.0], "low": [10.0], "close": [10.0], "volume": [1] }],
                "adjclose": [{ "adjclose": [5.0] }]
            }
        }], "error": null }
    })
    .to_string();
    let client = Arc::new(
        ScriptedHttpClient::with_crumb()
            .route("/v8/finance/chart", vec![Ok(HttpResponse::ok_json(body))]),
    );

    let raw = provider(&client).with_adjusted_prices(false).build();
    let series = raw
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("prices");
    assert_eq!(series.last_close(), Some(10.0));

    let adjusted = provider(&client).build();
    let series = adjusted
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("prices");
    assert_eq!(series.last_close(), Some(5.0));
}

#[tokio::test]
async fn mock_provider_serves_deterministic_offline_data() {
    let yahoo = YahooProvider::default();
    assert!(yahoo.is_mock());

    let series = yahoo
        .fetch_prices(PriceRequest::new(symbol("AAPL"), january()))
        .await
        .expect("mock prices");
    let news = yahoo
        .fetch_news(NewsRequest::new(symbol("AAPL"), 3).expect("valid"))
        .await
        .expect("mock news");

    // January 2024 has 23 weekdays.
    assert_eq!(series.len(), 23);
    assert_eq!(news.len(), 3);
    assert!(news[2].as_value()["content"].is_null());
}
