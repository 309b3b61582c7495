use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::{json, Value};
use time::{Date, OffsetDateTime, Weekday};

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::data_source::{
    MarketDataProvider, NewsRequest, PriceRequest, ProviderFuture, SourceError,
};
use crate::http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient, DEFAULT_TIMEOUT_MS,
};
use crate::retry::RetryConfig;
use crate::throttling::RequestThrottle;
use crate::{DateRange, PriceBar, PriceSeries, RawNewsRecord, Symbol};

const PROVIDER: &str = "yahoo";
const REFERER: &str = "https://finance.yahoo.com/";
const COOKIE_URL: &str = "https://fc.yahoo.com";
const CRUMB_URLS: [&str; 2] = [
    "https://query1.finance.yahoo.com/v1/test/getcrumb",
    "https://query2.finance.yahoo.com/v1/test/getcrumb",
];
const CHART_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart";
const NEWS_URL: &str = "https://finance.yahoo.com/xhr/ncp?queryRef=latestNews&serviceKey=ncp_fin";
/// Snippets requested per news call; ads are filtered out before the limit applies.
const MIN_NEWS_SNIPPETS: usize = 10;

// ============================================================================
// Yahoo Auth Manager - cookie/crumb handshake
// ============================================================================

/// Caches the crumb token Yahoo expects on query endpoints.
///
/// The session cookie itself lives in the transport's cookie jar (or comes
/// from [`HttpAuth::Cookie`]); only the crumb is stored here.
#[derive(Debug)]
pub struct YahooAuthManager {
    crumb: Mutex<Option<(String, Instant)>>,
    refreshing: AtomicBool,
    ttl: Duration,
}

impl Default for YahooAuthManager {
    fn default() -> Self {
        Self {
            crumb: Mutex::new(None),
            refreshing: AtomicBool::new(false),
            ttl: Duration::from_secs(3600),
        }
    }
}

impl YahooAuthManager {
    fn cached(&self) -> Option<String> {
        let guard = self
            .crumb
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard
            .as_ref()
            .filter(|(_, fetched_at)| fetched_at.elapsed() < self.ttl)
            .map(|(crumb, _)| crumb.clone())
    }

    /// Returns a valid crumb, running the handshake when none is cached.
    pub async fn crumb(
        &self,
        http_client: &Arc<dyn HttpClient>,
        auth: &HttpAuth,
    ) -> Result<String, SourceError> {
        if let Some(crumb) = self.cached() {
            return Ok(crumb);
        }

        let _guard = match RefreshGuard::acquire(&self.refreshing) {
            Some(guard) => Some(guard),
            None => {
                // Another fetch is mid-handshake; give it a moment to land.
                tokio::time::sleep(Duration::from_millis(100)).await;
                if let Some(crumb) = self.cached() {
                    return Ok(crumb);
                }
                None
            }
        };

        self.handshake(http_client, auth).await
    }

    async fn handshake(
        &self,
        http_client: &Arc<dyn HttpClient>,
        auth: &HttpAuth,
    ) -> Result<String, SourceError> {
        tracing::debug!("refreshing yahoo crumb");

        // A pre-issued cookie replaces the session fetch. Otherwise the
        // response is usually a 404 page and only its Set-Cookie matters.
        if matches!(auth, HttpAuth::None) {
            let cookie_request = HttpRequest::get(COOKIE_URL).with_header("referer", REFERER);
            http_client.execute(cookie_request).await.map_err(|e| {
                SourceError::unavailable(format!(
                    "failed to fetch yahoo cookie: {}",
                    e.message()
                ))
            })?;
        }

        for endpoint in CRUMB_URLS {
            let crumb_request = HttpRequest::get(endpoint)
                .with_header("referer", REFERER)
                .with_auth(auth);

            let Ok(response) = http_client.execute(crumb_request).await else {
                continue;
            };
            if !response.is_success() {
                continue;
            }

            let body = response.body.trim();
            if body.contains("<html") || body.contains("<!DOCTYPE") {
                continue;
            }
            if body.to_ascii_lowercase().contains("too many requests") {
                return Err(SourceError::rate_limited(
                    "yahoo rate limited while fetching crumb",
                ));
            }
            if !body.is_empty() && body.len() < 100 && !body.contains(char::is_whitespace) {
                let crumb = body.to_owned();
                *self
                    .crumb
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) =
                    Some((crumb.clone(), Instant::now()));
                return Ok(crumb);
            }
        }

        Err(SourceError::unavailable(
            "failed to fetch yahoo crumb from all endpoints",
        ))
    }

    /// Drops the cached crumb so the next call re-runs the handshake.
    pub fn invalidate(&self) {
        *self
            .crumb
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Owns the `refreshing` flag and clears it on drop, including when the
/// handshake future is cancelled by a timeout.
struct RefreshGuard<'a>(&'a AtomicBool);

impl<'a> RefreshGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance price and news provider.
///
/// Built on a real transport it calls the chart and news endpoints; built
/// on a mock transport ([`NoopHttpClient`]) it serves deterministic
/// synthetic data through the same parsing path.
#[derive(Clone)]
pub struct YahooProvider {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    auth_manager: Arc<YahooAuthManager>,
    circuit_breaker: Arc<CircuitBreaker>,
    retry: RetryConfig,
    throttle: RequestThrottle,
    adjust_prices: bool,
    timeout_ms: u64,
    use_real_api: bool,
}

impl Default for YahooProvider {
    fn default() -> Self {
        YahooProviderBuilder::new().with_mock_mode().build()
    }
}

impl YahooProvider {
    pub fn builder() -> YahooProviderBuilder {
        YahooProviderBuilder::new()
    }

    pub fn is_mock(&self) -> bool {
        !self.use_real_api
    }

    pub fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.circuit_breaker
    }

    /// Sends a request built around the current crumb.
    ///
    /// Handles the circuit breaker, pacing, one crumb refresh on 401/429 and
    /// transient-failure retries. HTTP 404 is passed through to the caller.
    async fn send<F>(&self, build: F) -> Result<HttpResponse, SourceError>
    where
        F: Fn(&str) -> HttpRequest + Send + Sync,
    {
        self.circuit_breaker.check(PROVIDER)?;

        let mut attempt = 0_u32;
        let mut refreshed = false;

        let outcome = loop {
            self.throttle.acquire().await;
            let crumb = self
                .auth_manager
                .crumb(&self.http_client, &self.auth)
                .await
                .inspect_err(|_| self.circuit_breaker.record_failure())?;

            let request = build(&crumb)
                .with_header("referer", REFERER)
                .with_auth(&self.auth)
                .with_timeout_ms(self.timeout_ms);
            let outcome = self.http_client.execute(request).await;

            if let Ok(response) = &outcome {
                if matches!(response.status, 401 | 429) && !refreshed {
                    tracing::debug!(status = response.status, "yahoo rejected crumb; refreshing");
                    self.auth_manager.invalidate();
                    refreshed = true;
                    continue;
                }
            }

            if self.retry.should_retry(attempt, &outcome) {
                let delay = self.retry.delay_for_attempt(attempt);
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retrying yahoo call"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            break outcome;
        };

        match outcome {
            Err(error) => {
                self.circuit_breaker.record_failure();
                Err(transport_error(&error))
            }
            Ok(response) if response.is_success() || response.status == 404 => {
                self.circuit_breaker.record_success();
                Ok(response)
            }
            Ok(response) if response.status == 429 => {
                self.circuit_breaker.record_failure();
                Err(SourceError::rate_limited("yahoo returned status 429"))
            }
            Ok(response) => {
                self.circuit_breaker.record_failure();
                Err(SourceError::unavailable(format!(
                    "yahoo returned status {}",
                    response.status
                )))
            }
        }
    }

    async fn fetch_real_prices(&self, req: &PriceRequest) -> Result<PriceSeries, SourceError> {
        let (period1, period2) = req.range.unix_bounds();
        let base = format!(
            "{CHART_URL}/{}?period1={period1}&period2={period2}&interval=1d&events=div%2Csplits&includeAdjustedClose=true",
            urlencoding::encode(req.symbol.as_str()),
        );

        let response = self
            .send(|crumb| HttpRequest::get(format!("{base}&crumb={}", urlencoding::encode(crumb))))
            .await?;

        let parsed = parse_chart(&response.body, &req.symbol, req.range, self.adjust_prices);
        if response.status == 404 {
            // Unknown symbol; the body may be JSON or an HTML error page.
            return Ok(parsed.unwrap_or_else(|_| PriceSeries::empty(req.symbol.clone(), req.range)));
        }
        parsed
    }

    async fn fetch_real_news(&self, req: &NewsRequest) -> Result<Vec<RawNewsRecord>, SourceError> {
        let body = news_request_body(&req.symbol, req.limit.max(MIN_NEWS_SNIPPETS));
        let response = self
            .send(|crumb| {
                HttpRequest::post_json(
                    format!("{NEWS_URL}&crumb={}", urlencoding::encode(crumb)),
                    body.clone(),
                )
            })
            .await?;

        if response.status == 404 {
            return Ok(Vec::new());
        }
        parse_news(&response.body, req.limit)
    }
}

impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn fetch_prices<'a>(&'a self, req: PriceRequest) -> ProviderFuture<'a, PriceSeries> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_prices(&req).await
            } else {
                let body = fake_chart_body(&req.symbol, req.range);
                parse_chart(&body, &req.symbol, req.range, self.adjust_prices)
            }
        })
    }

    fn fetch_news<'a>(&'a self, req: NewsRequest) -> ProviderFuture<'a, Vec<RawNewsRecord>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_news(&req).await
            } else {
                parse_news(&fake_news_body(&req.symbol), req.limit)
            }
        })
    }
}

// ============================================================================
// Builder / configuration
// ============================================================================

/// Wiring for [`YahooProvider`].
///
/// # Environment Variables
///
/// | Variable | Effect |
/// |----------|--------|
/// | `ALPACA_YAHOO_COOKIE` | Session cookie sent on every request |
/// | `ALPACA_HTTP_TIMEOUT_MS` | Per-request timeout |
/// | `ALPACA_REQUESTS_PER_SECOND` | Outbound pacing |
pub struct YahooProviderBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    auth: HttpAuth,
    retry: RetryConfig,
    circuit: CircuitBreakerConfig,
    requests_per_second: u32,
    adjust_prices: bool,
    timeout_ms: u64,
}

impl Default for YahooProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooProviderBuilder {
    pub fn new() -> Self {
        Self {
            http_client: None,
            auth: HttpAuth::None,
            retry: RetryConfig::default(),
            circuit: CircuitBreakerConfig::default(),
            requests_per_second: crate::throttling::DEFAULT_REQUESTS_PER_SECOND,
            adjust_prices: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Serve deterministic offline data.
    pub fn with_mock_mode(mut self) -> Self {
        self.http_client = Some(Arc::new(NoopHttpClient));
        self
    }

    /// Use a reqwest transport against the live endpoints.
    pub fn with_real_client(mut self) -> Self {
        self.http_client = Some(Arc::new(ReqwestHttpClient::new()));
        self
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Applies `ALPACA_*` overrides; unparseable values are logged and ignored.
    pub fn from_env(mut self) -> Self {
        if let Ok(cookie) = env::var("ALPACA_YAHOO_COOKIE") {
            if !cookie.trim().is_empty() {
                self.auth = HttpAuth::Cookie(cookie);
            }
        }
        if let Some(timeout_ms) = env_number("ALPACA_HTTP_TIMEOUT_MS") {
            self.timeout_ms = timeout_ms;
        }
        if let Some(rate) = env_number("ALPACA_REQUESTS_PER_SECOND") {
            self.requests_per_second = rate;
        }
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.auth = HttpAuth::Cookie(cookie.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_circuit_breaker(mut self, config: CircuitBreakerConfig) -> Self {
        self.circuit = config;
        self
    }

    pub fn with_requests_per_second(mut self, rate: u32) -> Self {
        self.requests_per_second = rate;
        self
    }

    /// Scale OHLC by the adjusted close (splits and dividends). On by default.
    pub fn with_adjusted_prices(mut self, adjust: bool) -> Self {
        self.adjust_prices = adjust;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn build(self) -> YahooProvider {
        let http_client = self
            .http_client
            .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()));
        let use_real_api = !http_client.is_mock();

        YahooProvider {
            http_client,
            auth: self.auth,
            auth_manager: Arc::new(YahooAuthManager::default()),
            circuit_breaker: Arc::new(CircuitBreaker::new(self.circuit)),
            retry: self.retry,
            throttle: RequestThrottle::per_second(self.requests_per_second),
            adjust_prices: self.adjust_prices,
            timeout_ms: self.timeout_ms,
            use_real_api,
        }
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

fn transport_error(error: &HttpError) -> SourceError {
    if error.retryable() {
        SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
    } else {
        SourceError::internal(format!("yahoo transport error: {}", error.message()))
    }
}

// ============================================================================
// Chart parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
    #[serde(default)]
    adjclose: Vec<ChartAdjClose>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Collapses a chart payload into one flat daily series for `symbol`.
///
/// Unknown symbols (`Not Found`) and results without timestamps produce an
/// empty series; rows missing any OHLC value or outside `range` are skipped.
fn parse_chart(
    body: &str,
    symbol: &Symbol,
    range: DateRange,
    adjust: bool,
) -> Result<PriceSeries, SourceError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = envelope.chart.error {
        let code = error.code.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            tracing::info!(symbol = %symbol, "yahoo has no chart for symbol");
            return Ok(PriceSeries::empty(symbol.clone(), range));
        }
        return Err(SourceError::unavailable(format!(
            "yahoo chart error {code}: {}",
            error.description.unwrap_or_default()
        )));
    }

    let mut results = envelope.chart.result.unwrap_or_default();
    let position = results
        .iter()
        .position(|result| {
            result
                .meta
                .symbol
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(symbol.as_str()))
        })
        .unwrap_or(0);
    if results.is_empty() {
        return Ok(PriceSeries::empty(symbol.clone(), range));
    }
    let result = results.swap_remove(position);

    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(PriceSeries::empty(symbol.clone(), range));
    };
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|series| series.adjclose)
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    let mut skipped = 0_usize;

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(date) = local_date(ts, result.meta.gmtoffset) else {
            skipped += 1;
            continue;
        };
        if !range.contains(date) {
            continue;
        }

        let (Some(open), Some(high), Some(low), Some(close)) = (
            value_at(&quote.open, i),
            value_at(&quote.high, i),
            value_at(&quote.low, i),
            value_at(&quote.close, i),
        ) else {
            skipped += 1;
            continue;
        };

        let factor = match value_at(&adjclose, i) {
            Some(adjusted) if adjust && close > 0.0 => adjusted / close,
            _ => 1.0,
        };
        let volume = value_at(&quote.volume, i).map_or(0, |v| v.max(0.0) as u64);

        match PriceBar::new(
            date,
            open * factor,
            high * factor,
            low * factor,
            close * factor,
            volume,
        ) {
            Ok(bar) => bars.push(bar),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(symbol = %symbol, skipped, "skipped incomplete yahoo rows");
    }

    Ok(PriceSeries::new(symbol.clone(), range, bars))
}

fn value_at(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten().filter(|v| v.is_finite())
}

fn local_date(timestamp: i64, gmtoffset: i64) -> Option<Date> {
    OffsetDateTime::from_unix_timestamp(timestamp.checked_add(gmtoffset)?)
        .ok()
        .map(OffsetDateTime::date)
}

// ============================================================================
// News parsing
// ============================================================================

fn news_request_body(symbol: &Symbol, snippets: usize) -> String {
    json!({
        "serviceConfig": {
            "snippetCount": snippets,
            "s": [symbol.as_str()],
        }
    })
    .to_string()
}

/// Extracts up to `limit` non-advertisement records from a news stream payload.
fn parse_news(body: &str, limit: usize) -> Result<Vec<RawNewsRecord>, SourceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo news: {e}")))?;

    let Some(stream) = value
        .pointer("/data/tickerStream/stream")
        .and_then(Value::as_array)
    else {
        return Ok(Vec::new());
    };

    let (ads, articles): (Vec<&Value>, Vec<&Value>) = stream.iter().partition(|item| is_ad(item));
    if !ads.is_empty() {
        tracing::debug!(dropped = ads.len(), "dropped sponsored news entries");
    }

    Ok(articles
        .into_iter()
        .take(limit)
        .cloned()
        .map(RawNewsRecord::new)
        .collect())
}

fn is_ad(item: &Value) -> bool {
    match item.get("ad") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Array(entries)) => !entries.is_empty(),
        Some(Value::Object(entries)) => !entries.is_empty(),
        Some(_) => true,
    }
}

// ============================================================================
// Mock data (offline mode)
// ============================================================================

fn fake_chart_body(symbol: &Symbol, range: DateRange) -> String {
    let seed = symbol_seed(symbol);
    let base = 40.0 + (seed % 400) as f64;
    let phase = (seed % 17) as f64;

    let mut timestamps = Vec::new();
    let (mut open, mut high, mut low, mut close, mut volume) =
        (Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new());

    let mut date = range.start();
    let mut index = 0_u32;
    while date < range.end() {
        if !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            let t = f64::from(index);
            let c = base * (1.0 + 0.08 * ((t + phase) / 9.0).sin() + 0.0004 * t);
            let o = base * (1.0 + 0.08 * ((t + phase - 0.5) / 9.0).sin() + 0.0004 * t);
            // 14:30 UTC, the regular session open.
            timestamps.push(date.midnight().assume_utc().unix_timestamp() + 52_200);
            open.push(o);
            close.push(c);
            high.push(o.max(c) * 1.006);
            low.push(o.min(c) * 0.994);
            volume.push(1_000_000 + seed.wrapping_add(u64::from(index) * 7_919) % 750_000);
            index += 1;
        }
        match date.next_day() {
            Some(next) => date = next,
            None => break,
        }
    }

    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": symbol.as_str(), "gmtoffset": 0 },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": open,
                        "high": high,
                        "low": low,
                        "close": close,
                        "volume": volume,
                    }],
                },
            }],
            "error": null,
        }
    })
    .to_string()
}

fn fake_news_body(symbol: &Symbol) -> String {
    let ticker = symbol.as_str();
    json!({
        "data": {
            "tickerStream": {
                "stream": [
                    {
                        "id": "mock-1",
                        "content": {
                            "title": format!("{ticker} shares move as markets digest rate outlook"),
                            "clickThroughUrl": { "url": format!("https://finance.yahoo.com/news/{}-rates", ticker.to_ascii_lowercase()) },
                            "provider": { "displayName": "Mock Wire" },
                        },
                    },
                    { "id": "mock-ad", "ad": ["sponsored"], "content": { "title": "Sponsored" } },
                    {
                        "id": "mock-2",
                        "content": {
                            "title": format!("What analysts expect from {ticker} this quarter"),
                            "clickThroughUrl": null,
                            "canonicalUrl": { "url": format!("https://finance.yahoo.com/m/{}-preview", ticker.to_ascii_lowercase()) },
                            "provider": { "displayName": "Mock Research" },
                        },
                    },
                    { "id": "mock-3", "content": null },
                ],
            },
        },
    })
    .to_string()
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}
