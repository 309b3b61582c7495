use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use time::Date;
use tracing::Instrument;
use uuid::Uuid;

use super::metrics::{RiskMetrics, RISK_FREE_RATE, TRADING_DAYS_PER_YEAR};
use super::news::normalize_news;
use super::returns::{AlignedReturns, ReturnSeries};
use crate::data_source::{
    MarketDataProvider, NewsRequest, PriceRequest, ProviderFuture, SourceError,
};
use crate::domain::today_utc;
use crate::{DateRange, NewsItem, PriceSeries, Symbol, ValidationError};

pub const DEFAULT_BENCHMARK: &str = "^GSPC";
pub const DEFAULT_NEWS_LIMIT: usize = 3;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Analytics constants and fetch budget.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    benchmark: Symbol,
    risk_free_rate: f64,
    trading_days: u32,
    news_limit: usize,
    fetch_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            benchmark: Symbol::from_static(DEFAULT_BENCHMARK),
            risk_free_rate: RISK_FREE_RATE,
            trading_days: TRADING_DAYS_PER_YEAR,
            news_limit: DEFAULT_NEWS_LIMIT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl EngineConfig {
    pub fn with_benchmark(mut self, benchmark: Symbol) -> Self {
        self.benchmark = benchmark;
        self
    }

    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    pub fn with_trading_days(mut self, days: u32) -> Self {
        self.trading_days = days.max(1);
        self
    }

    pub fn with_news_limit(mut self, limit: usize) -> Self {
        self.news_limit = limit.max(1);
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn benchmark(&self) -> &Symbol {
        &self.benchmark
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn trading_days(&self) -> u32 {
        self.trading_days
    }

    pub fn news_limit(&self) -> usize {
        self.news_limit
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
}

/// Validated input to [`RiskAnalyticsEngine::analyze_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub symbol: Symbol,
    pub range: DateRange,
    /// The caller's bounds were missing or inverted and were replaced.
    pub range_corrected: bool,
}

impl AnalysisRequest {
    pub fn new(symbol: Symbol, range: DateRange) -> Self {
        Self {
            symbol,
            range,
            range_corrected: false,
        }
    }

    /// Parses `ticker` and applies the default-range policy relative to `today`.
    pub fn from_input(
        ticker: &str,
        start: Option<Date>,
        end: Option<Date>,
        today: Date,
    ) -> Result<Self, ValidationError> {
        let symbol = Symbol::parse(ticker)?;
        let resolved = DateRange::resolve(start, end, today);
        if resolved.corrected {
            tracing::warn!(
                symbol = %symbol,
                range = %resolved.range,
                "date range missing or degenerate; using trailing-year default"
            );
        }

        Ok(Self {
            symbol,
            range: resolved.range,
            range_corrected: resolved.corrected,
        })
    }
}

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub symbol: Symbol,
    pub benchmark: Symbol,
    pub range: DateRange,
    pub range_corrected: bool,
    pub prices: PriceSeries,
    /// Absent when the security and benchmark share no return dates.
    pub metrics: Option<RiskMetrics>,
    pub news: Vec<NewsItem>,
}

impl AnalysisResult {
    /// The provider had no prices for the security in the window.
    pub fn is_no_data(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Which provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Prices,
    News,
}

impl Display for FetchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prices => "prices",
            Self::News => "news",
        })
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("{fetch} fetch for {symbol} failed: {source}")]
    ProviderUnavailable {
        fetch: FetchKind,
        symbol: Symbol,
        #[source]
        source: SourceError,
    },

    #[error("{fetch} fetch for {symbol} timed out after {timeout_ms} ms")]
    Timeout {
        fetch: FetchKind,
        symbol: Symbol,
        timeout_ms: u64,
    },
}

/// Computes risk metrics and news for one security against a benchmark.
///
/// Stateless between calls; the same inputs against the same provider data
/// always produce the same result.
#[derive(Clone)]
pub struct RiskAnalyticsEngine {
    provider: Arc<dyn MarketDataProvider>,
    config: EngineConfig,
}

impl RiskAnalyticsEngine {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyses `ticker` over `[start, end)`.
    ///
    /// Missing or inverted bounds fall back to the trailing year ending today.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] for an unparseable ticker; otherwise
    /// see [`analyze_request`](Self::analyze_request).
    pub async fn analyze(
        &self,
        ticker: &str,
        start: Option<Date>,
        end: Option<Date>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest::from_input(ticker, start, end, today_utc())?;
        self.analyze_request(request).await
    }

    /// Runs the fetch/align/compute pipeline for a validated request.
    ///
    /// An empty security series is a successful no-data result without news,
    /// whatever happened to the benchmark and news fetches.
    ///
    /// # Errors
    ///
    /// Any failed or timed-out security fetch fails the analysis. Once the
    /// security has prices, a failed benchmark or news fetch fails it too; no
    /// partial result is returned and nothing is retried.
    pub async fn analyze_request(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let span = tracing::info_span!(
            "analyze",
            request_id = %Uuid::new_v4(),
            symbol = %request.symbol,
            range = %request.range,
            provider = self.provider.name(),
        );
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let AnalysisRequest {
            symbol,
            range,
            range_corrected,
        } = request;
        let benchmark = self.config.benchmark.clone();

        tracing::info!("starting analysis");

        let news_request =
            NewsRequest::new(symbol.clone(), self.config.news_limit).map_err(|source| {
                AnalysisError::ProviderUnavailable {
                    fetch: FetchKind::News,
                    symbol: symbol.clone(),
                    source,
                }
            })?;

        let (security, market, raw_news) = tokio::join!(
            self.bounded(
                FetchKind::Prices,
                &symbol,
                self.provider
                    .fetch_prices(PriceRequest::new(symbol.clone(), range)),
            ),
            self.bounded(
                FetchKind::Prices,
                &benchmark,
                self.provider
                    .fetch_prices(PriceRequest::new(benchmark.clone(), range)),
            ),
            self.bounded(
                FetchKind::News,
                &symbol,
                self.provider.fetch_news(news_request),
            ),
        );
        // An empty security series settles the outcome; the benchmark and news
        // results are discarded unread.
        let security = security?;
        if security.is_empty() {
            tracing::info!("no price data for security");
            return Ok(AnalysisResult {
                symbol,
                benchmark,
                range,
                range_corrected,
                prices: security,
                metrics: None,
                news: Vec::new(),
            });
        }
        let (market, raw_news) = (market?, raw_news?);

        let news = normalize_news(&raw_news, self.config.news_limit);

        if market.is_empty() {
            tracing::warn!(benchmark = %benchmark, "benchmark returned no prices");
        }

        let aligned = AlignedReturns::inner_join(
            &ReturnSeries::from_prices(&security),
            &ReturnSeries::from_prices(&market),
        );
        let metrics = RiskMetrics::compute(
            &aligned,
            self.config.risk_free_rate,
            self.config.trading_days,
        );

        match &metrics {
            Some(metrics) => tracing::info!(
                bars = security.len(),
                aligned = aligned.len(),
                beta = metrics.beta,
                volatility = metrics.volatility,
                sharpe = metrics.sharpe,
                news = news.len(),
                "analysis complete"
            ),
            None => tracing::info!(
                bars = security.len(),
                news = news.len(),
                "analysis complete; no overlapping returns, metrics omitted"
            ),
        }

        Ok(AnalysisResult {
            symbol,
            benchmark,
            range,
            range_corrected,
            prices: security,
            metrics,
            news,
        })
    }

    async fn bounded<T>(
        &self,
        fetch: FetchKind,
        symbol: &Symbol,
        future: ProviderFuture<'_, T>,
    ) -> Result<T, AnalysisError> {
        let timeout = self.config.fetch_timeout;
        match tokio::time::timeout(timeout, future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => {
                tracing::warn!(%fetch, symbol = %symbol, error = %source, "provider fetch failed");
                Err(AnalysisError::ProviderUnavailable {
                    fetch,
                    symbol: symbol.clone(),
                    source,
                })
            }
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(%fetch, symbol = %symbol, timeout_ms, "provider fetch timed out");
                Err(AnalysisError::Timeout {
                    fetch,
                    symbol: symbol.clone(),
                    timeout_ms,
                })
            }
        }
    }
}
