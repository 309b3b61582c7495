//! # Alpaca Core
//!
//! Single-security risk analytics: daily prices for a ticker and a market
//! benchmark, the beta/volatility/Sharpe profile derived from them, and the
//! latest headlines.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Yahoo Finance provider (live and offline) |
//! | [`analytics`] | Return alignment, risk metrics, news normalization, the engine |
//! | [`circuit_breaker`] | Fail-fast guard for upstream calls |
//! | [`data_source`] | `MarketDataProvider` contract and request types |
//! | [`domain`] | Symbols, date ranges, price bars, news records |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`retry`] | Provider-side retry policy |
//! | [`throttling`] | Outbound request pacing |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use alpaca_core::{RiskAnalyticsEngine, YahooProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = YahooProvider::builder().with_real_client().from_env().build();
//!     let engine = RiskAnalyticsEngine::new(Arc::new(provider));
//!
//!     let result = engine.analyze("AAPL", None, None).await?;
//!     if let Some(metrics) = result.metrics {
//!         println!("beta {:.2}, volatility {:.1}%", metrics.beta, metrics.volatility);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  CLI / caller       │
//! └──────────┬──────────┘
//!            │ analyze(ticker, start, end)
//!            ▼
//! ┌─────────────────────┐
//! │ RiskAnalyticsEngine │──▶ returns ─▶ inner join ─▶ RiskMetrics
//! └──────────┬──────────┘──▶ news normalization
//!            │ 3 concurrent fetches
//!            ▼
//! ┌─────────────────────┐     ┌──────────────────────────────┐
//! │ MarketDataProvider  │────▶│ retry / circuit / throttle   │
//! │ (YahooProvider)     │     │ HttpClient (reqwest / noop)  │
//! └─────────────────────┘     └──────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use alpaca_core::{AnalysisError, SourceErrorKind};
//!
//! fn describe(error: &AnalysisError) -> &'static str {
//!     match error {
//!         AnalysisError::InvalidInput(_) => "fix the ticker",
//!         AnalysisError::ProviderUnavailable { source, .. }
//!             if source.kind() == SourceErrorKind::RateLimited => "slow down",
//!         AnalysisError::ProviderUnavailable { .. } | AnalysisError::Timeout { .. } => {
//!             "try again later"
//!         }
//!     }
//! }
//! ```

pub mod adapters;
pub mod analytics;
pub mod circuit_breaker;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod retry;
pub mod throttling;

// Provider implementations
pub use adapters::{YahooAuthManager, YahooProvider, YahooProviderBuilder};

// Analytics
pub use analytics::{
    normalize_news, AlignedReturns, AnalysisError, AnalysisRequest, AnalysisResult, BetaBand,
    EngineConfig, FetchKind, PositionSummary, ReturnSeries, RiskAnalyticsEngine, RiskMetrics,
};

// Circuit breaker
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};

// Provider contract
pub use data_source::{
    MarketDataProvider, NewsRequest, PriceRequest, ProviderFuture, SourceError, SourceErrorKind,
};

// Domain models
pub use domain::{
    format_date, parse_date, today_utc, DateRange, NewsItem, PriceBar, PriceSeries,
    RawNewsRecord, ResolvedRange, Symbol,
};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

// Retry logic
pub use retry::{Backoff, RetryConfig};

// Throttling
pub use throttling::RequestThrottle;
