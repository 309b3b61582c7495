//! Market data provider contract and request/response types.
//!
//! The analytics engine only ever talks to a [`MarketDataProvider`]. A
//! provider answers two questions:
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | Prices | [`PriceRequest`] | [`PriceSeries`] (daily, possibly empty) |
//! | News | [`NewsRequest`] | `Vec<`[`RawNewsRecord`]`>` (possibly empty) |
//!
//! An unknown symbol is not an error: providers return an empty series. A
//! [`SourceError`] means the upstream could not be reached or answered with
//! something unusable.
//!
//! # Example
//!
//! ```rust,ignore
//! use alpaca_core::{DateRange, MarketDataProvider, PriceRequest, Symbol, YahooProvider};
//!
//! async fn closes(provider: &YahooProvider, range: DateRange) -> Result<Vec<f64>, SourceError> {
//!     let request = PriceRequest::new(Symbol::parse("AAPL")?, range);
//!     let series = provider.fetch_prices(request).await?;
//!     Ok(series.bars().iter().map(|bar| bar.close).collect())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{DateRange, PriceSeries, RawNewsRecord, Symbol};

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured provider error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for daily price history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub symbol: Symbol,
    pub range: DateRange,
}

impl PriceRequest {
    pub fn new(symbol: Symbol, range: DateRange) -> Self {
        Self { symbol, range }
    }
}

/// Request payload for recent news.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRequest {
    pub symbol: Symbol,
    pub limit: usize,
}

impl NewsRequest {
    pub fn new(symbol: Symbol, limit: usize) -> Result<Self, SourceError> {
        if limit == 0 {
            return Err(SourceError::invalid_request(
                "news request limit must be greater than zero",
            ));
        }
        Ok(Self { symbol, limit })
    }
}

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// External source of daily prices and news.
///
/// Implementations must be `Send + Sync`; the engine issues the security,
/// benchmark and news fetches concurrently against one shared provider.
pub trait MarketDataProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches daily bars for `req.symbol` within `req.range`.
    ///
    /// Returns an empty series when the symbol is unknown or has no trading
    /// activity in the window.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the upstream is unreachable, rate limited
    /// or answers with an unparseable payload.
    fn fetch_prices<'a>(&'a self, req: PriceRequest) -> ProviderFuture<'a, PriceSeries>;

    /// Fetches at most `req.limit` raw news records, newest first.
    ///
    /// # Errors
    ///
    /// Same conditions as [`fetch_prices`](MarketDataProvider::fetch_prices).
    fn fetch_news<'a>(&'a self, req: NewsRequest) -> ProviderFuture<'a, Vec<RawNewsRecord>>;
}
