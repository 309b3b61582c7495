//! Risk analytics over provider data.
//!
//! [`RiskAnalyticsEngine`] fetches the security, the benchmark and recent
//! news concurrently, aligns daily returns on date and derives
//! [`RiskMetrics`]. The remaining modules are the pure building blocks it
//! composes, exposed so callers can reuse them on their own series.

mod engine;
mod metrics;
mod news;
mod position;
mod returns;

pub use engine::{
    AnalysisError, AnalysisRequest, AnalysisResult, EngineConfig, FetchKind, RiskAnalyticsEngine,
    DEFAULT_BENCHMARK, DEFAULT_FETCH_TIMEOUT, DEFAULT_NEWS_LIMIT,
};
pub use metrics::{RiskMetrics, RISK_FREE_RATE, TRADING_DAYS_PER_YEAR};
pub use news::{
    normalize_news, normalize_record, FieldRules, LINK_RULES, PUBLISHER_RULES, TITLE_RULES,
};
pub use position::{BetaBand, PositionSummary};
pub use returns::{AlignedReturn, AlignedReturns, DailyReturn, ReturnSeries};
