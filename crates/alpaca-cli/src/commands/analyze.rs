use std::sync::Arc;
use std::time::Duration;

use alpaca_core::{
    AnalysisResult, BetaBand, DateRange, EngineConfig, NewsItem, PositionSummary, PriceBar,
    RiskAnalyticsEngine, RiskMetrics, Symbol, YahooProvider,
};
use serde::Serialize;

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

/// Everything the renderers show for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symbol: Symbol,
    pub benchmark: Symbol,
    pub range: DateRange,
    pub range_corrected: bool,
    pub position: Option<PositionSummary>,
    pub metrics: Option<RiskMetrics>,
    pub beta_band: Option<BetaBand>,
    pub news: Vec<NewsItem>,
    pub bars: Vec<PriceBar>,
}

impl AnalysisReport {
    pub fn from_result(result: AnalysisResult, shares: f64) -> Self {
        Self {
            position: PositionSummary::from_series(&result.prices, shares),
            beta_band: result.metrics.map(|metrics| BetaBand::classify(metrics.beta)),
            bars: result.prices.bars().to_vec(),
            symbol: result.symbol,
            benchmark: result.benchmark,
            range: result.range,
            range_corrected: result.range_corrected,
            metrics: result.metrics,
            news: result.news,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.bars.is_empty()
    }
}

pub async fn run(
    args: &AnalyzeArgs,
    mock: bool,
    timeout_ms: u64,
) -> Result<AnalysisReport, CliError> {
    let builder = YahooProvider::builder();
    let provider = if mock {
        builder.with_mock_mode().build()
    } else {
        builder.with_real_client().from_env().build()
    };

    let config = EngineConfig::default().with_fetch_timeout(Duration::from_millis(timeout_ms));
    let engine = RiskAnalyticsEngine::with_config(Arc::new(provider), config);

    let result = engine.analyze(&args.ticker, args.start, args.end).await?;
    Ok(AnalysisReport::from_result(result, args.shares))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn args(ticker: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            ticker: ticker.to_owned(),
            start: Some(date!(2024 - 01 - 01)),
            end: Some(date!(2024 - 03 - 01)),
            shares: 4.0,
        }
    }

    #[tokio::test]
    async fn mock_run_produces_position_metrics_and_band() {
        let report = run(&args("msft"), true, 5_000).await.expect("report");

        assert_eq!(report.symbol.as_str(), "MSFT");
        assert!(!report.is_no_data());
        let position = report.position.expect("position");
        assert_eq!(position.shares, 4.0);
        assert_eq!(position.current_value, position.last_close * 4.0);
        let metrics = report.metrics.expect("metrics");
        assert_eq!(report.beta_band, Some(BetaBand::classify(metrics.beta)));
        assert_eq!(report.news.len(), 3);
    }

    #[tokio::test]
    async fn invalid_ticker_is_a_validation_error() {
        let error = run(&args("$$$"), true, 5_000).await.expect_err("invalid");
        assert_eq!(error.exit_code(), 2);
    }

    #[tokio::test]
    async fn json_report_uses_documented_keys() {
        let report = run(&args("AAPL"), true, 5_000).await.expect("report");
        let json = serde_json::to_value(&report).expect("json");

        for key in [
            "symbol",
            "benchmark",
            "range",
            "range_corrected",
            "position",
            "metrics",
            "beta_band",
            "news",
            "bars",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["benchmark"], "^GSPC");
        assert_eq!(json["bars"][0]["date"], "2024-01-01");
    }
}
