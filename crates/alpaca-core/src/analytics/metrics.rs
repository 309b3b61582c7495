use serde::{Deserialize, Serialize};

use super::returns::AlignedReturns;

/// Annualization factor for daily returns.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Annual risk-free rate subtracted in the Sharpe ratio.
pub const RISK_FREE_RATE: f64 = 0.04;

/// Risk/return profile of a security against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Sensitivity to benchmark moves; 1.0 when the benchmark never moved.
    pub beta: f64,
    /// Annualized standard deviation of daily returns, in percent.
    pub volatility: f64,
    /// Annualized excess return per unit of volatility; 0 when volatility is 0.
    pub sharpe: f64,
}

impl RiskMetrics {
    /// Computes the metrics, or `None` when there are no aligned returns.
    ///
    /// Uses sample (n - 1) estimators; a single aligned point has zero
    /// variance and covariance.
    pub fn compute(
        aligned: &AlignedReturns,
        risk_free_rate: f64,
        trading_days: u32,
    ) -> Option<Self> {
        if aligned.is_empty() {
            return None;
        }

        let security = aligned.security();
        let market = aligned.market();
        let trading_days = f64::from(trading_days);

        let market_variance = sample_variance(&market);
        let beta = if market_variance == 0.0 {
            1.0
        } else {
            sample_covariance(&security, &market) / market_variance
        };

        let volatility = sample_variance(&security).sqrt() * trading_days.sqrt() * 100.0;

        let sharpe = if volatility == 0.0 {
            0.0
        } else {
            (mean(&security) * trading_days - risk_free_rate) / (volatility / 100.0)
        };

        Some(Self {
            beta,
            volatility,
            sharpe,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_covariance(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return 0.0;
    }
    let (mean_a, mean_b) = (mean(&a[..n]), mean(&b[..n]));
    let sum: f64 = a[..n]
        .iter()
        .zip(&b[..n])
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    sum / (n - 1) as f64
}

fn sample_variance(values: &[f64]) -> f64 {
    // Clamp rounding noise so the square root stays real.
    sample_covariance(values, values).max(0.0)
}
