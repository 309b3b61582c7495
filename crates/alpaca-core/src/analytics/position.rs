use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::PriceSeries;

/// Value of holding `shares` over the analysed window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub shares: f64,
    pub first_close: f64,
    /// Latest close, i.e. the current share price.
    pub last_close: f64,
    pub current_value: f64,
    pub net_profit: f64,
    pub percent_change: f64,
}

impl PositionSummary {
    /// `None` for an empty series. Percent change is 0 when the first close is 0.
    pub fn from_series(series: &PriceSeries, shares: f64) -> Option<Self> {
        let first_close = series.first_close()?;
        let last_close = series.last_close()?;

        let percent_change = if first_close == 0.0 {
            0.0
        } else {
            (last_close - first_close) / first_close * 100.0
        };

        Some(Self {
            shares,
            first_close,
            last_close,
            current_value: last_close * shares,
            net_profit: (last_close - first_close) * shares,
            percent_change,
        })
    }
}

/// Coarse reading of beta for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetaBand {
    HighVolatility,
    LowVolatility,
    MarketCorrelated,
}

impl BetaBand {
    pub fn classify(beta: f64) -> Self {
        if beta > 1.5 {
            Self::HighVolatility
        } else if beta < 0.8 {
            Self::LowVolatility
        } else {
            Self::MarketCorrelated
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighVolatility => "High Volatility",
            Self::LowVolatility => "Low Volatility",
            Self::MarketCorrelated => "Market Correlated",
        }
    }
}

impl Display for BetaBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
