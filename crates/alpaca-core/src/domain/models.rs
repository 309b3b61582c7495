use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::date_range::iso_date;
use crate::{DateRange, Symbol, ValidationError};

/// Daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceBar")]
pub struct PriceBar {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(
        date: Date,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

#[derive(Deserialize)]
struct RawPriceBar {
    #[serde(with = "iso_date")]
    date: Date,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl TryFrom<RawPriceBar> for PriceBar {
    type Error = ValidationError;

    fn try_from(raw: RawPriceBar) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.open, raw.high, raw.low, raw.close, raw.volume)
    }
}

/// Daily bars for one symbol over a window, ascending by date.
///
/// The constructor sorts the bars and keeps the last bar for any repeated
/// date, so `bars()` always has strictly increasing dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPriceSeries")]
pub struct PriceSeries {
    symbol: Symbol,
    range: DateRange,
    bars: Vec<PriceBar>,
}

#[derive(Deserialize)]
struct RawPriceSeries {
    symbol: Symbol,
    range: DateRange,
    bars: Vec<PriceBar>,
}

impl From<RawPriceSeries> for PriceSeries {
    fn from(raw: RawPriceSeries) -> Self {
        Self::new(raw.symbol, raw.range, raw.bars)
    }
}

impl PriceSeries {
    pub fn new(symbol: Symbol, range: DateRange, mut bars: Vec<PriceBar>) -> Self {
        // Stable sort keeps arrival order among equal dates; the later bar wins.
        bars.sort_by_key(|bar| bar.date);
        let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }

        Self {
            symbol,
            range,
            bars: deduped,
        }
    }

    pub fn empty(symbol: Symbol, range: DateRange) -> Self {
        Self {
            symbol,
            range,
            bars: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.bars.first().map(|bar| bar.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
