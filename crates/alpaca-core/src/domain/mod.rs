//! # Domain Models
//!
//! Canonical types shared by the provider contract and the analytics engine.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker or index symbol |
//! | [`DateRange`] | Half-open calendar window with the default-range policy |
//! | [`PriceBar`] | Daily OHLCV bar |
//! | [`PriceSeries`] | Date-ordered bars for one symbol |
//! | [`RawNewsRecord`] | Untyped upstream news record |
//! | [`NewsItem`] | Normalized headline with guaranteed fields |
//!
//! Construction validates invariants; invalid bars and symbols are rejected
//! with [`ValidationError`](crate::ValidationError).

pub(crate) mod date_range;
mod models;
mod news;
mod symbol;

pub use date_range::{
    format_date, parse_date, today_utc, DateRange, ResolvedRange, DEFAULT_LOOKBACK_DAYS,
};
pub use models::{PriceBar, PriceSeries};
pub use news::{NewsItem, RawNewsRecord};
pub use symbol::Symbol;
