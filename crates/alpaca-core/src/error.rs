use thiserror::Error;

/// Validation and contract errors exposed by `alpaca-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter, digit or '^': '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("date range start {start} must be before end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
}

