use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 15;

/// Normalized ticker or index symbol.
///
/// Tickers start with a letter or digit (`AAPL`, `BRK-B`, `0700.HK`,
/// `EURUSD=X`); index symbols carry a leading caret (`^GSPC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        let body = match normalized.strip_prefix('^') {
            Some(rest) => rest,
            None => normalized.as_str(),
        };
        let offset = len - body.chars().count();

        match body.chars().next() {
            Some(first) if first.is_ascii_alphanumeric() => {}
            Some(first) => return Err(ValidationError::SymbolInvalidStart { ch: first }),
            None => return Err(ValidationError::EmptySymbol),
        }

        for (index, ch) in body.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '=');
            if !valid {
                return Err(ValidationError::SymbolInvalidChar {
                    ch,
                    index: index + offset,
                });
            }
        }

        Ok(Self(normalized))
    }

    /// Wraps a literal that is already normalized, such as a built-in benchmark.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(Self::parse(value).is_ok_and(|parsed| parsed.0 == value));
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this symbol names a market index rather than a tradable security.
    pub fn is_index(&self) -> bool {
        self.0.starts_with('^')
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
