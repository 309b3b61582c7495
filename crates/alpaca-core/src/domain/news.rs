use serde::{Deserialize, Serialize};
use serde_json::Value;

/// News record exactly as the provider returned it.
///
/// Upstream news payloads are deeply nested and every level is optional, so
/// the record is kept as untyped JSON until normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawNewsRecord(Value);

impl RawNewsRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Non-empty string found at a JSON pointer (`/content/title`), if any.
    pub fn string_at(&self, pointer: &str) -> Option<&str> {
        self.0
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl From<Value> for RawNewsRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Normalized news headline. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub publisher: String,
}
