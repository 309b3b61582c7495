use crate::{NewsItem, RawNewsRecord};

/// Ordered JSON-pointer lookups for one output field, plus its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    /// Serialized `NewsItem` key the rules fill.
    pub field: &'static str,
    pub pointers: &'static [&'static str],
    pub fallback: &'static str,
}

impl FieldRules {
    /// First non-empty string matched by `pointers`, else the fallback.
    pub fn extract(&self, record: &RawNewsRecord) -> String {
        match self
            .pointers
            .iter()
            .find_map(|pointer| record.string_at(pointer))
        {
            Some(value) => value.to_owned(),
            None => {
                tracing::debug!(
                    field = self.field,
                    fallback = self.fallback,
                    "news field missing; using fallback"
                );
                self.fallback.to_owned()
            }
        }
    }
}

pub const TITLE_RULES: FieldRules = FieldRules {
    field: "title",
    pointers: &["/content/title"],
    fallback: "No Title",
};

pub const LINK_RULES: FieldRules = FieldRules {
    field: "link",
    pointers: &["/content/clickThroughUrl/url", "/content/canonicalUrl/url"],
    fallback: "#",
};

pub const PUBLISHER_RULES: FieldRules = FieldRules {
    field: "publisher",
    pointers: &["/content/provider/displayName"],
    fallback: "Unknown",
};

pub fn normalize_record(record: &RawNewsRecord) -> NewsItem {
    NewsItem {
        title: TITLE_RULES.extract(record),
        link: LINK_RULES.extract(record),
        publisher: PUBLISHER_RULES.extract(record),
    }
}

/// Normalizes at most `limit` records, preserving order.
///
/// Malformed records degrade to fallbacks; they are never dropped.
pub fn normalize_news(records: &[RawNewsRecord], limit: usize) -> Vec<NewsItem> {
    records.iter().take(limit).map(normalize_record).collect()
}
