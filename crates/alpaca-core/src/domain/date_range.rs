use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::ValidationError;

/// Length of the window substituted for a missing or degenerate range.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Half-open calendar window `[start, end)` used for price requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    #[serde(with = "iso_date")]
    start: Date,
    #[serde(with = "iso_date")]
    end: Date,
}

#[derive(Deserialize)]
struct RawDateRange {
    #[serde(with = "iso_date")]
    start: Date,
    #[serde(with = "iso_date")]
    end: Date,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidDateRange {
                start: format_date(start),
                end: format_date(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Trailing window of `days` calendar days ending at `end`.
    pub fn trailing(end: Date, days: i64) -> Self {
        let start = end.saturating_sub(Duration::days(days.max(1)));
        Self { start, end }
    }

    /// Applies the default-range policy.
    ///
    /// A complete, ordered pair is kept as-is. Anything else (a missing bound,
    /// `start >= end`) is replaced by the trailing-year window ending `today`.
    pub fn resolve(start: Option<Date>, end: Option<Date>, today: Date) -> ResolvedRange {
        if let (Some(start), Some(end)) = (start, end) {
            if let Ok(range) = Self::new(start, end) {
                return ResolvedRange {
                    range,
                    corrected: false,
                };
            }
        }

        ResolvedRange {
            range: Self::trailing(today, DEFAULT_LOOKBACK_DAYS),
            corrected: true,
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date < self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    /// Unix timestamps of the window bounds at 00:00 UTC.
    pub fn unix_bounds(&self) -> (i64, i64) {
        (
            self.start.midnight().assume_utc().unix_timestamp(),
            self.end.midnight().assume_utc().unix_timestamp(),
        )
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", format_date(self.start), format_date(self.end))
    }
}

/// Outcome of [`DateRange::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub range: DateRange,
    /// `true` when the caller's bounds were replaced by the default window.
    pub corrected: bool,
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), ISO_DATE).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

pub fn format_date(date: Date) -> String {
    date.format(ISO_DATE)
        .unwrap_or_else(|_| String::from("<unformattable>"))
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Serde adapter writing dates as `YYYY-MM-DD` strings.
pub mod iso_date {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_date(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn keeps_ordered_range() {
        let resolved = DateRange::resolve(
            Some(date!(2024 - 01 - 02)),
            Some(date!(2024 - 03 - 01)),
            date!(2024 - 06 - 01),
        );
        assert!(!resolved.corrected);
        assert_eq!(resolved.range.start(), date!(2024 - 01 - 02));
        assert_eq!(resolved.range.end(), date!(2024 - 03 - 01));
    }

    #[test]
    fn single_ended_range_falls_back_to_trailing_year() {
        let today = date!(2024 - 06 - 01);
        let resolved = DateRange::resolve(Some(date!(2024 - 01 - 02)), None, today);
        assert!(resolved.corrected);
        assert_eq!(resolved.range.end(), today);
        assert_eq!(resolved.range.days(), DEFAULT_LOOKBACK_DAYS);
    }

    #[test]
    fn inverted_range_falls_back_to_trailing_year() {
        let today = date!(2024 - 06 - 01);
        let resolved =
            DateRange::resolve(Some(date!(2024 - 05 - 01)), Some(date!(2024 - 05 - 01)), today);
        assert!(resolved.corrected);
        assert_eq!(resolved.range.start(), date!(2023 - 06 - 02));
    }

    #[test]
    fn end_bound_is_exclusive() {
        let range = DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 03)).expect("valid");
        assert!(range.contains(date!(2024 - 01 - 02)));
        assert!(!range.contains(date!(2024 - 01 - 03)));
    }

    #[test]
    fn unix_bounds_are_utc_midnight() {
        let range = DateRange::new(date!(1970 - 01 - 02), date!(1970 - 01 - 03)).expect("valid");
        assert_eq!(range.unix_bounds(), (86_400, 172_800));
    }

    #[test]
    fn parses_iso_dates_and_rejects_garbage() {
        assert_eq!(parse_date("2024-02-29").expect("leap day"), date!(2024 - 02 - 29));
        assert!(matches!(
            parse_date("02/29/2024"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn serializes_as_iso_strings() {
        let range = DateRange::new(date!(2024 - 01 - 01), date!(2024 - 02 - 01)).expect("valid");
        let json = serde_json::to_string(&range).expect("serializable");
        assert_eq!(json, r#"{"start":"2024-01-01","end":"2024-02-01"}"#);
    }

    #[test]
    fn deserializing_rejects_inverted_range() {
        let range: DateRange =
            serde_json::from_str(r#"{"start":"2024-01-01","end":"2024-02-01"}"#).expect("valid");
        assert_eq!(range.days(), 31);

        let inverted = serde_json::from_str::<DateRange>(
            r#"{"start":"2024-02-01","end":"2024-01-01"}"#,
        );
        assert!(inverted.is_err());
    }
}
