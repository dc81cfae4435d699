//! The date type used by transaction fields.
//!
//! QuickBooks writes transaction dates as `YYYY-MM-DD` but some fields, and
//! some older minor versions, carry full RFC 3339 timestamps. [`QbDate`]
//! accepts both and writes back whichever form it was given.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a string is neither an RFC 3339 timestamp nor a
/// `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
pub struct InvalidDate(pub String);

/// A date or date-time as sent by the API.
///
/// Equality compares the instant; `2024-03-01` equals
/// `2024-03-01T00:00:00+00:00`.
#[derive(Debug, Clone, Copy)]
pub struct QbDate {
    instant: DateTime<FixedOffset>,
    date_only: bool,
}

impl QbDate {
    /// A calendar date at midnight UTC, written as `YYYY-MM-DD`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN).and_utc().fixed_offset();
        Self {
            instant: midnight,
            date_only: true,
        }
    }

    /// A full timestamp, written as RFC 3339.
    #[must_use]
    pub const fn from_datetime(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant,
            date_only: false,
        }
    }

    /// Today's date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The calendar date in the value's own offset.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// Whether the value was read or built without a time of day.
    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        self.date_only
    }
}

impl FromStr for QbDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::from_datetime(instant));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::from_date)
            .map_err(|_| InvalidDate(s.to_string()))
    }
}

impl fmt::Display for QbDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.date_only {
            write!(f, "{}", self.instant.format(DATE_FORMAT))
        } else {
            write!(f, "{}", self.instant.to_rfc3339())
        }
    }
}

impl PartialEq for QbDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for QbDate {}

impl From<NaiveDate> for QbDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl Serialize for QbDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QbDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_plain_date() {
        let date: QbDate = "2014-11-06".parse().unwrap();
        assert!(date.is_date_only());
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2014, 11, 6).unwrap());
        assert_eq!(date.to_string(), "2014-11-06");
    }

    #[test]
    fn test_parses_timestamp_with_offset_and_fraction() {
        let date: QbDate = "2024-03-01T10:15:30.123-08:00".parse().unwrap();
        assert!(!date.is_date_only());
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("11/06/2014".parse::<QbDate>().is_err());
        assert!("".parse::<QbDate>().is_err());
    }

    #[test]
    fn test_equality_compares_instant() {
        let date: QbDate = "2024-03-01".parse().unwrap();
        let midnight: QbDate = "2024-03-01T00:00:00+00:00".parse().unwrap();
        let shifted: QbDate = "2024-02-29T16:00:00-08:00".parse().unwrap();

        assert_eq!(date, midnight);
        assert_eq!(date, shifted);
    }

    #[test]
    fn test_serializes_in_original_form() {
        let date: QbDate = serde_json::from_value(json!("2014-11-06")).unwrap();
        assert_eq!(serde_json::to_value(date).unwrap(), json!("2014-11-06"));

        let stamp: QbDate = serde_json::from_value(json!("2015-07-24T10:33:39-07:00")).unwrap();
        assert_eq!(
            serde_json::to_value(stamp).unwrap(),
            json!("2015-07-24T10:33:39-07:00")
        );
    }
}
