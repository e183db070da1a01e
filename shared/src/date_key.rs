//! Calendar date keys in `YYYY-MM-DD` form.
//!
//! Availability is looked up by calendar date, never by instant, so the key
//! wraps a `NaiveDate` and has exactly one textual form. Generation and
//! lookup both go through [`DateKey`], which keeps them from disagreeing
//! about time zones.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateKeyError {
    #[error("Date key must look like YYYY-MM-DD, got {0:?}")]
    InvalidFormat(String),
    #[error("Date key {0:?} is not a real calendar date")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from year/month/day parts, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// The shape is checked before chrono sees it so that inputs like
    /// `2026-1-5` or `2026-01-05T10:00` are rejected instead of being
    /// accepted leniently.
    pub fn parse(input: &str) -> Result<Self, DateKeyError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateKeyError::InvalidFormat(input.to_string()));
        }

        NaiveDate::parse_from_str(input, KEY_FORMAT)
            .map(Self)
            .map_err(|_| DateKeyError::InvalidDate(input.to_string()))
    }

    pub fn format(&self) -> String {
        self.0.format(KEY_FORMAT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The key `days` days after this one
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let key = DateKey::parse("2026-10-19").unwrap();
        assert_eq!(key.year(), 2026);
        assert_eq!(key.month(), 10);
        assert_eq!(key.day(), 19);
        assert_eq!(key.format(), "2026-10-19");
        assert_eq!(key.to_string(), "2026-10-19");
    }

    #[test]
    fn test_parse_pads_are_required() {
        assert_eq!(
            DateKey::parse("2026-1-05"),
            Err(DateKeyError::InvalidFormat("2026-1-05".to_string()))
        );
        assert!(DateKey::parse("2026-01-05T09:00").is_err());
        assert!(DateKey::parse("").is_err());
        assert!(DateKey::parse("2026/01/05").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        // Shape is fine, calendar says no
        assert_eq!(
            DateKey::parse("2026-02-30"),
            Err(DateKeyError::InvalidDate("2026-02-30".to_string()))
        );
        assert!(DateKey::parse("2026-13-01").is_err());
        // Leap day only exists in leap years
        assert!(DateKey::parse("2028-02-29").is_ok());
        assert!(DateKey::parse("2027-02-29").is_err());
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        let key = DateKey::from_ymd(2026, 12, 30).unwrap();
        assert_eq!(key.add_days(1).format(), "2026-12-31");
        assert_eq!(key.add_days(2).format(), "2027-01-01");
        assert_eq!(key.add_days(-30).format(), "2026-11-30");
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let a = DateKey::parse("2026-09-30").unwrap();
        let b = DateKey::parse("2026-10-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let key = DateKey::parse("2026-10-19").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2026-10-19\"");

        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<DateKey>("\"19/10/2026\"").is_err());
    }
}
