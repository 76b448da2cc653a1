//! Calendar month keys used for monthly aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, ordered chronologically and displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid month '{s}' (expected YYYY-MM)"))?;
        let year: i32 = y
            .parse()
            .map_err(|_| format!("invalid year in '{s}'"))?;
        let month: u32 = m
            .parse()
            .map_err(|_| format!("invalid month in '{s}'"))?;
        YearMonth::new(year, month).ok_or_else(|| format!("month out of range in '{s}'"))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2025-09".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2025, month: 9 });
        assert_eq!(ym.to_string(), "2025-09");
    }

    #[test]
    fn test_rejects_bad_months() {
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("abcd-01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_chronological_order() {
        let dec: YearMonth = "2024-12".parse().unwrap();
        let jan: YearMonth = "2025-01".parse().unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2025, 11).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"2025-11\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }
}
