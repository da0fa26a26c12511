//! Release stamp derivation
//!
//! The release version is the release date as `YY.MM.DD`; the copyright year
//! is the four-digit calendar year of the same date.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version and year computed for one release run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseStamp {
    /// Date the stamp was derived from
    pub date: NaiveDate,
    /// Date-encoded version, e.g. `24.03.07`
    pub version: String,
    /// Four-digit year, e.g. `2024`
    pub year: String,
}

impl ReleaseStamp {
    /// Derive the stamp for a given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            version: date.format("%y.%m.%d").to_string(),
            year: format!("{:04}", date.year()),
        }
    }

    /// Derive the stamp for today's local date
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Use the override when given, today otherwise
    pub fn for_date(date: Option<NaiveDate>) -> Self {
        date.map_or_else(Self::today, Self::from_date)
    }

    /// Format as environment file lines
    pub fn to_env(&self) -> String {
        format!("VERSION={}\nYEAR={}\n", self.version, self.year)
    }
}

impl fmt::Display for ReleaseStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{} ({})", self.version, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_version_is_two_digit_date() {
        let stamp = ReleaseStamp::from_date(date(2024, 3, 7));
        assert_eq!(stamp.version, "24.03.07");
        assert_eq!(stamp.year, "2024");
    }

    #[test]
    fn test_version_pads_century_years() {
        let stamp = ReleaseStamp::from_date(date(2100, 12, 31));
        assert_eq!(stamp.version, "00.12.31");
        assert_eq!(stamp.year, "2100");
    }

    #[test]
    fn test_today_matches_shape_and_calendar() {
        let shape = Regex::new(r"^\d{2}\.\d{2}\.\d{2}$").unwrap();
        let year_shape = Regex::new(r"^\d{4}$").unwrap();

        let stamp = ReleaseStamp::today();
        let now = Local::now().date_naive();

        assert!(shape.is_match(&stamp.version));
        assert!(year_shape.is_match(&stamp.year));
        // Guard against running across midnight
        if stamp.date == now {
            assert_eq!(stamp.version, now.format("%y.%m.%d").to_string());
            assert_eq!(stamp.year, now.year().to_string());
        }
    }

    #[test]
    fn test_for_date_prefers_override() {
        let stamp = ReleaseStamp::for_date(Some(date(2023, 1, 15)));
        assert_eq!(stamp.version, "23.01.15");
    }

    #[test]
    fn test_to_env() {
        let stamp = ReleaseStamp::from_date(date(2024, 3, 7));
        assert_eq!(stamp.to_env(), "VERSION=24.03.07\nYEAR=2024\n");
        assert_eq!(stamp.to_string(), "v24.03.07 (2024)");
    }
}
