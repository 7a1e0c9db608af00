//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static DAY_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").expect("Failed to compile date regex"));

static YEAR_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("Failed to compile date regex"));

/// A contact's date of birth.
///
/// Accepts `DD-MM-YYYY` or `YYYY-MM-DD`, where the separator may be `-`,
/// `/`, `.` or a space. The value is stored as a calendar date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("01.02.2000").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2000, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from user input.
    ///
    /// Day-first is tried before year-first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input matches neither
    /// pattern or names a date that does not exist.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = date.as_ref();
        let normalized = Self::normalize(raw);

        Self::parse(&normalized)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    fn normalize(date: &str) -> String {
        date.trim().replace([' ', '/', '.'], "-")
    }

    fn parse(normalized: &str) -> Option<NaiveDate> {
        if DAY_FIRST.is_match(normalized) {
            if let Ok(date) = NaiveDate::parse_from_str(normalized, "%d-%m-%Y") {
                return Some(date);
            }
        }
        if YEAR_FIRST.is_match(normalized) {
            return NaiveDate::parse_from_str(normalized, "%Y-%m-%d").ok();
        }
        None
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

// Serde support - serialize as ISO date string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

// Serde support - deserialize from either supported pattern
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
