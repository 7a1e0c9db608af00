//! Phone value object.

use super::errors::ValidationError;
use super::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Formatting characters dropped before validation.
static PHONE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+\-() ]").expect("Failed to compile phone punctuation regex"));

/// Number of digits every stored phone number has.
pub const PHONE_DIGITS: usize = 12;

/// A normalized phone number.
///
/// Construction strips surrounding whitespace and the characters `+ - ( )`
/// and spaces, then requires exactly twelve ASCII digits. The original
/// formatting is not kept.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("+38 (067) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "380671234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, normalizing and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the normalized number is not
    /// exactly twelve digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let normalized = Self::normalize(raw);

        if !Self::is_valid(&normalized) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    fn normalize(phone: &str) -> String {
        PHONE_PUNCTUATION.replace_all(phone.trim(), "").into_owned()
    }

    fn is_valid(normalized: &str) -> bool {
        normalized.len() == PHONE_DIGITS && normalized.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
