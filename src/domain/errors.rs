//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number does not normalize to 12 digits.
    InvalidPhone(String),

    /// The provided date matches neither supported pattern.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Wrong phone format"),
            Self::InvalidDate(_) => write!(f, "Wrong date format"),
        }
    }
}

impl std::error::Error for ValidationError {}
