//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror`. The `Display`
//! text of `AssistantError` is exactly what the user sees, so translating a
//! handler failure into a reply is just `to_string()`.

use crate::book::{BookError, RecordError};
use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Handler got the wrong number of arguments
    #[error("Missing contact name or phone or date")]
    MissingArguments,

    /// No command phrase matched the input; holds the first token
    #[error("Unknown command \"{0}\"")]
    UnknownCommand(String),

    /// A phrase matched but nothing is registered for it
    #[error("Unknown command \"{0}\"")]
    HandlerNotFound(String),

    /// A phone, date or name failed validation
    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Name: {0} not in address book")]
    NotFound(String),

    /// `show all` got a page size that is not a positive integer
    #[error("Page size must be a positive number, got: {0}")]
    InvalidPageSize(String),

    /// Record-level precondition failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Address book rejected the request
    #[error(transparent)]
    Book(#[from] BookError),
}

/// A blank name is reported like any other missing argument.
fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::EmptyName => AssistantError::MissingArguments.to_string(),
        other => other.to_string(),
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
