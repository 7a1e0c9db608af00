//! Contact records and the address book that owns them.
//!
//! - **record**: one contact with its phones and optional birthday
//! - **address_book**: insertion-ordered collection of records keyed by name
//! - **paginator**: caller-driven cursor that renders the book page by page

pub mod address_book;
pub mod paginator;
pub mod record;

pub use address_book::AddressBook;
pub use paginator::{Page, Paginator};
pub use record::Record;

use thiserror::Error;

/// Errors raised by a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Days-to-birthday was requested for a contact without a birthday
    #[error("Contact Name: {0} has no Birthday")]
    BirthdayNotSet(String),
}

/// Errors raised by the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Pagination needs at least one record per page
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
