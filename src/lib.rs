//! Contact Assistant - an interactive, in-memory contact manager.
//!
//! Users type free-form commands to create contacts, attach phone numbers
//! and birthdays, change them, and page through the whole list.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **book**: Records, the address book, and its paginator
//! - **assistant**: Command matching, handlers, and error translation
//! - **terminal**: Line-oriented session loop over any reader/writer
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod terminal;

pub use assistant::{Assistant, CommandRegistry, Reply};
pub use book::{AddressBook, Page, Paginator, Record};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{AssistantError, ConfigError};
pub use terminal::Terminal;
