//! Command layer: turns a line of input into a reply.
//!
//! A line is matched against the phrase table, the rest of the line is split
//! into arguments, and the bound handler runs against the address book.
//! Handler failures come back as `AssistantError` and are rendered to text in
//! one place, `Assistant::handle`.

pub mod commands;
pub mod handlers;

pub use commands::{match_phrase, CommandRegistry, Handler, COMMAND_PHRASES};

use crate::book::{AddressBook, Paginator};
use crate::config::Config;
use crate::error::{AssistantError, AssistantResult};
use tracing::{debug, warn};

/// What a command produced.
#[derive(Debug)]
pub enum Reply<'a> {
    /// Text to print
    Text(String),

    /// Contacts to show page by page; the caller decides when to advance
    Pages(Paginator<'a>),

    /// Text to print before ending the session
    Exit(String),
}

/// Split a command payload into positional arguments.
///
/// An empty payload has no arguments. A payload containing `", "` is split
/// once on it; otherwise it is split once on the last space.
pub fn split_arguments(payload: &str) -> Vec<String> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Vec::new();
    }

    let parts = payload
        .split_once(", ")
        .or_else(|| payload.rsplit_once(' '));

    match parts {
        Some((first, second)) => vec![first.to_string(), second.to_string()],
        None => vec![payload.to_string()],
    }
}

/// The address book together with the commands that operate on it.
#[derive(Debug)]
pub struct Assistant {
    book: AddressBook,
    registry: CommandRegistry,
    config: Config,
}

impl Assistant {
    /// An assistant with an empty book and the standard commands.
    pub fn new(config: Config) -> Self {
        Self::with_parts(AddressBook::new(), CommandRegistry::default(), config)
    }

    pub fn with_parts(book: AddressBook, registry: CommandRegistry, config: Config) -> Self {
        Self {
            book,
            registry,
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and run one line, keeping failures as errors.
    pub fn dispatch(&mut self, line: &str) -> AssistantResult<Reply<'_>> {
        let line = line.trim();

        let Some((phrase, payload)) = match_phrase(line) else {
            let token = line.split(' ').next().unwrap_or_default();
            return Err(AssistantError::UnknownCommand(token.to_string()));
        };

        let handler = self
            .registry
            .get(phrase)
            .ok_or_else(|| AssistantError::HandlerNotFound(phrase.to_string()))?;

        let args = split_arguments(payload);
        debug!(command = phrase, args = args.len(), "dispatching");
        handler(&mut self.book, &self.config, args)
    }

    /// Run one line and translate any failure into a text reply.
    pub fn handle(&mut self, line: &str) -> Reply<'_> {
        match self.dispatch(line) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = ?e, "command failed");
                Reply::Text(e.to_string())
            }
        }
    }
}
