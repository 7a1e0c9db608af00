//! Command vocabulary and handler registry.

use super::handlers;
use super::Reply;
use crate::book::AddressBook;
use crate::config::Config;
use crate::error::AssistantResult;
use std::collections::HashMap;

/// A command handler: reads or mutates the book and produces a reply.
pub type Handler =
    for<'a> fn(&'a mut AddressBook, &Config, Vec<String>) -> AssistantResult<Reply<'a>>;

/// Every recognised phrase, in match order. The first phrase the input
/// starts with (ignoring ASCII case) wins.
pub const COMMAND_PHRASES: &[&str] = &[
    "hello",
    "add contact",
    "+c",
    "add phone",
    "+p",
    "change phone",
    "remove phones",
    "show all",
    "show contact",
    "?c",
    "exit",
    "goodbye",
    "good bye",
    "close",
    "add birthday",
    "+b",
    "change birthday",
];

/// Finds the first phrase `line` starts with.
///
/// Returns the phrase and the untouched remainder of `line`.
pub fn match_phrase(line: &str) -> Option<(&'static str, &str)> {
    COMMAND_PHRASES.iter().find_map(|&phrase| {
        let head = line.get(..phrase.len())?;
        if head.eq_ignore_ascii_case(phrase) {
            Some((phrase, &line[phrase.len()..]))
        } else {
            None
        }
    })
}

/// Maps command phrases to their handlers.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandRegistry {
    /// An empty registry; every phrase resolves to "handler not found".
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, phrase: &'static str, handler: Handler) {
        self.handlers.insert(phrase, handler);
    }

    /// Drop the handler bound to `phrase`, returning it if there was one.
    pub fn unregister(&mut self, phrase: &str) -> Option<Handler> {
        self.handlers.remove(phrase)
    }

    pub fn get(&self, phrase: &str) -> Option<Handler> {
        self.handlers.get(phrase).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    /// The standard vocabulary with all synonyms bound.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("hello", handlers::hello);
        registry.register("add contact", handlers::add_contact);
        registry.register("+c", handlers::add_contact);
        registry.register("add phone", handlers::add_phone);
        registry.register("+p", handlers::add_phone);
        registry.register("change phone", handlers::change_phone);
        registry.register("remove phones", handlers::remove_phones);
        registry.register("show all", handlers::show_all);
        registry.register("show contact", handlers::show_contact);
        registry.register("?c", handlers::show_contact);
        registry.register("exit", handlers::exit);
        registry.register("goodbye", handlers::exit);
        registry.register("good bye", handlers::exit);
        registry.register("close", handlers::exit);
        registry.register("add birthday", handlers::add_birthday);
        registry.register("+b", handlers::add_birthday);
        registry.register("change birthday", handlers::change_birthday);
        registry
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut phrases: Vec<_> = self.handlers.keys().collect();
        phrases.sort();
        f.debug_struct("CommandRegistry")
            .field("phrases", &phrases)
            .finish()
    }
}
