//! Shared helpers for integration tests.

use contact_assistant::{Assistant, Config, Reply, Terminal};
use std::io::Cursor;

/// Run a scripted session and return the assistant and everything printed.
#[allow(dead_code)]
pub fn run_script(script: &str, config: Config) -> (Assistant, String) {
    let mut terminal = Terminal::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Assistant::new(config),
    );
    terminal.run().expect("session should not fail on in-memory I/O");
    let (assistant, output) = terminal.into_parts();
    (
        assistant,
        String::from_utf8(output).expect("output should be UTF-8"),
    )
}

/// An assistant holding `count` contacts named `Contact0`, `Contact1`, ...
#[allow(dead_code)]
pub fn assistant_with_contacts(count: usize) -> Assistant {
    let mut assistant = Assistant::new(Config::default());
    for i in 0..count {
        expect_text(assistant.handle(&format!("add contact Contact{}", i)));
    }
    assistant
}

/// Unwrap a text reply.
#[allow(dead_code)]
pub fn expect_text(reply: Reply<'_>) -> String {
    match reply {
        Reply::Text(text) => text,
        other => panic!("Expected text reply, got: {:?}", other),
    }
}
