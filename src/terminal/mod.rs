//! Line-oriented terminal session.
//!
//! The terminal is the only part of the program that reads input or writes
//! output. It feeds each line to the `Assistant`, prints the reply, and when
//! a command returns pages it waits for one acknowledgment line between
//! pages.

use crate::assistant::{Assistant, Reply};
use crate::book::Paginator;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Shown before every command.
pub const PROMPT: &str = "Please enter request: ";

/// Shown between pages of `show all`.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue: ";

/// An interactive session over any line reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    assistant: Assistant,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, assistant: Assistant) -> Self {
        Self {
            input,
            output,
            assistant,
        }
    }

    /// Run until an exit command or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing fails.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                debug!("input closed");
                break;
            };

            match self.assistant.handle(&line) {
                Reply::Text(text) => writeln!(self.output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(self.output, "{}", text)?;
                    break;
                }
                Reply::Pages(pages) => {
                    if !page_through(&mut self.input, &mut self.output, pages)? {
                        debug!("input closed while paging");
                        break;
                    }
                }
            }
        }

        self.output.flush()?;
        info!("session ended");
        Ok(())
    }

    /// Give back the assistant and the writer.
    pub fn into_parts(self) -> (Assistant, W) {
        (self.assistant, self.output)
    }
}

/// Print every page, waiting for a line of input before each one after the
/// first. Returns `false` if input ran out.
fn page_through<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut pages: Paginator<'_>,
) -> Result<bool> {
    writeln!(output, "Showing all contacts")?;

    while let Some(page) = pages.next_page() {
        writeln!(output, "{}", page)?;
        if !pages.has_next() {
            break;
        }

        write!(output, "{}", CONTINUE_PROMPT)?;
        output.flush()?;
        if read_line(input)?.is_none() {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(line))
}
