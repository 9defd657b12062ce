//! A [`Terminal`] backed by standard input and output.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use std::io::{self, BufRead, Write};

use crate::error::TerminalError;
use crate::terminal::{Terminal, Tone};

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn tone_code(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Plain => None,
        Tone::Win => Some("92"),
        Tone::Push => Some("32"),
        Tone::Loss => Some("91"),
        Tone::Warning => Some("31"),
        Tone::Highlight => Some("96"),
    }
}

/// Interactive console terminal.
///
/// Notifications are colored with ANSI escapes unless the `NO_COLOR`
/// environment variable is set.
#[derive(Debug)]
pub struct ConsoleTerminal<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
    color: bool,
}

impl ConsoleTerminal {
    /// Creates a terminal over the process's stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    /// Creates a terminal over arbitrary streams, without color.
    pub const fn from_streams(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// Enables or disables ANSI color.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the terminal and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}").and_then(|()| self.output.flush()) {
            log::warn!("failed to write to terminal: {err}");
        }
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn prompt_line(&mut self, message: &str) -> Result<String, TerminalError> {
        self.write_line(message);

        let mut input = String::new();
        match self.input.read_line(&mut input) {
            Ok(0) => Err(TerminalError::Closed),
            Ok(_) => {
                let line = input.trim_end_matches(['\r', '\n']);
                Ok(String::from(line))
            }
            Err(err) => {
                log::error!("failed to read from terminal: {err}");
                Err(TerminalError::Read)
            }
        }
    }

    fn notify(&mut self, message: &str, tone: Tone) {
        match tone_code(tone) {
            Some(code) if self.color => {
                let line = colorize(message, code);
                self.write_line(&line);
            }
            _ => self.write_line(message),
        }
    }
}
