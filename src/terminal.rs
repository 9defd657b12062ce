//! The seam between the round engine and whatever talks to the humans.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::error::TerminalError;

/// Semantic emphasis for a notification. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Ordinary table talk.
    Plain,
    /// Something went the player's way.
    Win,
    /// A tie.
    Push,
    /// Something went against the player.
    Loss,
    /// Rejected input.
    Warning,
    /// A decision being acted on.
    Highlight,
}

/// Prompts and notifications for the people at the table.
///
/// Implementors supply [`prompt_line`](Terminal::prompt_line) and
/// [`notify`](Terminal::notify); the typed prompts are built on top of them.
pub trait Terminal {
    /// Shows `message` and returns one line of input, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns an error if no line can be read.
    fn prompt_line(&mut self, message: &str) -> Result<String, TerminalError>;

    /// Shows a line of output.
    fn notify(&mut self, message: &str, tone: Tone);

    /// Shows `message` and reads an integer, treating non-numeric input as 0.
    ///
    /// # Errors
    ///
    /// Returns an error if no line can be read.
    fn prompt_integer(&mut self, message: &str) -> Result<i64, TerminalError> {
        self.prompt_line(message)
            .map(|line| parse_lenient_integer(&line))
    }

    /// Shows `message` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns an error if no line can be read.
    fn prompt_choice(&mut self, message: &str) -> Result<String, TerminalError> {
        self.prompt_line(message).map(|line| line.trim().to_string())
    }
}

/// Parses the leading integer of `input`, like a lenient `to_i`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Input without leading digits yields 0, and values too large for
/// `i64` saturate.
///
/// # Example
///
/// ```
/// use bjtable::parse_lenient_integer;
///
/// assert_eq!(parse_lenient_integer(" 25 pounds"), 25);
/// assert_eq!(parse_lenient_integer("-7"), -7);
/// assert_eq!(parse_lenient_integer("ten"), 0);
/// ```
#[must_use]
pub fn parse_lenient_integer(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative { -value } else { value }
}
