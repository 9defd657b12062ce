//! Console terminal tests over in-memory streams.

#![cfg(feature = "std")]

use std::io::Cursor;

use bjtable::{ConsoleTerminal, Terminal, TerminalError, Tone};

fn console(input: &str) -> ConsoleTerminal<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleTerminal::from_streams(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn written(term: ConsoleTerminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(term.into_output()).unwrap()
}

#[test]
fn prompt_writes_question_and_reads_line() {
    let mut term = console("12\r\nnext\n");

    assert_eq!(term.prompt_integer("How many?"), Ok(12));
    assert_eq!(term.prompt_line("Again?"), Ok("next".to_string()));
    assert_eq!(written(term), "How many?\nAgain?\n");
}

#[test]
fn choice_is_trimmed() {
    let mut term = console("  h  \n");

    assert_eq!(term.prompt_choice("Hit or stand?"), Ok("h".to_string()));
}

#[test]
fn end_of_input_is_closed() {
    let mut term = console("only\n");

    assert!(term.prompt_line("first").is_ok());
    assert_eq!(term.prompt_line("second"), Err(TerminalError::Closed));
    assert_eq!(term.prompt_integer("third"), Err(TerminalError::Closed));
}

#[test]
fn notifications_are_plain_without_color() {
    let mut term = console("");

    term.notify("Player 1 wins", Tone::Win);
    term.notify("Player 2 lost", Tone::Loss);

    assert_eq!(written(term), "Player 1 wins\nPlayer 2 lost\n");
}

#[test]
fn notifications_are_colored_by_tone() {
    let mut term = console("").with_color(true);

    term.notify("win", Tone::Win);
    term.notify("push", Tone::Push);
    term.notify("plain", Tone::Plain);
    term.notify("warning", Tone::Warning);

    assert_eq!(
        written(term),
        "\u{1b}[92mwin\u{1b}[0m\n\u{1b}[32mpush\u{1b}[0m\nplain\n\u{1b}[31mwarning\u{1b}[0m\n"
    );
}
