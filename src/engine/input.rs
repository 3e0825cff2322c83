//! Input unit classification
//!
//! The rendering surface delivers raw chunks: single keystrokes, escape
//! sequences, or whole pasted strings. Each chunk is classified as one unit;
//! chunks are never split or coalesced.

/// End of text (Ctrl+C)
pub const ETX: char = '\x03';
/// Delete (Backspace key)
pub const DEL: &str = "\x7f";
/// Carriage return (Enter key)
pub const CR: &str = "\r";

/// Cursor up: normal and application cursor mode
const CURSOR_UP: [&str; 2] = ["\x1b[A", "\x1bOA"];
/// Cursor down: normal and application cursor mode
const CURSOR_DOWN: [&str; 2] = ["\x1b[B", "\x1bOB"];

/// One classified input chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputUnit<'a> {
    /// Ctrl+C: any chunk whose first character is ETX
    Interrupt,
    /// Up arrow
    HistoryOlder,
    /// Down arrow
    HistoryNewer,
    /// Enter
    Submit,
    /// Backspace
    Backspace,
    /// Anything else, echoed and appended verbatim
    Text(&'a str),
}

impl<'a> InputUnit<'a> {
    pub fn classify(data: &'a str) -> Self {
        if data.starts_with(ETX) {
            return InputUnit::Interrupt;
        }
        if CURSOR_UP.contains(&data) {
            return InputUnit::HistoryOlder;
        }
        if CURSOR_DOWN.contains(&data) {
            return InputUnit::HistoryNewer;
        }
        match data {
            CR => InputUnit::Submit,
            DEL => InputUnit::Backspace,
            other => InputUnit::Text(other),
        }
    }
}
