//! In-progress input line
//!
//! Single-line, tail-only editing: text is appended at the end and
//! backspace removes the last character. There is no cursor.

use unicode_width::UnicodeWidthChar;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove the last character, if any
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the whole line (history recall)
    pub fn replace(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Take the line, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Control sequence that visually erases `ch` from the end of the line.
///
/// Wide glyphs take two columns, zero-width marks none.
pub fn erase_sequence(ch: char) -> String {
    let width = ch.width().unwrap_or(0);
    let mut seq = String::with_capacity(width * 3);
    for _ in 0..width {
        seq.push('\x08');
    }
    for _ in 0..width {
        seq.push(' ');
    }
    for _ in 0..width {
        seq.push('\x08');
    }
    seq
}
