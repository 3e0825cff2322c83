//! Command history for termo
//!
//! Keeps submitted lines for the lifetime of a session and provides the
//! Up/Down browsing cursor. Nothing is persisted.

/// Submitted lines plus a browsing cursor
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// All submitted lines (oldest first)
    entries: Vec<String>,
    /// Browsing position: `None` while editing a live line, `Some(0)` on the
    /// newest entry, increasing toward the oldest
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing.
    ///
    /// Empty lines are never recorded.
    pub fn append(&mut self, line: String) {
        if line.is_empty() {
            return;
        }
        self.entries.push(line);
        self.reset_cursor();
    }

    /// Stop browsing; the line buffer is live text again
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step one entry into the past.
    ///
    /// Returns the entry now under the cursor, or `None` when already at the
    /// oldest entry (or the history is empty).
    pub fn navigate_older(&mut self) -> Option<&str> {
        let next = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Step one entry toward the present.
    ///
    /// Leaving the newest entry returns `Some("")` (the line is cleared);
    /// when not browsing at all this is a no-op returning `None`.
    pub fn navigate_newer(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                self.entry_at(i - 1)
            }
        }
    }

    /// Current browsing position (`None` = not browsing)
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything (session teardown)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    // Cursor 0 is the newest entry
    fn entry_at(&self, cursor: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(cursor + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
