//! Entered-command history with an Arrow-Up/Down cursor.

/// Append-only list of entered lines plus a browsing cursor.
///
/// The cursor ranges over `0..=len`; `len` means "past the newest entry",
/// which is where every submitted command leaves it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entered line and park the cursor past it.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.reset_cursor();
    }

    /// Park the cursor past the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Arrow-Up: step back one entry.
    ///
    /// Returns `None` when already at the oldest entry (or there is no
    /// history); the input buffer should then be left as it is.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Arrow-Down: step forward one entry.
    ///
    /// Returns `None` once the cursor moves past the newest entry; the input
    /// buffer should then be cleared.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(lines: &[&str]) -> CommandHistory {
        let mut h = CommandHistory::new();
        for line in lines {
            h.push(*line);
        }
        h
    }

    #[test]
    fn test_push_parks_cursor_at_end() {
        let h = history(&["ls", "cd documents"]);
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.entries(), &["ls".to_string(), "cd documents".to_string()]);
    }

    #[test]
    fn test_previous_walks_back_and_stops_at_oldest() {
        let mut h = history(&["ls", "cd documents", "open cert_c3sa.pdf"]);
        assert_eq!(h.previous(), Some("open cert_c3sa.pdf"));
        assert_eq!(h.previous(), Some("cd documents"));
        assert_eq!(h.previous(), Some("ls"));
        assert_eq!(h.previous(), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_next_clears_past_newest() {
        let mut h = history(&["ls", "cd documents"]);
        h.previous();
        h.previous();
        assert_eq!(h.next(), Some("cd documents"));
        assert_eq!(h.next(), None);
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.next(), None);
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn test_empty_history() {
        let mut h = CommandHistory::new();
        assert_eq!(h.previous(), None);
        assert_eq!(h.next(), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_reset_after_browsing() {
        let mut h = history(&["ls", "clear"]);
        h.previous();
        h.previous();
        h.push("matrix");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.previous(), Some("matrix"));
    }
}
