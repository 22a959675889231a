//! Submitted-line history and Up/Down navigation through it.
use std::collections::VecDeque;

use super::InputSession;
use crate::config::DEFAULT_MAX_HISTORY;

/// Previously submitted lines, most recent first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    max_size: usize,
}

impl HistoryBuffer {
    /// Creates an empty buffer remembering at most `max_size` lines.
    /// A size of zero remembers nothing.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
        }
    }

    /// Records `line` as the most recent entry, dropping the oldest entries
    /// beyond the bound.
    pub fn push(&mut self, line: String) {
        if self.max_size == 0 {
            return;
        }
        self.entries.push_front(line);
        self.entries.truncate(self.max_size);
    }

    /// The entry `index` steps back; `0` is the most recent.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl InputSession {
    /// Steps one entry further back in history.
    ///
    /// Stops at the oldest entry. The recalled line's cursor is moved to
    /// the end on the next frame boundary (see [`begin_frame`](Self::begin_frame)).
    pub fn history_up(&mut self) {
        self.apply_cursor_fix();
        if self.history.is_empty() {
            return;
        }

        let oldest = self.history.len() - 1;
        let position = match self.history_position {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.history_position = Some(position);

        if let Some(line) = self.history.get(position) {
            self.input = line.to_string();
        }
        self.clamp_cursor();
        self.pending_cursor_fix = true;
    }

    /// Steps one entry towards the present. Stepping past the most recent
    /// entry returns to an empty live input.
    pub fn history_down(&mut self) {
        self.apply_cursor_fix();
        match self.history_position {
            None | Some(0) => {
                self.history_position = None;
                self.clear_input();
            }
            Some(i) => {
                self.history_position = Some(i - 1);
                if let Some(line) = self.history.get(i - 1) {
                    self.input = line.to_string();
                }
                self.cursor_end();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut history = HistoryBuffer::new(10);
        history.push("a".into());
        history.push("b".into());
        assert_eq!(history.get(0), Some("b"));
        assert_eq!(history.get(1), Some("a"));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn oldest_entries_are_dropped() {
        let mut history = HistoryBuffer::new(2);
        for line in ["a", "b", "c"] {
            history.push(line.into());
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn zero_size_remembers_nothing() {
        let mut history = HistoryBuffer::new(0);
        history.push("a".into());
        assert!(history.is_empty());
    }

    fn session_with(lines: &[&str]) -> InputSession {
        let mut session = InputSession::new(10);
        for line in lines {
            session.history.push(line.to_string());
        }
        session
    }

    #[test]
    fn up_walks_back_and_clamps_at_oldest() {
        let mut session = session_with(&["a", "b", "c"]);

        let mut seen = Vec::new();
        for _ in 0..4 {
            session.history_up();
            seen.push(session.input().to_string());
        }
        assert_eq!(seen, vec!["c", "b", "a", "a"]);
        assert_eq!(session.history_position(), Some(2));
    }

    #[test]
    fn down_returns_to_live_input() {
        let mut session = session_with(&["a", "b", "c"]);
        for _ in 0..4 {
            session.history_up();
        }

        let mut seen = Vec::new();
        for _ in 0..3 {
            session.history_down();
            seen.push(session.input().to_string());
        }
        assert_eq!(seen, vec!["b", "c", ""]);
        assert_eq!(session.history_position(), None);
    }

    #[test]
    fn down_from_live_input_clears_it() {
        let mut session = session_with(&["a"]);
        session.set_input("draft");
        session.history_down();
        assert_eq!(session.input(), "");
        assert_eq!(session.history_position(), None);
    }

    #[test]
    fn up_with_empty_history_is_a_no_op() {
        let mut session = InputSession::new(10);
        session.set_input("draft");
        session.history_up();
        assert_eq!(session.input(), "draft");
        assert_eq!(session.history_position(), None);
    }

    #[test]
    fn recalled_line_cursor_lands_at_end_on_next_frame() {
        let mut session = session_with(&["a longer line"]);
        session.history_up();
        assert!(session.has_pending_cursor_fix());

        session.begin_frame();
        assert!(!session.has_pending_cursor_fix());
        assert_eq!(session.cursor(), "a longer line".chars().count());
    }

    #[test]
    fn down_moves_cursor_to_end_immediately() {
        let mut session = session_with(&["first", "second"]);
        session.history_up();
        session.history_up();
        session.history_down();
        assert_eq!(session.input(), "second");
        assert_eq!(session.cursor(), 6);
    }
}
