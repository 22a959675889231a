//! The bounded transcript shown above the input line.
use std::collections::VecDeque;

use crate::config::DEFAULT_MAX_LINES;

/// A bounded, append-only transcript.
///
/// Once more than `max_lines` lines are stored the oldest ones are evicted.
/// The joined [`text`](Self::text) view is rebuilt on every append so a
/// renderer can borrow it each frame without allocating.
#[derive(Debug, Clone)]
pub struct ScrollbackLog {
    lines: VecDeque<String>,
    max_lines: usize,
    text: String,
    has_new_lines: bool,
    appended: u64,
}

impl ScrollbackLog {
    /// Creates an empty log holding at most [`DEFAULT_MAX_LINES`] lines.
    pub fn new() -> Self {
        Self::with_max_lines(DEFAULT_MAX_LINES)
    }

    /// Creates an empty log holding at most `max_lines` lines (at least one).
    pub fn with_max_lines(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines,
            text: String::new(),
            has_new_lines: false,
            appended: 0,
        }
    }

    /// Appends a message.
    ///
    /// Each `\n`-separated segment becomes its own line; an empty message
    /// becomes one empty line.
    pub fn log(&mut self, message: &str) {
        if message.is_empty() {
            self.push_line(String::new());
        } else {
            for line in message.lines() {
                self.push_line(line.to_string());
            }
        }

        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }

        self.rebuild_text();
        self.has_new_lines = true;
    }

    fn push_line(&mut self, line: String) {
        self.lines.push_back(line);
        self.appended += 1;
    }

    fn rebuild_text(&mut self) {
        self.text.clear();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                self.text.push('\n');
            }
            self.text.push_str(line);
        }
    }

    /// Returns whether lines were appended since the last call, then resets
    /// the flag. A second call without an intervening append returns `false`.
    pub fn take_new_lines(&mut self) -> bool {
        std::mem::take(&mut self.has_new_lines)
    }

    /// The transcript, oldest line first, joined by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stored lines, oldest first.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    /// Total number of lines ever appended, evicted ones included.
    ///
    /// Hosts that print incrementally compare this against a previous value
    /// to find the lines they have not shown yet.
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Removes every line. Counts as a change for [`take_new_lines`](Self::take_new_lines).
    pub fn clear(&mut self) {
        self.lines.clear();
        self.text.clear();
        self.has_new_lines = true;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
}

impl Default for ScrollbackLog {
    fn default() -> Self {
        Self::new()
    }
}
