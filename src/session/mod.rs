//! The input line and everything that happens to it.
//!
//! An [`InputSession`] owns the text being typed, its cursor, and the
//! submitted-line history. The registry and scrollback it acts on are
//! borrowed per event, so one session never holds on to either.
mod complete;
mod editing;
mod history;
mod submit;

pub use complete::longest_common_prefix;
pub use history::HistoryBuffer;

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Nothing beyond redrawing.
    None,
    /// Hide or close the console.
    Hide,
    /// Shut the host down.
    Exit,
}

/// Input line, cursor, and history navigation state.
#[derive(Debug, Clone)]
pub struct InputSession {
    input: String,
    /// Cursor position in characters, `0..=input.chars().count()`.
    cursor: usize,
    history: HistoryBuffer,
    /// `None` while editing live input, otherwise an index into `history`.
    history_position: Option<usize>,
    /// Set on history recall; moves the cursor to the end at the next frame.
    pending_cursor_fix: bool,
}

impl InputSession {
    /// Creates an empty session remembering up to `max_history` lines.
    pub fn new(max_history: usize) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            history: HistoryBuffer::new(max_history),
            history_position: None,
            pending_cursor_fix: false,
        }
    }

    /// Clears the input and leaves history browsing. History itself is kept.
    pub fn reset(&mut self) {
        self.clear_input();
        self.history_position = None;
        self.pending_cursor_fix = false;
    }

    /// Applies deferred cursor corrections. Call once per rendered frame,
    /// before reading [`cursor`](Self::cursor).
    pub fn begin_frame(&mut self) {
        self.apply_cursor_fix();
    }

    pub(crate) fn apply_cursor_fix(&mut self) {
        if std::mem::take(&mut self.pending_cursor_fix) {
            self.cursor_end();
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the recalled history entry, `None` for live input.
    pub fn history_position(&self) -> Option<usize> {
        self.history_position
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn has_pending_cursor_fix(&self) -> bool {
        self.pending_cursor_fix
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_HISTORY)
    }
}
