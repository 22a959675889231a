use super::InputSession;

impl InputSession {
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Replaces the input line and puts the cursor at its end.
    pub fn set_input(&mut self, input: &str) {
        self.apply_cursor_fix();
        self.input = input.to_string();
        self.history_position = None;
        self.cursor_end();
    }

    pub fn insert_char(&mut self, c: char) {
        self.apply_cursor_fix();
        let byte_pos = self.byte_offset(self.cursor);
        self.input.insert(byte_pos, c);
        self.cursor += 1;
        self.history_position = None;
    }

    /// Backspace. Returns whether a character was removed.
    pub fn delete_before_cursor(&mut self) -> bool {
        self.apply_cursor_fix();
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = self.byte_offset(self.cursor - 1);
        self.input.remove(byte_pos);
        self.cursor -= 1;
        self.history_position = None;
        true
    }

    /// Delete. Returns whether a character was removed.
    pub fn delete_at_cursor(&mut self) -> bool {
        self.apply_cursor_fix();
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_offset(self.cursor);
        self.input.remove(byte_pos);
        self.history_position = None;
        true
    }

    pub fn cursor_left(&mut self) {
        self.apply_cursor_fix();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.apply_cursor_fix();
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.apply_cursor_fix();
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.char_count());
    }

    pub(super) fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_are_char_aware() {
        let mut session = InputSession::new(10);
        for c in "héllo".chars() {
            session.insert_char(c);
        }
        session.cursor_left();
        session.cursor_left();
        session.cursor_left();
        session.cursor_left();
        assert!(session.delete_at_cursor());
        assert_eq!(session.input(), "hllo");

        session.cursor_home();
        session.insert_char('¡');
        assert_eq!(session.input(), "¡hllo");
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_does_nothing() {
        let mut session = InputSession::new(10);
        session.set_input("ab");
        session.cursor_home();
        assert!(!session.delete_before_cursor());
        session.cursor_end();
        assert!(session.delete_before_cursor());
        assert_eq!(session.input(), "a");
    }

    #[test]
    fn cursor_right_stops_at_end() {
        let mut session = InputSession::new(10);
        session.set_input("ab");
        session.cursor_right();
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn typing_leaves_history_browsing() {
        let mut session = InputSession::new(10);
        session.history.push("old".into());
        session.history_up();
        assert_eq!(session.history_position(), Some(0));

        session.insert_char('!');
        assert_eq!(session.history_position(), None);
        assert_eq!(session.input(), "old!");
    }
}
