use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use devconsole::{ConsoleEvent, SessionAction};
use tracing::debug;

use crate::ui::UIEvent;

use super::TerminalUI;

/// Key that shows and hides the console.
pub(super) const TOGGLE_KEY: char = '`';

/// What a key press means to the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    Quit,
    Toggle,
    PageUp,
    PageDown,
    Console(ConsoleEvent),
    Ignore,
}

/// Maps a key press. While the console is hidden only the toggle key and
/// Ctrl+C do anything.
pub(super) fn key_action(key: KeyEvent, visible: bool) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
        (KeyCode::Char(TOGGLE_KEY), m) if !m.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Toggle
        }
        _ => {}
    }

    if !visible {
        return KeyAction::Ignore;
    }

    let event = match key.code {
        KeyCode::Enter => ConsoleEvent::Submit,
        KeyCode::Esc => ConsoleEvent::Escape,
        KeyCode::Tab => ConsoleEvent::Tab,
        KeyCode::Up => ConsoleEvent::HistoryUp,
        KeyCode::Down => ConsoleEvent::HistoryDown,
        KeyCode::Left => ConsoleEvent::CursorLeft,
        KeyCode::Right => ConsoleEvent::CursorRight,
        KeyCode::Home => ConsoleEvent::CursorHome,
        KeyCode::End => ConsoleEvent::CursorEnd,
        KeyCode::Backspace => ConsoleEvent::Backspace,
        KeyCode::Delete => ConsoleEvent::Delete,
        KeyCode::PageUp => return KeyAction::PageUp,
        KeyCode::PageDown => return KeyAction::PageDown,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ConsoleEvent::Insert(c)
        }
        _ => return KeyAction::Ignore,
    };
    KeyAction::Console(event)
}

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<()> {
        match event {
            UIEvent::KeyPress(key_event) => self.handle_key_event(key_event),
            UIEvent::Resize(width, height) => {
                self.terminal_size = (width, height);
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key_action(key, self.console.is_visible()) {
            KeyAction::Quit => {
                debug!("Ctrl+C pressed, exiting");
                self.should_exit = true;
            }
            KeyAction::Toggle => {
                self.console.toggle();
                self.scroll_offset = 0;
            }
            KeyAction::PageUp => {
                self.scroll_offset += self.page_size();
            }
            KeyAction::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(self.page_size());
            }
            KeyAction::Console(event) => match self.console.handle(event) {
                SessionAction::None => {}
                SessionAction::Hide => self.console.hide(),
                SessionAction::Exit => self.should_exit = true,
            },
            KeyAction::Ignore => {}
        }
    }
}
