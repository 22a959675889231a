//! The object a host drives: one registry, one scrollback, one session.
use tracing::debug;

use crate::commands::{CommandHandler, CommandOutput, CommandRegistry};
use crate::config::ConsoleConfig;
use crate::logging::ScrollbackLog;
use crate::session::{InputSession, SessionAction};

/// A discrete input event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEvent {
    Submit,
    Escape,
    Tab,
    HistoryUp,
    HistoryDown,
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// An interactive command console.
pub struct Console {
    registry: CommandRegistry,
    log: ScrollbackLog,
    session: InputSession,
    visible: bool,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            registry: CommandRegistry::new(),
            log: ScrollbackLog::with_max_lines(config.max_lines),
            session: InputSession::new(config.max_history),
            visible: config.start_visible,
        }
    }

    /// Registers a command. A refused registration is reported in the
    /// scrollback and leaves the existing command in place.
    pub fn register<F>(&mut self, name: &str, handler: F) -> bool
    where
        F: Fn(&[&str]) -> anyhow::Result<CommandOutput> + 'static,
    {
        self.register_handler(name, Box::new(handler))
    }

    /// Boxed form of [`register`](Self::register).
    pub fn register_handler(&mut self, name: &str, handler: Box<dyn CommandHandler>) -> bool {
        match self.registry.try_register(name, handler) {
            Ok(()) => true,
            Err(e) => {
                self.log.log(&e.to_string());
                false
            }
        }
    }

    /// Routes an input event to the session.
    pub fn handle(&mut self, event: ConsoleEvent) -> SessionAction {
        let session = &mut self.session;
        match event {
            ConsoleEvent::Submit => return session.submit(&self.registry, &mut self.log),
            ConsoleEvent::Escape => return session.escape(),
            ConsoleEvent::Tab => session.autocomplete(&self.registry, &mut self.log),
            ConsoleEvent::HistoryUp => session.history_up(),
            ConsoleEvent::HistoryDown => session.history_down(),
            ConsoleEvent::Insert(c) => session.insert_char(c),
            ConsoleEvent::Backspace => {
                session.delete_before_cursor();
            }
            ConsoleEvent::Delete => {
                session.delete_at_cursor();
            }
            ConsoleEvent::CursorLeft => session.cursor_left(),
            ConsoleEvent::CursorRight => session.cursor_right(),
            ConsoleEvent::CursorHome => session.cursor_home(),
            ConsoleEvent::CursorEnd => session.cursor_end(),
        }
        SessionAction::None
    }

    /// Appends a message to the scrollback.
    pub fn log(&mut self, message: &str) {
        self.log.log(message);
    }

    /// Marks a frame boundary. Returns whether new lines arrived since the
    /// previous frame, which a renderer uses to scroll to the bottom.
    pub fn begin_frame(&mut self) -> bool {
        self.session.begin_frame();
        self.log.take_new_lines()
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn toggle(&mut self) {
        self.set_visible(!self.visible);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            debug!("Console {}", if visible { "shown" } else { "hidden" });
        }
        self.visible = visible;
        self.session.reset();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn scrollback(&self) -> &ScrollbackLog {
        &self.log
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut InputSession {
        &mut self.session
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}
