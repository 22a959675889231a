use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use tracing::error;

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn initialize_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.terminal_active = true;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        install_quiet_panic_hook();

        self.terminal_size = terminal::size()?;
        Ok(())
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> Result<()> {
        if !self.terminal_active {
            return Ok(());
        }
        self.terminal_active = false;
        // Back to the default hook, which prints to stderr.
        let _ = std::panic::take_hook();
        terminal::disable_raw_mode()?;
        execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
        Ok(())
    }
}

/// Sends panic reports to the scrollback instead of over the alternate screen.
fn install_quiet_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("{}", info);
    }));
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
