//! This module defines the terminal front end: state, event loop, and drawing.
mod events;
mod lifecycle;
mod render;

use anyhow::Result;
use devconsole::logging::LogBatch;
use devconsole::Console;
use tokio::sync::mpsc;
use tracing::{debug, error};

use super::UIEvent;

pub struct TerminalUI {
    console: Console,
    event_rx: mpsc::UnboundedReceiver<UIEvent>,
    log_rx: mpsc::UnboundedReceiver<LogBatch>,
    prompt: String,
    terminal_size: (u16, u16),
    /// Lines scrolled up from the bottom of the scrollback.
    scroll_offset: usize,
    terminal_active: bool,
    should_exit: bool,
}

impl TerminalUI {
    pub fn new(
        console: Console,
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
        log_rx: mpsc::UnboundedReceiver<LogBatch>,
        prompt: String,
    ) -> Self {
        Self {
            console,
            event_rx,
            log_rx,
            prompt,
            terminal_size: (80, 24),
            scroll_offset: 0,
            terminal_active: false,
            should_exit: false,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;

        debug!("Starting terminal UI loop");
        self.render()?;

        while !self.should_exit {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    if let Err(e) = self.handle_event(event) {
                        error!("Error handling UI event: {}", e);
                    }
                }
                Some(batch) = self.log_rx.recv() => {
                    self.append_log_batch(batch);
                }
                else => break,
            }

            self.render()?;
        }

        self.cleanup()
    }

    /// Relayed diagnostics land in the scrollback like command output.
    fn append_log_batch(&mut self, batch: LogBatch) {
        for line in batch {
            self.console.log(&line);
        }
    }
}
