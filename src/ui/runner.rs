use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use devconsole::{Console, ConsoleConfig, LogRelay};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{TerminalUI, UIEvent};

/// How long the input thread waits for a terminal event before checking
/// whether the UI is still listening.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the terminal UI until a command or Ctrl+C asks to exit.
pub async fn run_tui(
    console: Console,
    relay: Option<Arc<LogRelay>>,
    config: &ConsoleConfig,
) -> Result<()> {
    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();
    let (log_tx, log_rx) = mpsc::unbounded_channel();

    if let Some(relay) = &relay {
        relay.set_sink(log_tx);
    }

    let mut terminal_ui = TerminalUI::new(console, ui_event_rx, log_rx, config.prompt.clone());

    tokio::task::spawn_blocking(move || loop {
        if ui_event_tx.is_closed() {
            break;
        }
        if !event::poll(POLL_INTERVAL).unwrap_or(false) {
            continue;
        }
        let ui_event = match event::read() {
            Ok(Event::Key(key_event)) => UIEvent::KeyPress(key_event),
            Ok(Event::Resize(width, height)) => UIEvent::Resize(width, height),
            Ok(_) => continue,
            Err(e) => {
                debug!("Failed to read terminal event: {}", e);
                break;
            }
        };
        if let Err(e) = ui_event_tx.send(ui_event) {
            debug!("Failed to send terminal event: {}", e);
            break;
        }
    });

    info!("Console ready, {} commands registered", terminal_ui.console().registry().len());

    let result = terminal_ui.run().await;

    if let Some(relay) = &relay {
        relay.flush();
    }
    result
}
