//! Entry point for the devconsole binary.
mod app;
mod ui;

use anyhow::Result;

/// Starts the console, either as a full-screen terminal UI or, with
/// `--plain` or piped input, as a line-at-a-time reader.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal
/// cannot be driven.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
