//! This module handles the initial setup of the application.
use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use devconsole::{ConsoleConfig, ConsoleLogCollector, LogRelay};
use tracing_subscriber::EnvFilter;

use super::args::AppArgs;

/// Undelivered diagnostics kept while the UI is not draining the relay.
const RELAY_CAPACITY: usize = 1024;

/// Everything the selected front end needs to start.
pub struct PreparedApp {
    /// Effective configuration after all layers were applied.
    pub config: ConsoleConfig,
    /// Whether to run the stdin line mode instead of the terminal UI.
    pub plain: bool,
    /// Relay feeding diagnostics into the console; `None` in plain mode,
    /// where diagnostics go to stderr.
    pub relay: Option<Arc<LogRelay>>,
}

/// Prepares the application for running.
///
/// 1. Resolves the configuration (defaults, config file, flags).
/// 2. Picks the front end: plain mode when asked for or when stdin is not
///    a terminal.
/// 3. Configures logging for that front end.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or the resulting
/// configuration is invalid.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    let config = resolve_config(&args)?;
    let plain = args.plain || !std::io::stdin().is_terminal();
    let relay = configure_logging(&config, plain)?;

    Ok(PreparedApp {
        config,
        plain,
        relay,
    })
}

/// Layers command-line overrides on top of the config file (or defaults).
fn resolve_config(args: &AppArgs) -> Result<ConsoleConfig> {
    let mut config = match &args.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };

    if let Some(max_lines) = args.max_lines {
        config.max_lines = max_lines;
    }
    if let Some(max_history) = args.max_history {
        config.max_history = max_history;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.timestamps {
        config.timestamps = true;
    }

    config.validate()?;
    Ok(config)
}

/// Routes diagnostics into the console scrollback, or to stderr in plain
/// mode so they do not interleave with command output on stdout.
fn configure_logging(config: &ConsoleConfig, plain: bool) -> Result<Option<Arc<LogRelay>>> {
    if plain {
        let filter = EnvFilter::try_new(&config.log_level)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return Ok(None);
    }

    let relay = Arc::new(LogRelay::new(RELAY_CAPACITY));
    ConsoleLogCollector::init_subscriber(relay.clone(), &config.log_level, config.timestamps)
        .map_err(|e| anyhow!("failed to install console log collector: {}", e))?;
    Ok(Some(relay))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AppArgs {
        AppArgs {
            config: None,
            max_lines: None,
            max_history: None,
            log_level: None,
            timestamps: false,
            plain: true,
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let config = resolve_config(&args()).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let mut args = args();
        args.max_lines = Some(10);
        args.max_history = Some(0);
        args.log_level = Some("debug".into());
        args.timestamps = true;

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.max_lines, 10);
        assert_eq!(config.max_history, 0);
        assert_eq!(config.log_level, "debug");
        assert!(config.timestamps);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut args = args();
        args.max_lines = Some(0);
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let mut args = args();
        args.config = Some("/nonexistent/devconsole.json".into());
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
