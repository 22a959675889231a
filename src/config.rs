//! Console configuration.
//!
//! Values come from three layers: built-in defaults, an optional JSON file,
//! and command-line overrides applied by the binary.
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of scrollback lines kept.
pub const DEFAULT_MAX_LINES: usize = 512;
/// Default number of submitted lines remembered.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Settings for a [`Console`](crate::Console) and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Maximum number of lines kept in the scrollback.
    pub max_lines: usize,
    /// Maximum number of submitted lines kept in history.
    pub max_history: usize,
    /// Prompt drawn in front of the input line.
    pub prompt: String,
    /// `EnvFilter` directive for diagnostics relayed into the scrollback.
    pub log_level: String,
    /// Prefix relayed diagnostics with the local time.
    pub timestamps: bool,
    /// Whether the console starts open.
    pub start_visible: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_history: DEFAULT_MAX_HISTORY,
            prompt: "> ".to_string(),
            log_level: "info".to_string(),
            timestamps: false,
            start_visible: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads a config from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Parses a config from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the console cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_lines == 0 {
            bail!("max_lines must be at least 1");
        }
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConsoleConfig::default();
        assert_eq!(config.max_lines, 512);
        assert_eq!(config.max_history, 100);
        assert_eq!(config.prompt, "> ");
        assert!(config.start_visible);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ConsoleConfig::from_json(r#"{ "max_lines": 64 }"#).unwrap();
        assert_eq!(config.max_lines, 64);
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn zero_max_lines_is_rejected() {
        let err = ConsoleConfig::from_json(r#"{ "max_lines": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("max_lines"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConsoleConfig::from_json(r#"{ "max_lnes": 3 }"#).is_err());
    }

    #[test]
    fn zero_history_is_allowed() {
        let config = ConsoleConfig::from_json(r#"{ "max_history": 0 }"#).unwrap();
        assert_eq!(config.max_history, 0);
    }
}
