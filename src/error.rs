//! Error types for the console core.
//!
//! None of these escape a session event: the session turns each one into a
//! scrollback line and carries on.

/// Errors produced while registering, resolving, or running commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Command already exists: {0}, new definition ignored")]
    CommandAlreadyRegistered(String),

    #[error("Invalid command name: {0:?}")]
    InvalidCommandName(String),

    #[error("Command {0} not found")]
    CommandNotFound(String),

    #[error("{name}: {source}")]
    CommandFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{name} panicked: {message}")]
    CommandPanicked { name: String, message: String },

    #[error("No command start with \"{0}\".")]
    NoAutocompleteMatch(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_matches_transcript_line() {
        let e = ConsoleError::CommandNotFound("frobnicate".into());
        assert_eq!(format!("{e}"), "Command frobnicate not found");
    }

    #[test]
    fn already_registered_display() {
        let e = ConsoleError::CommandAlreadyRegistered("list".into());
        assert_eq!(
            format!("{e}"),
            "Command already exists: list, new definition ignored"
        );
    }

    #[test]
    fn no_match_display_quotes_prefix() {
        let e = ConsoleError::NoAutocompleteMatch("zz".into());
        assert_eq!(format!("{e}"), "No command start with \"zz\".");
    }

    #[test]
    fn command_failed_includes_source() {
        let e = ConsoleError::CommandFailed {
            name: "echo".into(),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(format!("{e}"), "echo: boom");
    }
}
