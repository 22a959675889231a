//! Commands and the registry that dispatches them.
//!
//! A command is a name bound to a handler. Handlers receive the
//! whitespace-split arguments of the submitted line and return a
//! [`CommandOutput`] for the session to log.
mod registry;

pub use registry::CommandRegistry;

/// What a command hands back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text appended to the scrollback, one line per `\n`.
    Text(String),
    /// Nothing to log.
    None,
    /// Ask the host to empty the scrollback.
    Clear,
    /// Ask the host to shut down.
    Exit,
}

impl CommandOutput {
    /// Shorthand for [`CommandOutput::Text`].
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// A single invokable command body.
///
/// Closures of the shape `Fn(&[&str]) -> anyhow::Result<CommandOutput>`
/// implement this automatically.
pub trait CommandHandler {
    /// Runs the command with its arguments (the command name excluded).
    fn invoke(&self, args: &[&str]) -> anyhow::Result<CommandOutput>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[&str]) -> anyhow::Result<CommandOutput>,
{
    fn invoke(&self, args: &[&str]) -> anyhow::Result<CommandOutput> {
        self(args)
    }
}

/// Splits an input line into the command name and its arguments.
///
/// Blank input yields an empty name, which no registry ever contains.
pub fn split_command_line(line: &str) -> (&str, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    (command, parts.collect())
}
