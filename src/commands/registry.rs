//! Command registry with duplicate rejection, prefix search, and dispatch.
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::{CommandHandler, CommandOutput};
use crate::error::{ConsoleError, Result};

/// Name of the command seeded into every registry.
pub const LIST_COMMAND: &str = "list";

enum Handler {
    /// `list`, answered by the registry itself.
    List,
    Custom(Box<dyn CommandHandler>),
}

struct Command {
    name: String,
    handler: Handler,
}

/// Registry of available commands.
///
/// Names are case-sensitive and unique. Enumeration (listing, prefix search)
/// follows registration order.
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a registry holding only the built-in `list` command.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
            index: HashMap::new(),
        };
        registry.insert(LIST_COMMAND.to_string(), Handler::List);
        registry
    }

    /// Registers a closure under `name`.
    ///
    /// Returns `false` and emits a warning if the name is taken or invalid;
    /// the existing definition is never replaced.
    pub fn register<F>(&mut self, name: &str, handler: F) -> bool
    where
        F: Fn(&[&str]) -> anyhow::Result<CommandOutput> + 'static,
    {
        self.register_handler(name, Box::new(handler))
    }

    /// Registers a boxed handler under `name`. See [`register`](Self::register).
    pub fn register_handler(&mut self, name: &str, handler: Box<dyn CommandHandler>) -> bool {
        match self.try_register(name, handler) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Registers a boxed handler, reporting why a registration was refused.
    ///
    /// # Errors
    ///
    /// * [`ConsoleError::InvalidCommandName`] if `name` is empty or contains
    ///   whitespace, since the first whitespace-delimited token of an input
    ///   line is always taken as the name.
    /// * [`ConsoleError::CommandAlreadyRegistered`] if `name` exists.
    pub fn try_register(&mut self, name: &str, handler: Box<dyn CommandHandler>) -> Result<()> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConsoleError::InvalidCommandName(name.to_string()));
        }
        if self.has_command(name) {
            return Err(ConsoleError::CommandAlreadyRegistered(name.to_string()));
        }
        self.insert(name.to_string(), Handler::Custom(handler));
        debug!("Registered console command '{}'", name);
        Ok(())
    }

    fn insert(&mut self, name: String, handler: Handler) {
        self.index.insert(name.clone(), self.commands.len());
        self.commands.push(Command { name, handler });
    }

    /// Whether a command with exactly this name exists.
    pub fn has_command(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Runs the named command.
    ///
    /// # Errors
    ///
    /// * [`ConsoleError::CommandNotFound`] if nothing is registered under
    ///   `name`; no handler runs.
    /// * [`ConsoleError::CommandFailed`] if the handler returned an error.
    /// * [`ConsoleError::CommandPanicked`] if the handler panicked.
    pub fn execute(&self, name: &str, args: &[&str]) -> Result<CommandOutput> {
        let Some(&slot) = self.index.get(name) else {
            return Err(ConsoleError::CommandNotFound(name.to_string()));
        };

        debug!("Executing '{}' with {} argument(s)", name, args.len());
        match &self.commands[slot].handler {
            Handler::List => Ok(self.list_commands()),
            Handler::Custom(handler) => {
                match panic::catch_unwind(AssertUnwindSafe(|| handler.invoke(args))) {
                    Ok(Ok(output)) => Ok(output),
                    Ok(Err(source)) => Err(ConsoleError::CommandFailed {
                        name: name.to_string(),
                        source,
                    }),
                    Err(payload) => Err(ConsoleError::CommandPanicked {
                        name: name.to_string(),
                        message: panic_message(payload.as_ref()),
                    }),
                }
            }
        }
    }

    /// Every registered name starting with `prefix`, in registration order.
    pub fn search_commands(&self, prefix: &str) -> Vec<&str> {
        self.names().filter(|name| name.starts_with(prefix)).collect()
    }

    /// Output of the built-in `list` command. See [`command_listing`](Self::command_listing).
    pub fn list_commands(&self) -> CommandOutput {
        CommandOutput::Text(self.command_listing())
    }

    /// A `Commands:` header followed by one registered name per line.
    pub fn command_listing(&self) -> String {
        let mut out = String::from("Commands:\n");
        for name in self.names() {
            out.push_str(name);
            out.push('\n');
        }
        out
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|command| command.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
