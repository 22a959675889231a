//! Submit and escape handling.
use tracing::debug;

use super::{InputSession, SessionAction};
use crate::commands::{split_command_line, CommandOutput, CommandRegistry};
use crate::error::ConsoleError;
use crate::logging::ScrollbackLog;

impl InputSession {
    /// Runs the current input line.
    ///
    /// The line is echoed as `> {line}`, dispatched by its first token, and
    /// the command's output (or the reason it could not run) is logged.
    /// Non-empty lines are recorded in history, even when the command was
    /// not found. The input is cleared afterwards.
    pub fn submit(&mut self, registry: &CommandRegistry, log: &mut ScrollbackLog) -> SessionAction {
        self.apply_cursor_fix();
        let line = std::mem::take(&mut self.input);
        self.cursor = 0;

        let (command, args) = split_command_line(&line);
        log.log(&format!("> {}", line));

        let action = match registry.execute(command, &args) {
            Ok(output) => apply_output(output, log),
            Err(e) => {
                log.log(&describe_error(&e));
                SessionAction::None
            }
        };

        if !line.is_empty() {
            self.history.push(line);
        }
        self.history_position = None;
        action
    }

    /// Clears the input and asks the host to hide the console.
    pub fn escape(&mut self) -> SessionAction {
        self.apply_cursor_fix();
        self.clear_input();
        SessionAction::Hide
    }
}

fn apply_output(output: CommandOutput, log: &mut ScrollbackLog) -> SessionAction {
    match output {
        CommandOutput::Text(text) => {
            log.log(&text);
            SessionAction::None
        }
        CommandOutput::None => SessionAction::None,
        CommandOutput::Clear => {
            log.clear();
            SessionAction::None
        }
        CommandOutput::Exit => SessionAction::Exit,
    }
}

fn describe_error(error: &ConsoleError) -> String {
    match error {
        ConsoleError::CommandNotFound(_) => error.to_string(),
        other => {
            debug!("Command failed: {}", other);
            format!("Error: {}", other)
        }
    }
}
