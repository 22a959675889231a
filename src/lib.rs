//! An embeddable command console.
//!
//! A [`Console`] accepts typed input, resolves the first word against a
//! [`CommandRegistry`], runs the matching handler, and records everything in
//! a bounded [`ScrollbackLog`]. The [`InputSession`] behind it keeps a
//! history of submitted lines and completes command names on Tab.
//!
//! Rendering and keyboard polling are left to the host, which forwards
//! [`ConsoleEvent`]s and reads the scrollback once per frame.
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod session;

pub use commands::{CommandHandler, CommandOutput, CommandRegistry};
pub use config::ConsoleConfig;
pub use console::{Console, ConsoleEvent};
pub use error::ConsoleError;
pub use logging::{ConsoleLogCollector, LogRelay, ScrollbackLog};
pub use session::{HistoryBuffer, InputSession, SessionAction};
