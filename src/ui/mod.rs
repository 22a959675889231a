//! Full-screen terminal front end for the console.
mod event;
mod runner;
pub mod terminal;

pub use event::UIEvent;
pub use runner::run_tui;
pub use terminal::TerminalUI;
