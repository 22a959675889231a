//! Console output: the scrollback transcript, and the pipeline that relays
//! `tracing` diagnostics into it.
//!
//! Diagnostics may be emitted from any thread. The collector formats them,
//! the relay batches them, and the task that owns the console appends each
//! batch to its [`ScrollbackLog`].
pub mod collector;
pub mod relay;
pub mod scrollback;

pub use collector::ConsoleLogCollector;
pub use relay::{LogBatch, LogRelay};
pub use scrollback::ScrollbackLog;
