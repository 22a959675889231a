//! A `tracing` layer that turns events into console transcript lines.
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    EnvFilter, Layer,
};

use super::LogRelay;

/// Formats each `tracing` event as `[LEVEL] message` and queues it on a
/// [`LogRelay`].
pub struct ConsoleLogCollector {
    relay: Arc<LogRelay>,
    timestamps: bool,
}

impl ConsoleLogCollector {
    /// Creates a collector feeding `relay`. With `timestamps` set, lines are
    /// prefixed with the local `HH:MM:SS`.
    pub fn new(relay: Arc<LogRelay>, timestamps: bool) -> Self {
        Self { relay, timestamps }
    }

    /// Installs the global subscriber: an `EnvFilter` built from `directive`
    /// in front of a collector.
    ///
    /// # Errors
    ///
    /// Returns an error if `directive` does not parse or a global subscriber
    /// is already set.
    pub fn init_subscriber(
        relay: Arc<LogRelay>,
        directive: &str,
        timestamps: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::try_new(directive)?;
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLogCollector::new(relay, timestamps));

        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }

    fn format_line(&self, level: &tracing::Level, message: &str) -> String {
        if self.timestamps {
            format!("{} [{}] {}", Local::now().format("%H:%M:%S"), level, message)
        } else {
            format!("[{}] {}", level, message)
        }
    }
}

impl<S> Layer<S> for ConsoleLogCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = self.format_line(event.metadata().level(), &visitor.finish());
        self.relay.push(line);
    }
}

/// Collects the `message` field first and every other field as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), value);
        }
    }
}
