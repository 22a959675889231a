//! Hands formatted log lines from any thread to the task that owns the console.
//!
//! Lines are collected into a pending batch and delivered every
//! [`FLUSH_INTERVAL`] over an unbounded channel, so a burst of diagnostics
//! costs the UI one redraw instead of one per line.
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::interval;

/// How often pending lines are delivered.
pub const FLUSH_INTERVAL: Duration = Duration::from_millis(100);

/// A batch of formatted lines, oldest first.
pub type LogBatch = Vec<String>;

/// Thread-safe queue of log lines bound for a single consumer.
pub struct LogRelay {
    /// Lines waiting for the next flush.
    pending: Arc<Mutex<Vec<String>>>,
    /// Most lines kept while nobody is receiving.
    max_pending: usize,
    /// Where batches go once a consumer is attached.
    sink: Arc<Mutex<Option<mpsc::UnboundedSender<LogBatch>>>>,
    /// Whether a flush task is currently running.
    flushing: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl LogRelay {
    /// Creates a relay that holds at most `max_pending` undelivered lines,
    /// dropping the oldest beyond that.
    pub fn new(max_pending: usize) -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
            max_pending: max_pending.max(1),
            sink: Arc::new(Mutex::new(None)),
            flushing: Arc::new(Mutex::new(false)),
        }
    }

    /// Attaches the consumer side. Replaces any previous sink.
    pub fn set_sink(&self, sink: mpsc::UnboundedSender<LogBatch>) {
        *lock(&self.sink) = Some(sink);
    }

    /// Queues a line for delivery.
    ///
    /// Starts the periodic flush task when called inside a tokio runtime;
    /// outside one, lines wait for an explicit [`flush`](Self::flush).
    pub fn push(&self, line: String) {
        {
            let mut pending = lock(&self.pending);
            pending.push(line);
            if pending.len() > self.max_pending {
                let excess = pending.len() - self.max_pending;
                pending.drain(..excess);
            }
        }
        self.start_flush_task_if_needed();
    }

    /// Sends everything pending right now.
    ///
    /// Returns `false` if there is no sink or the consumer has gone away;
    /// the lines stay pending in that case.
    pub fn flush(&self) -> bool {
        let batch = std::mem::take(&mut *lock(&self.pending));
        if batch.is_empty() {
            return true;
        }
        deliver(&self.pending, &self.sink, batch)
    }

    /// Number of lines waiting for delivery.
    pub fn pending_len(&self) -> usize {
        lock(&self.pending).len()
    }

    fn start_flush_task_if_needed(&self) {
        let mut running = lock(&self.flushing);
        if *running {
            return;
        }
        let Ok(handle) = Handle::try_current() else {
            return;
        };
        *running = true;
        drop(running);

        let pending = self.pending.clone();
        let sink = self.sink.clone();
        let flushing = self.flushing.clone();

        handle.spawn(async move {
            let mut timer = interval(FLUSH_INTERVAL);
            timer.tick().await;

            loop {
                timer.tick().await;

                let batch = std::mem::take(&mut *lock(&pending));
                if batch.is_empty() {
                    continue;
                }

                let consumer_attached = lock(&sink).is_some();
                if !deliver(&pending, &sink, batch) && consumer_attached {
                    // Receiver dropped; nothing will read further batches.
                    break;
                }
            }

            *lock(&flushing) = false;
        });
    }
}

/// Sends `batch` to the sink, putting it back at the front of `pending` if
/// it cannot be delivered.
fn deliver(
    pending: &Mutex<Vec<String>>,
    sink: &Mutex<Option<mpsc::UnboundedSender<LogBatch>>>,
    batch: LogBatch,
) -> bool {
    let undelivered = match lock(sink).as_ref() {
        Some(tx) => match tx.send(batch) {
            Ok(()) => return true,
            Err(mpsc::error::SendError(batch)) => batch,
        },
        None => batch,
    };
    lock(pending).splice(0..0, undelivered);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_without_sink_keeps_lines() {
        let relay = LogRelay::new(16);
        relay.push("a".into());
        assert!(!relay.flush());
        assert_eq!(relay.pending_len(), 1);
    }

    #[test]
    fn flush_delivers_in_order() {
        let relay = LogRelay::new(16);
        let (tx, mut rx) = mpsc::unbounded_channel();
        relay.set_sink(tx);
        relay.push("a".into());
        relay.push("b".into());

        assert!(relay.flush());
        assert_eq!(rx.try_recv().unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(relay.pending_len(), 0);
    }

    #[test]
    fn pending_is_bounded() {
        let relay = LogRelay::new(2);
        for line in ["a", "b", "c"] {
            relay.push(line.into());
        }
        let (tx, mut rx) = mpsc::unbounded_channel();
        relay.set_sink(tx);
        relay.flush();
        assert_eq!(rx.try_recv().unwrap(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn closed_consumer_keeps_lines_pending() {
        let relay = LogRelay::new(16);
        let (tx, rx) = mpsc::unbounded_channel();
        relay.set_sink(tx);
        drop(rx);
        relay.push("lost?".into());
        assert!(!relay.flush());
        assert_eq!(relay.pending_len(), 1);
    }

    #[tokio::test]
    async fn flush_task_delivers_batches() {
        let relay = LogRelay::new(16);
        let (tx, mut rx) = mpsc::unbounded_channel();
        relay.set_sink(tx);
        relay.push("first".into());
        relay.push("second".into());

        let batch = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("batch within timeout")
            .expect("channel open");
        assert_eq!(batch, vec!["first".to_string(), "second".to_string()]);
    }
}
