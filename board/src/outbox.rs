//! Sender-side buffer for low-priority control traffic.
//!
//! Draw packets are never buffered — the hot path compresses and sends each
//! move immediately. Everything lower-priority (bulk resyncs, roster
//! chatter) goes through this outbox, which releases its backlog at a fixed
//! flush cadence so bursts cannot crowd out the stroke stream.

#[cfg(test)]
#[path = "outbox_test.rs"]
mod outbox_test;

use std::time::{Duration, Instant};

use crate::control::ControlMessage;

/// Flush cadence for buffered messages: one frame at 60 Hz.
pub const FLUSH_INTERVAL: Duration = Duration::from_millis(16);

/// Fixed-interval buffer for control messages.
#[derive(Debug)]
pub struct Outbox {
    pending: Vec<ControlMessage>,
    last_flush: Instant,
}

impl Outbox {
    /// An empty outbox whose first flush window starts now.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { pending: Vec::new(), last_flush: now }
    }

    /// Queue a message for the next flush.
    pub fn push(&mut self, message: ControlMessage) {
        self.pending.push(message);
    }

    /// Number of messages waiting for the next flush.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain the backlog if the flush interval has elapsed, in queue order.
    ///
    /// Returns an empty vec when the window is still open or nothing is
    /// queued. The window restarts only on an actual flush, so an idle
    /// outbox flushes immediately once traffic resumes.
    pub fn drain_due(&mut self, now: Instant) -> Vec<ControlMessage> {
        if self.pending.is_empty() || now.duration_since(self.last_flush) < FLUSH_INTERVAL {
            return Vec::new();
        }
        self.last_flush = now;
        std::mem::take(&mut self.pending)
    }
}
