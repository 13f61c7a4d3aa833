//! Ephemeral author-cursor overlay.
//!
//! Cursor telemetry is broadcast to peers and immediately forgotten by the
//! server; receivers keep only the latest sample and stop showing it once
//! [`CURSOR_TTL`] passes without a refresh.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use std::time::{Duration, Instant};

use wire::Tool;

/// How long a cursor sample stays visible without a refresh.
pub const CURSOR_TTL: Duration = Duration::from_secs(2);

/// One cursor telemetry sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSample {
    pub x: f64,
    pub y: f64,
    pub tool: Tool,
    pub is_drawing: bool,
}

/// Latest-sample cursor state with expiry.
#[derive(Debug, Clone, Default)]
pub struct CursorOverlay {
    latest: Option<(CursorSample, Instant)>,
}

impl CursorOverlay {
    /// An overlay with no cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh sample, restarting the expiry window.
    pub fn observe(&mut self, sample: CursorSample, at: Instant) {
        self.latest = Some((sample, at));
    }

    /// The sample to render, or `None` once the last one has expired.
    #[must_use]
    pub fn visible(&self, now: Instant) -> Option<CursorSample> {
        let (sample, seen_at) = self.latest?;
        (now.duration_since(seen_at) < CURSOR_TTL).then_some(sample)
    }

    /// Drop the current sample immediately (room clear or teardown).
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
