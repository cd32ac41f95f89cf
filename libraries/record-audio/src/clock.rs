//! Pause-aware transport clock
//!
//! Tracks the elapsed playback time the underlying engine would report:
//! accumulates while running, freezes on pause, resets on stop. Built on
//! `tokio::time::Instant` so tests can drive it with virtual time.

use std::time::Duration;
use tokio::time::Instant;

/// Elapsed-time accumulator for an engine's transport.
#[derive(Debug)]
pub struct TransportClock {
    accumulated: Duration,
    started: Option<Instant>,
}

impl TransportClock {
    /// Create a stopped clock at zero
    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            started: None,
        }
    }

    /// Start or resume; idempotent while running
    pub fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Freeze the elapsed time
    pub fn pause(&mut self) {
        self.accumulated = self.elapsed();
        self.started = None;
    }

    /// Reset to zero and stop running
    pub fn stop(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started = None;
    }

    /// Jump to a position, preserving the running/paused state
    pub fn seek_to(&mut self, position: Duration) {
        self.accumulated = position;
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    /// Elapsed playback time
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Whether the clock is advancing
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

impl Default for TransportClock {
    fn default() -> Self {
        Self::new()
    }
}
