//! Core types for playback coordination

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Idle,

    /// A streaming load is in flight (local loads are synchronous and never
    /// pass through this state)
    Loading,

    /// A track is loaded and ready, not producing audio
    Paused,

    /// Currently playing
    Playing,
}

/// Configuration for the playback coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Cadence of the now-playing observation loop (default: 250 ms)
    pub observation_interval: Duration,

    /// Window in which a second "previous" press skips back instead of
    /// restarting the current track (default: 1 s)
    pub previous_debounce: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            observation_interval: Duration::from_millis(250),
            previous_debounce: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.observation_interval, Duration::from_millis(250));
        assert_eq!(config.previous_debounce, Duration::from_secs(1));
    }
}
