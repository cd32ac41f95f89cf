//! Playback events
//!
//! Discrete transitions queued by the coordinator for UI synchronization;
//! the platform drains them with `PlaybackCoordinator::take_events`.
//! Periodic position data flows through the now-playing sink instead.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// A different track became current
    TrackChanged {
        /// ID of the new current track
        track_id: String,
    },

    /// The current track played to its natural end
    TrackFinished {
        /// ID of the finished track
        track_id: String,
    },

    /// Queue contents changed (loaded, appended, reordered)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// A load or resolution failure was recovered
    Error {
        /// Human-readable description
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_payloads() {
        let event = PlaybackEvent::StateChanged {
            state: PlaybackState::Playing,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("StateChanged"));
        assert!(json.contains("Playing"));

        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
