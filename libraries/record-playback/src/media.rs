//! System media surface seam
//!
//! The OS-level now-playing center is modeled as an injected sink the
//! coordinator writes to after every state transition, plus a command enum
//! for the transport events the surface sends back. Tests substitute a
//! recording sink; production wires the platform surface.

use std::time::Duration;

/// Metadata snapshot published to the system media surface.
///
/// `duration` and `elapsed` are both omitted whenever the duration is
/// unknown, so the host UI shows an indeterminate progress indicator
/// instead of a wrong one. Artwork is omitted when absent or unusable;
/// playback is never affected by artwork problems.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingInfo {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album title
    pub album_title: String,

    /// Encoded artwork image bytes
    pub artwork: Option<Vec<u8>>,

    /// Total playback duration, when known
    pub duration: Option<Duration>,

    /// Elapsed playback time; only present when `duration` is
    pub elapsed: Option<Duration>,

    /// 1.0 while playing, 0.0 otherwise
    pub playback_rate: f32,
}

/// Sink for now-playing metadata.
pub trait NowPlayingSink: Send + Sync {
    /// Publish a fresh metadata snapshot
    fn update(&self, info: NowPlayingInfo);

    /// Remove any published metadata (nothing is loaded)
    fn clear(&self);
}

/// Transport commands arriving from the system media surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteCommand {
    /// Begin playback
    Play,
    /// Pause playback
    Pause,
    /// Skip to the next queue entry
    NextTrack,
    /// Restart or skip to the previous queue entry
    PreviousTrack,
    /// Jump to a position in the current track
    Seek(Duration),
}
