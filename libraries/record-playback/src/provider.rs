//! Playback provider contract
//!
//! A provider presents a uniform transport surface over one concrete audio
//! engine. Two kinds exist: a local-file engine and a network streaming
//! engine. The coordinator owns one instance of each and routes commands to
//! whichever is active; it never branches on the concrete type beyond
//! choosing which one to load.

use crate::error::Result;
use record_core::{StreamTrack, Track};
use std::time::Duration;
use url::Url;

/// What a provider is asked to load.
#[derive(Debug, Clone)]
pub enum PlaybackSource {
    /// A catalog track backed by a locally imported file
    Local(Track),

    /// A stream track addressed by an already-resolved signed URL
    Streaming {
        /// Time-limited playable URL
        url: Url,
        /// The track the URL was resolved for
        track: StreamTrack,
    },
}

/// Uniform contract over the local-file and streaming engines.
///
/// Transport calls (`play`, `pause`, `stop`, `seek`) are idempotent and
/// no-ops while nothing is loaded; they never error. `load` is the only
/// fallible operation: the local engine rejects missing or undecodable
/// resources synchronously, while the streaming engine accepts the item
/// immediately and discovers duration/completion asynchronously.
///
/// Loading a new source must tear down any observers or background tasks
/// attached to the previous item before the new item's are installed, so a
/// stale callback can never fire against the wrong track.
pub trait PlaybackProvider: Send {
    /// Load a source into the underlying engine
    fn load(&mut self, source: PlaybackSource) -> Result<()>;

    /// Begin or resume playback
    fn play(&mut self);

    /// Pause, keeping the current position
    fn pause(&mut self);

    /// Stop and reset the position to zero
    fn stop(&mut self);

    /// Seek, clamped to the reported duration when one is known
    fn seek(&mut self, position: Duration);

    /// Whether the engine is currently producing audio
    fn is_playing(&self) -> bool;

    /// Current playback position
    fn position(&self) -> Duration;

    /// Total duration; `None` while unknown (e.g. a live stream, or a
    /// stream whose duration has not resolved yet)
    fn duration(&self) -> Option<Duration>;

    /// Title of the loaded track
    fn title(&self) -> Option<String>;

    /// Artist of the loaded track
    fn artist(&self) -> Option<String>;

    /// Whether the loaded track has played to its end
    fn is_finished(&self) -> bool;
}
