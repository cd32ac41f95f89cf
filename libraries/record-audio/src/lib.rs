//! Record Machine - Audio Providers
//!
//! Concrete [`record_playback::PlaybackProvider`] implementations:
//!
//! - [`LocalPlaybackProvider`] wraps the Symphonia decode engine for
//!   catalog tracks backed by locally imported files. Loading is
//!   synchronous and fallible: a track without an attached resource is
//!   `InvalidSource`, a file the engine cannot probe or decode is
//!   `EngineRejected`.
//! - [`StreamingPlaybackProvider`] wraps the network streaming engine for
//!   signed-URL tracks. Loading replaces the item synchronously and never
//!   fails; duration and completion are observed asynchronously, and may
//!   remain unknown indefinitely for live streams.
//!
//! Both providers drive a pause-aware [`TransportClock`] and tear down the
//! previous item's observers before installing a new item's, so stale
//! callbacks can never fire against the wrong track.

#![forbid(unsafe_code)]

mod clock;
mod error;
mod local;
mod streaming;

pub use clock::TransportClock;
pub use error::EngineError;
pub use local::LocalPlaybackProvider;
pub use streaming::StreamingPlaybackProvider;
