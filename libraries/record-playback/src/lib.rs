//! Record Machine - Playback Coordination
//!
//! Platform-agnostic playback management for Record Machine.
//!
//! This crate provides:
//! - The [`PlaybackProvider`] contract over the two audio engines (local
//!   files and signed-URL streams)
//! - The [`PlaybackCoordinator`]: queues, transport commands, the 250 ms
//!   observation loop, and now-playing publication
//! - The [`NowPlayingSink`] seam for the OS media-control surface and the
//!   [`RemoteCommand`]s it sends back
//! - The [`UrlResolver`] seam for the signed-URL service
//!
//! # Architecture
//!
//! `record-playback` owns no audio engine and speaks no HTTP. Concrete
//! providers live in `record-audio` and the signed-URL client in
//! `record-stream-client`; both are injected, which keeps every transport
//! semantic testable with fakes.
//!
//! All coordinator state sits behind a single mutex; mutation is serialized
//! and guards are never held across an await. At most one provider is
//! active at any time, and switching source kinds always tears the old
//! provider's observers down before the new provider's attach.
//!
//! # Example
//!
//! ```rust,no_run
//! use record_playback::{
//!     NowPlayingInfo, NowPlayingSink, PlaybackConfig, PlaybackCoordinator,
//! };
//! use std::sync::Arc;
//!
//! struct MediaCenter;
//!
//! impl NowPlayingSink for MediaCenter {
//!     fn update(&self, info: NowPlayingInfo) {
//!         // push to the platform now-playing surface
//!         let _ = info;
//!     }
//!     fn clear(&self) {}
//! }
//!
//! # fn providers() -> (Box<dyn record_playback::PlaybackProvider>, Box<dyn record_playback::PlaybackProvider>) { unimplemented!() }
//! # fn resolver() -> Arc<dyn record_playback::UrlResolver> { unimplemented!() }
//! # async fn run() {
//! let (local, streaming) = providers();
//! let coordinator = PlaybackCoordinator::new(
//!     local,
//!     streaming,
//!     Arc::new(MediaCenter),
//!     resolver(),
//!     PlaybackConfig::default(),
//! );
//!
//! coordinator.load_track_at_index(0);
//! coordinator.play_pause();
//! # }
//! ```

#![forbid(unsafe_code)]

mod coordinator;
mod error;
mod events;
mod media;
mod provider;
mod queue;
mod resolver;
pub mod types;

// Public exports
pub use coordinator::PlaybackCoordinator;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use media::{NowPlayingInfo, NowPlayingSink, RemoteCommand};
pub use provider::{PlaybackProvider, PlaybackSource};
pub use queue::Queue;
pub use resolver::UrlResolver;
pub use types::{PlaybackConfig, PlaybackState};
