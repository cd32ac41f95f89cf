//! Record Machine Core
//!
//! Shared domain types for Record Machine: the album/track catalog model and
//! the value types exchanged with the streaming service.
//!
//! This crate is platform-agnostic and carries no I/O. Catalog persistence,
//! file import, and presentation live behind other crates; everything here is
//! plain data.
//!
//! # Example
//!
//! ```rust
//! use record_core::types::{Album, StreamTrack, Track};
//!
//! let mut album = Album::new("Night Drives", "The Spinners");
//! album.track_listing.push(Track::new("Long, Long Time", 0));
//!
//! let remote = StreamTrack::new(
//!     "demo-1",
//!     "Live 2024",
//!     "The Spinners",
//!     "demos/the-spinners-live-2024.mp3",
//! );
//! assert_eq!(remote.object_path, "demos/the-spinners-live-2024.mp3");
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{Album, AlbumId, MusicGenre, MusicKey, StreamTrack, Track, TrackId};
