//! Domain types for the Record Machine catalog

mod album;
mod genre;
mod ids;
mod key;
mod stream_track;
mod track;

pub use album::Album;
pub use genre::MusicGenre;
pub use ids::{AlbumId, TrackId};
pub use key::MusicKey;
pub use stream_track::StreamTrack;
pub use track::Track;
