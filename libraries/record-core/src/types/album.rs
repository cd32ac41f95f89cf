/// Album domain type
use crate::types::{AlbumId, Track};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album in the user's catalog.
///
/// Owns its tracks; deleting an album cascades to its tracks (enforced by
/// the data layer, not here). Artwork is raw encoded image bytes as imported;
/// decoding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Release date
    pub release_date: DateTime<Utc>,

    /// Liner notes
    pub liner_notes: String,

    /// Encoded artwork image, if set
    pub artwork: Option<Vec<u8>>,

    /// Tracks belonging to this album
    pub track_listing: Vec<Track>,
}

impl Album {
    /// Create a new empty album
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: AlbumId::generate(),
            title: title.into(),
            artist: artist.into(),
            release_date: Utc::now(),
            liner_notes: String::new(),
            artwork: None,
            track_listing: Vec::new(),
        }
    }

    /// Tracks ordered by their album index
    pub fn sorted_tracks(&self) -> Vec<Track> {
        let mut tracks = self.track_listing.clone();
        tracks.sort_by_key(|t| t.index);
        tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_tracks_orders_by_index() {
        let mut album = Album::new("Test Album", "Test Artist");
        album.track_listing.push(Track::new("Third", 2));
        album.track_listing.push(Track::new("First", 0));
        album.track_listing.push(Track::new("Second", 1));

        let sorted = album.sorted_tracks();
        assert_eq!(sorted[0].title, "First");
        assert_eq!(sorted[1].title, "Second");
        assert_eq!(sorted[2].title, "Third");
    }
}
