/// Track domain type
use crate::types::{AlbumId, MusicGenre, MusicKey, TrackId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A track in the user's catalog.
///
/// The audio resource reference is independent of the track itself: a track
/// exists from the moment it is added to an album, and `audio_path` is set
/// once a file has been imported for it (and cleared when that file is
/// removed). Playback treats a missing `audio_path` as "no audio available",
/// not as a malformed track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Position of the track within its album
    pub index: u32,

    /// Songwriter credits
    pub writers: String,

    /// Beats per minute
    pub bpm: u32,

    /// Musical key
    pub key: MusicKey,

    /// Genre
    pub genre: MusicGenre,

    /// Lyrics
    pub lyrics: String,

    /// Working notes
    pub notes: String,

    /// Owning album (back-reference, not ownership)
    pub album_id: Option<AlbumId>,

    /// Path of the imported audio file, if one has been attached
    pub audio_path: Option<PathBuf>,
}

impl Track {
    /// Create a new track with default metadata
    pub fn new(title: impl Into<String>, index: u32) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            index,
            writers: String::new(),
            bpm: 120,
            key: MusicKey::C,
            genre: MusicGenre::Acoustic,
            lyrics: String::new(),
            notes: String::new(),
            album_id: None,
            audio_path: None,
        }
    }

    /// Attach an imported audio file to this track
    pub fn with_audio_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio_path = Some(path.into());
        self
    }

    /// Whether an audio resource has been attached
    pub fn has_audio(&self) -> bool {
        self.audio_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("Blast Off!", 3);
        assert_eq!(track.title, "Blast Off!");
        assert_eq!(track.index, 3);
        assert_eq!(track.bpm, 120);
        assert_eq!(track.key, MusicKey::C);
        assert!(!track.has_audio());
    }

    #[test]
    fn audio_path_attachment() {
        let track = Track::new("Song", 0).with_audio_path("/library/audio/song.m4a");
        assert!(track.has_audio());
        assert_eq!(
            track.audio_path.as_deref(),
            Some(std::path::Path::new("/library/audio/song.m4a"))
        );
    }
}
