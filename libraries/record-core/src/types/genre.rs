//! Genre types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Music genre of a track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicGenre {
    #[default]
    #[serde(rename = "Acoustic")]
    Acoustic,
    #[serde(rename = "African")]
    African,
    #[serde(rename = "Alternative")]
    Alternative,
    #[serde(rename = "Americana")]
    Americana,
    #[serde(rename = "Blues")]
    Blues,
    #[serde(rename = "Christian")]
    Christian,
    #[serde(rename = "Classic Rock")]
    ClassicRock,
    #[serde(rename = "Classical")]
    Classical,
    #[serde(rename = "Country")]
    Country,
    #[serde(rename = "Dance")]
    Dance,
    #[serde(rename = "DJ Mixes")]
    DjMixes,
    #[serde(rename = "Electronic")]
    Electronic,
    #[serde(rename = "Film, TV & Stage")]
    FilmTvStage,
    #[serde(rename = "Gospel")]
    Gospel,
    #[serde(rename = "Hard Rock")]
    HardRock,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    #[serde(rename = "Holiday")]
    Holiday,
    #[serde(rename = "Indie")]
    Indie,
    #[serde(rename = "Jazz")]
    Jazz,
    #[serde(rename = "K-Pop")]
    KPop,
    #[serde(rename = "Kids")]
    Kids,
    #[serde(rename = "Latin")]
    Latin,
    #[serde(rename = "Live Music")]
    LiveMusic,
    #[serde(rename = "Metal")]
    Metal,
    #[serde(rename = "Pop")]
    Pop,
    #[serde(rename = "Punk")]
    Punk,
    #[serde(rename = "R&B")]
    RAndB,
    #[serde(rename = "Reggae")]
    Reggae,
    #[serde(rename = "Rock")]
    Rock,
    #[serde(rename = "Samba")]
    Samba,
    #[serde(rename = "Soul/Funk")]
    SoulFunk,
}

impl MusicGenre {
    /// Display name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicGenre::Acoustic => "Acoustic",
            MusicGenre::African => "African",
            MusicGenre::Alternative => "Alternative",
            MusicGenre::Americana => "Americana",
            MusicGenre::Blues => "Blues",
            MusicGenre::Christian => "Christian",
            MusicGenre::ClassicRock => "Classic Rock",
            MusicGenre::Classical => "Classical",
            MusicGenre::Country => "Country",
            MusicGenre::Dance => "Dance",
            MusicGenre::DjMixes => "DJ Mixes",
            MusicGenre::Electronic => "Electronic",
            MusicGenre::FilmTvStage => "Film, TV & Stage",
            MusicGenre::Gospel => "Gospel",
            MusicGenre::HardRock => "Hard Rock",
            MusicGenre::HipHop => "Hip-Hop",
            MusicGenre::Holiday => "Holiday",
            MusicGenre::Indie => "Indie",
            MusicGenre::Jazz => "Jazz",
            MusicGenre::KPop => "K-Pop",
            MusicGenre::Kids => "Kids",
            MusicGenre::Latin => "Latin",
            MusicGenre::LiveMusic => "Live Music",
            MusicGenre::Metal => "Metal",
            MusicGenre::Pop => "Pop",
            MusicGenre::Punk => "Punk",
            MusicGenre::RAndB => "R&B",
            MusicGenre::Reggae => "Reggae",
            MusicGenre::Rock => "Rock",
            MusicGenre::Samba => "Samba",
            MusicGenre::SoulFunk => "Soul/Funk",
        }
    }
}

impl fmt::Display for MusicGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let genre = MusicGenre::SoulFunk;
        let json = serde_json::to_string(&genre).unwrap();
        assert_eq!(json, "\"Soul/Funk\"");

        let back: MusicGenre = serde_json::from_str(&json).unwrap();
        assert_eq!(back, genre);
    }
}
