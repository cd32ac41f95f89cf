//! Musical key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Musical key of a track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicKey {
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    B,
    #[default]
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "Db")]
    DFlat,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "Gb")]
    GFlat,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
}

impl MusicKey {
    /// Every key, in listing order
    pub const ALL: [MusicKey; 17] = [
        MusicKey::AFlat,
        MusicKey::A,
        MusicKey::ASharp,
        MusicKey::BFlat,
        MusicKey::B,
        MusicKey::C,
        MusicKey::CSharp,
        MusicKey::DFlat,
        MusicKey::D,
        MusicKey::DSharp,
        MusicKey::EFlat,
        MusicKey::E,
        MusicKey::F,
        MusicKey::FSharp,
        MusicKey::GFlat,
        MusicKey::G,
        MusicKey::GSharp,
    ];

    /// Display name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicKey::AFlat => "Ab",
            MusicKey::A => "A",
            MusicKey::ASharp => "A#",
            MusicKey::BFlat => "Bb",
            MusicKey::B => "B",
            MusicKey::C => "C",
            MusicKey::CSharp => "C#",
            MusicKey::DFlat => "Db",
            MusicKey::D => "D",
            MusicKey::DSharp => "D#",
            MusicKey::EFlat => "Eb",
            MusicKey::E => "E",
            MusicKey::F => "F",
            MusicKey::FSharp => "F#",
            MusicKey::GFlat => "Gb",
            MusicKey::G => "G",
            MusicKey::GSharp => "G#",
        }
    }
}

impl fmt::Display for MusicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
