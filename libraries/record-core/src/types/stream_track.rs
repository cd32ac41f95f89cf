/// Streamed track value type
use serde::{Deserialize, Serialize};

/// A track playable from the streaming service.
///
/// Value-like and immutable; supplied by a catalog browse list rather than
/// persisted locally. The `object_path` addresses the audio object in remote
/// storage and is exchanged for a time-limited signed URL at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTrack {
    /// Opaque identifier assigned by the service
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Object-storage path used to request a signed URL
    #[serde(rename = "objectPath")]
    pub object_path: String,
}

impl StreamTrack {
    /// Create a new stream track
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        object_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            object_path: object_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_field_names() {
        let track = StreamTrack::new("demo-1", "Live 2024", "The Spinners", "demos/live.mp3");
        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains("\"objectPath\":\"demos/live.mp3\""));

        let back: StreamTrack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}
