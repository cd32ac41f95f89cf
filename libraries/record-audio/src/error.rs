/// Audio engine errors
use record_playback::PlaybackError;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the decode/streaming engines
#[derive(Debug, Error)]
pub enum EngineError {
    /// Source could not be opened
    #[error("failed to open source: {0}")]
    Open(String),

    /// Container/format probing failed
    #[error("failed to probe format: {0}")]
    Probe(String),

    /// Decoder construction failed
    #[error("failed to construct decoder: {0}")]
    Decoder(String),

    /// Remote stream could not be fetched
    #[error("stream fetch failed: {0}")]
    Fetch(String),
}

impl From<EngineError> for PlaybackError {
    fn from(err: EngineError) -> Self {
        PlaybackError::EngineRejected(err.to_string())
    }
}
