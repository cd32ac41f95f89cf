//! Error types for playback coordination

use thiserror::Error;

/// Playback errors.
///
/// All of these are recovered at the coordinator boundary: they are logged,
/// surfaced to the UI as "no audio available", and never escalate beyond the
/// failed command. There is no automatic retry; the next user-initiated
/// transport command is the retry mechanism.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No audio resource reference present for a local track at load time
    #[error("no audio source attached to track")]
    InvalidSource,

    /// The decode/output engine refused the resource (bad format, corrupt
    /// data); carries the engine's own message for diagnostics
    #[error("engine rejected source: {0}")]
    EngineRejected(String),

    /// Signed-URL request failed (network error, malformed response,
    /// server-side error payload)
    #[error("signed URL resolution failed: {0}")]
    ResolutionFailed(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
