//! Signed-URL resolver boundary

use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Exchanges an object-storage path for a time-limited playable URL.
///
/// The coordinator calls this once per stream load and neither caches nor
/// proactively refreshes the result. If playback stalls because a URL has
/// expired, the remedy is re-invoking load for that track.
#[async_trait]
pub trait UrlResolver: Send + Sync {
    /// Resolve a playable URL for the given object path
    async fn signed_url(&self, object_path: &str) -> Result<Url>;
}
