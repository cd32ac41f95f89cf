//! Streaming playback provider
//!
//! Wraps the network streaming engine. Loading replaces the underlying item
//! synchronously and never fails; duration is discovered asynchronously by
//! fetching the resource and probing it with the decode engine. A resource
//! that never reports a finite duration (a live stream, an unprobeable
//! payload) simply keeps an unknown duration and plays on.

use record_core::StreamTrack;
use record_playback::{PlaybackError, PlaybackProvider, PlaybackSource, Result};
use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::clock::TransportClock;
use crate::error::EngineError;

/// Observed state shared with the probe task.
#[derive(Debug, Default)]
struct StreamState {
    duration: Option<Duration>,
    probe_failed: Option<String>,
}

/// Provider for tracks streamed from remote storage via signed URLs.
pub struct StreamingPlaybackProvider {
    track: Option<StreamTrack>,
    clock: TransportClock,
    state: Arc<Mutex<StreamState>>,
    probe: Option<JoinHandle<()>>,
    loaded: bool,
}

impl StreamingPlaybackProvider {
    /// Create a provider with no loaded item
    pub fn new() -> Self {
        Self {
            track: None,
            clock: TransportClock::new(),
            state: Arc::new(Mutex::new(StreamState::default())),
            probe: None,
            loaded: false,
        }
    }

    async fn observe_stream(url: Url, state: Arc<Mutex<StreamState>>) {
        match Self::fetch_and_probe(&url).await {
            Ok(Some(duration)) => {
                debug!(?duration, "stream duration resolved");
                state.lock().unwrap().duration = Some(duration);
            }
            Ok(None) => {
                debug!("stream reports no finite duration");
            }
            Err(e) => {
                // Duration stays unknown; playback itself is unaffected
                warn!(error = %e, "stream probe failed");
                state.lock().unwrap().probe_failed = Some(e.to_string());
            }
        }
    }

    async fn fetch_and_probe(url: &Url) -> std::result::Result<Option<Duration>, EngineError> {
        let response = reqwest::get(url.clone())
            .await
            .map_err(|e| EngineError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(EngineError::Fetch(format!("HTTP {}", response.status())));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| EngineError::Fetch(e.to_string()))?;

        let mut hint = Hint::new();
        if let Some(ext) = Path::new(url.path()).extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());
        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| EngineError::Probe(e.to_string()))?;

        let track = probed
            .format
            .default_track()
            .ok_or_else(|| EngineError::Probe("no audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        Ok(track
            .codec_params
            .n_frames
            .map(|frames| Duration::from_secs_f64(frames as f64 / f64::from(sample_rate))))
    }

    fn known_duration(&self) -> Option<Duration> {
        self.state.lock().unwrap().duration
    }

    fn clamped(&self, raw: Duration) -> Duration {
        match self.known_duration() {
            Some(limit) => raw.min(limit),
            None => raw,
        }
    }
}

impl Default for StreamingPlaybackProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackProvider for StreamingPlaybackProvider {
    fn load(&mut self, source: PlaybackSource) -> Result<()> {
        let PlaybackSource::Streaming { url, track } = source else {
            warn!("streaming provider asked to load a local source");
            return Err(PlaybackError::InvalidSource);
        };

        // The previous item's observers must be gone before the new item
        // becomes visible; a stale probe writes only into its old state.
        if let Some(handle) = self.probe.take() {
            handle.abort();
        }
        self.state = Arc::new(Mutex::new(StreamState::default()));
        self.clock.stop();
        self.track = Some(track);
        self.loaded = true;

        debug!(url = %url, "streaming engine item replaced");
        self.probe = Some(tokio::spawn(Self::observe_stream(
            url,
            Arc::clone(&self.state),
        )));
        Ok(())
    }

    fn play(&mut self) {
        if self.loaded && !self.is_finished() {
            self.clock.play();
        }
    }

    fn pause(&mut self) {
        self.clock.pause();
    }

    fn stop(&mut self) {
        self.clock.stop();
    }

    fn seek(&mut self, position: Duration) {
        if self.loaded {
            let clamped = self.clamped(position);
            self.clock.seek_to(clamped);
        }
    }

    fn is_playing(&self) -> bool {
        self.clock.is_running() && !self.is_finished()
    }

    fn position(&self) -> Duration {
        self.clamped(self.clock.elapsed())
    }

    fn duration(&self) -> Option<Duration> {
        self.known_duration()
    }

    fn title(&self) -> Option<String> {
        self.track.as_ref().map(|t| t.title.clone())
    }

    fn artist(&self) -> Option<String> {
        self.track.as_ref().map(|t| t.artist.clone())
    }

    fn is_finished(&self) -> bool {
        matches!(
            self.known_duration(),
            Some(limit) if limit > Duration::ZERO && self.clock.elapsed() >= limit
        )
    }
}

impl Drop for StreamingPlaybackProvider {
    fn drop(&mut self) {
        if let Some(handle) = self.probe.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::Track;

    #[test]
    fn implements_provider_contract() {
        fn assert_provider<T: PlaybackProvider>() {}
        assert_provider::<StreamingPlaybackProvider>();
    }

    #[tokio::test]
    async fn rejects_local_sources() {
        let mut provider = StreamingPlaybackProvider::new();
        let result = provider.load(PlaybackSource::Local(Track::new("Local", 0)));
        assert!(matches!(result, Err(PlaybackError::InvalidSource)));
    }

    #[tokio::test]
    async fn transport_is_noop_before_load() {
        let mut provider = StreamingPlaybackProvider::new();
        provider.play();
        assert!(!provider.is_playing());
        provider.seek(Duration::from_secs(10));
        assert_eq!(provider.position(), Duration::ZERO);
    }
}
