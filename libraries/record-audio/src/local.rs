//! Local-file playback provider backed by Symphonia
//!
//! Loading opens and probes the file with the decode engine; the engine's
//! verdict is authoritative (a prior existence check is advisory logging
//! only). Duration comes from the codec's frame count. Transport state is
//! driven by a pause-aware clock, clamped to the known duration.

use record_core::Track;
use record_playback::{PlaybackError, PlaybackProvider, PlaybackSource, Result};
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

use crate::clock::TransportClock;
use crate::error::EngineError;

/// Provider for catalog tracks backed by locally imported files.
pub struct LocalPlaybackProvider {
    track: Option<Track>,
    clock: TransportClock,
    duration: Option<Duration>,
    loaded: bool,
}

impl LocalPlaybackProvider {
    /// Create a provider with no loaded track
    pub fn new() -> Self {
        Self {
            track: None,
            clock: TransportClock::new(),
            duration: None,
            loaded: false,
        }
    }

    /// Open and probe the file, constructing a decoder as the acceptance
    /// test. Returns the duration when the codec reports a frame count.
    fn probe_file(path: &Path) -> std::result::Result<Option<Duration>, EngineError> {
        let file = File::open(path).map_err(|e| EngineError::Open(e.to_string()))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

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

        symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| EngineError::Decoder(e.to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        Ok(track
            .codec_params
            .n_frames
            .map(|frames| Duration::from_secs_f64(frames as f64 / f64::from(sample_rate))))
    }

    fn clamped(&self, raw: Duration) -> Duration {
        match self.duration {
            Some(limit) => raw.min(limit),
            None => raw,
        }
    }
}

impl Default for LocalPlaybackProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackProvider for LocalPlaybackProvider {
    fn load(&mut self, source: PlaybackSource) -> Result<()> {
        let PlaybackSource::Local(track) = source else {
            warn!("local provider asked to load a streaming source");
            return Err(PlaybackError::InvalidSource);
        };

        // Replacing the engine item resets the previous transport entirely
        self.loaded = false;
        self.clock.stop();
        self.duration = None;
        self.track = Some(track.clone());

        let Some(path) = track.audio_path.as_deref() else {
            warn!(title = %track.title, "track has no audio resource");
            return Err(PlaybackError::InvalidSource);
        };

        // Advisory; a vanished file surfaces as an engine failure below
        if !path.exists() {
            debug!(path = %path.display(), "audio file missing at load time");
        }

        let duration = Self::probe_file(path)?;
        debug!(title = %track.title, ?duration, "local engine accepted file");
        self.duration = duration;
        self.loaded = true;
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
            self.clock.seek_to(self.clamped(position));
        }
    }

    fn is_playing(&self) -> bool {
        self.clock.is_running() && !self.is_finished()
    }

    fn position(&self) -> Duration {
        self.clamped(self.clock.elapsed())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn title(&self) -> Option<String> {
        self.track.as_ref().map(|t| t.title.clone())
    }

    fn artist(&self) -> Option<String> {
        None
    }

    fn is_finished(&self) -> bool {
        matches!(self.duration, Some(limit) if limit > Duration::ZERO && self.clock.elapsed() >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_test_wav(dir: &Path, name: &str, seconds: u32) -> PathBuf {
        let path = dir.join(name);
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for t in 0..(44_100 * seconds) {
            let sample = ((t as f32 * 0.03).sin() * 0.2 * f32::from(i16::MAX)) as i16;
            writer.write_sample(sample).unwrap();
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    fn loaded_provider(path: &Path) -> LocalPlaybackProvider {
        let track = Track::new("Fixture", 0).with_audio_path(path);
        let mut provider = LocalPlaybackProvider::new();
        provider
            .load(PlaybackSource::Local(track))
            .expect("fixture should load");
        provider
    }

    #[test]
    fn wav_fixture_loads_with_duration() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_wav(dir.path(), "fixture.wav", 2);

        let provider = loaded_provider(&path);
        let duration = provider.duration().expect("wav reports frame count");
        assert!((duration.as_secs_f64() - 2.0).abs() < 0.1);
        assert!(!provider.is_playing());
        assert_eq!(provider.title().as_deref(), Some("Fixture"));
    }

    #[test]
    fn missing_audio_path_is_invalid_source() {
        let mut provider = LocalPlaybackProvider::new();
        let result = provider.load(PlaybackSource::Local(Track::new("No Audio", 0)));
        assert!(matches!(result, Err(PlaybackError::InvalidSource)));
    }

    #[test]
    fn nonexistent_file_is_engine_rejected() {
        let mut provider = LocalPlaybackProvider::new();
        let track = Track::new("Gone", 0).with_audio_path("/nonexistent/file.wav");
        let result = provider.load(PlaybackSource::Local(track));
        assert!(matches!(result, Err(PlaybackError::EngineRejected(_))));
    }

    #[test]
    fn corrupt_file_is_engine_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.ogg");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is not audio data at all").unwrap();

        let mut provider = LocalPlaybackProvider::new();
        let track = Track::new("Corrupt", 0).with_audio_path(&path);
        let result = provider.load(PlaybackSource::Local(track));
        assert!(matches!(result, Err(PlaybackError::EngineRejected(_))));
    }

    #[test]
    fn failed_load_leaves_provider_unloaded() {
        let mut provider = LocalPlaybackProvider::new();
        let track = Track::new("Gone", 0).with_audio_path("/nonexistent/file.wav");
        let _ = provider.load(PlaybackSource::Local(track));

        // Transport is a no-op with nothing loaded
        provider.play();
        assert!(!provider.is_playing());
        assert_eq!(provider.position(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn transport_drives_the_clock() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_wav(dir.path(), "fixture.wav", 2);
        let mut provider = loaded_provider(&path);

        provider.play();
        assert!(provider.is_playing());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(provider.position(), Duration::from_millis(500));

        provider.pause();
        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(provider.position(), Duration::from_millis(500));

        provider.stop();
        assert_eq!(provider.position(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn seek_clamps_and_end_of_track_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_wav(dir.path(), "fixture.wav", 2);
        let mut provider = loaded_provider(&path);

        provider.seek(Duration::from_secs(500));
        assert_eq!(provider.position(), provider.duration().unwrap());
        assert!(provider.is_finished());
        assert!(!provider.is_playing());

        provider.seek(Duration::from_millis(1900));
        provider.play();
        tokio::time::advance(Duration::from_millis(300)).await;
        assert!(provider.is_finished());
        assert!(!provider.is_playing());
        assert_eq!(provider.position(), provider.duration().unwrap());
    }
}
