//! Playback coordinator - core orchestration
//!
//! Single owner of "what is playing": the two providers, the play queues,
//! transport intent, the observation loop, and now-playing publication.
//! All session state sits behind one mutex; guards are never held across an
//! await, so the only true suspension points are signed-URL resolution and
//! the observation loop's sleeps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use record_core::{Album, StreamTrack, Track};

use crate::error::PlaybackError;
use crate::events::PlaybackEvent;
use crate::media::{NowPlayingInfo, NowPlayingSink, RemoteCommand};
use crate::provider::{PlaybackProvider, PlaybackSource};
use crate::queue::Queue;
use crate::resolver::UrlResolver;
use crate::types::{PlaybackConfig, PlaybackState};

/// Which provider currently owns the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveSource {
    None,
    Local,
    Streaming,
}

/// Album metadata cached for now-playing publication.
#[derive(Debug, Clone)]
struct AlbumContext {
    title: String,
    artist: String,
    artwork: Option<Vec<u8>>,
}

/// Handle to one running observation task. Each task owns its own liveness
/// token, so a freshly started loop can never be confused with one that is
/// still winding down.
struct ObserverHandle {
    alive: Arc<AtomicBool>,
    _task: JoinHandle<()>,
}

struct SessionState {
    local: Box<dyn PlaybackProvider>,
    streaming: Box<dyn PlaybackProvider>,
    active: ActiveSource,

    queue: Queue<Track>,
    stream_queue: Queue<StreamTrack>,
    album: Option<AlbumContext>,

    current_track: Option<Track>,
    current_stream_track: Option<StreamTrack>,
    state: PlaybackState,
    elapsed: Duration,
    duration: Option<Duration>,

    observer: Option<ObserverHandle>,
    last_previous_press: Option<Instant>,
    pending_events: Vec<PlaybackEvent>,
}

impl SessionState {
    fn active_provider_mut(&mut self) -> Option<&mut dyn PlaybackProvider> {
        match self.active {
            ActiveSource::None => None,
            ActiveSource::Local => Some(self.local.as_mut()),
            ActiveSource::Streaming => Some(self.streaming.as_mut()),
        }
    }

    fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(PlaybackEvent::StateChanged { state });
        }
    }

    fn current_track_id(&self) -> Option<String> {
        self.current_track
            .as_ref()
            .map(|t| t.id.to_string())
            .or_else(|| self.current_stream_track.as_ref().map(|t| t.id.clone()))
    }
}

struct CoordinatorCore {
    session: Mutex<SessionState>,
    sink: Arc<dyn NowPlayingSink>,
    resolver: Arc<dyn UrlResolver>,
    config: PlaybackConfig,
}

impl CoordinatorCore {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap()
    }

    // ===== Now Playing =====

    fn publish_now_playing(&self, s: &SessionState) {
        match Self::now_playing_snapshot(s) {
            Some(info) => self.sink.update(info),
            None => self.sink.clear(),
        }
    }

    fn now_playing_snapshot(s: &SessionState) -> Option<NowPlayingInfo> {
        let playback_rate = if s.is_playing() { 1.0 } else { 0.0 };

        if let Some(track) = &s.current_track {
            let artist = s
                .album
                .as_ref()
                .map(|a| a.artist.clone())
                .unwrap_or_else(|| "Unknown Artist".to_string());
            let album_title = s
                .album
                .as_ref()
                .map(|a| a.title.clone())
                .unwrap_or_else(|| "Unknown Album".to_string());
            // Unusable artwork is dropped; playback is never affected by it
            let artwork = s
                .album
                .as_ref()
                .and_then(|a| a.artwork.clone())
                .filter(|bytes| !bytes.is_empty());

            Some(NowPlayingInfo {
                title: track.title.clone(),
                artist,
                album_title,
                artwork,
                duration: s.duration,
                elapsed: s.duration.map(|_| s.elapsed),
                playback_rate,
            })
        } else if let Some(track) = &s.current_stream_track {
            Some(NowPlayingInfo {
                title: track.title.clone(),
                artist: track.artist.clone(),
                album_title: track.title.clone(),
                artwork: None,
                duration: s.duration,
                elapsed: s.duration.map(|_| s.elapsed),
                playback_rate,
            })
        } else {
            None
        }
    }

    // ===== Observation Loop =====

    fn start_observation(core: &Arc<Self>, s: &mut SessionState) {
        if s.observer.is_some() {
            return;
        }
        debug!("starting playback observation");
        let alive = Arc::new(AtomicBool::new(true));
        let task = tokio::spawn(Self::observe_loop(Arc::clone(core), Arc::clone(&alive)));
        s.observer = Some(ObserverHandle { alive, _task: task });
    }

    /// Cooperative teardown: invalidate the task's liveness token and drop
    /// the handle. The task notices at its next cycle and exits; its final
    /// check happens under the session lock, so it can never act after this.
    fn stop_observation_locked(&self, s: &mut SessionState) {
        if let Some(observer) = s.observer.take() {
            observer.alive.store(false, Ordering::SeqCst);
        }
    }

    async fn observe_loop(core: Arc<Self>, alive: Arc<AtomicBool>) {
        debug!("observation task started");
        loop {
            tokio::time::sleep(core.config.observation_interval).await;

            let finished = {
                let mut s = core.lock();
                if !alive.load(Ordering::SeqCst) {
                    break;
                }
                let sample = s
                    .active_provider_mut()
                    .map(|p| (p.position(), p.duration(), p.is_playing(), p.is_finished()));
                match sample {
                    Some((position, duration, engine_playing, finished)) => {
                        let was_playing = s.is_playing();
                        s.elapsed = position;
                        s.duration = duration;
                        if !finished && engine_playing != was_playing {
                            s.set_state(if engine_playing {
                                PlaybackState::Playing
                            } else {
                                PlaybackState::Paused
                            });
                        }
                        core.publish_now_playing(&s);
                        was_playing && finished
                    }
                    None => false,
                }
            };

            if finished {
                Self::advance_after_completion(&core).await;
            }
        }
        debug!("observation task ended");
    }

    /// The active track played to its end: move to the next queue position
    /// and load it paused, or return to idle when the queue is exhausted.
    async fn advance_after_completion(core: &Arc<Self>) {
        enum Next {
            LocalAt(usize),
            StreamAt(usize),
            Exhausted,
            Nothing,
        }

        let next = {
            let mut s = core.lock();
            if let Some(track_id) = s.current_track_id() {
                s.emit(PlaybackEvent::TrackFinished { track_id });
            }
            core.stop_observation_locked(&mut s);
            match s.active {
                ActiveSource::Local => match s.queue.next_index() {
                    Some(i) => Next::LocalAt(i),
                    None => Next::Exhausted,
                },
                ActiveSource::Streaming => match s.stream_queue.next_index() {
                    Some(i) => Next::StreamAt(i),
                    None => Next::Exhausted,
                },
                ActiveSource::None => Next::Nothing,
            }
        };

        match next {
            Next::LocalAt(index) => {
                let mut s = core.lock();
                Self::load_local_at(core, &mut s, index, false);
            }
            Next::StreamAt(index) => {
                Self::load_stream_at(core, index, Some(false)).await;
            }
            Next::Exhausted => {
                let mut s = core.lock();
                core.go_idle_locked(&mut s);
            }
            Next::Nothing => {}
        }
    }

    // ===== Loading =====

    /// Load the local queue entry at `index`, auto-playing only when
    /// `resume` is set.
    fn load_local_at(core: &Arc<Self>, s: &mut SessionState, index: usize, resume: bool) {
        let Some(track) = s.queue.get(index).cloned() else {
            warn!(index, "invalid local track index");
            return;
        };
        s.queue.jump_to(index);
        info!(title = %track.title, index, "loading local track");

        // Old observers must be gone before the new item's state is visible
        core.stop_observation_locked(s);
        s.current_stream_track = None;

        match s.local.load(PlaybackSource::Local(track.clone())) {
            Ok(()) => {
                s.active = ActiveSource::Local;
                s.duration = s.local.duration();
                s.elapsed = Duration::ZERO;
                s.current_track = Some(track.clone());
                s.emit(PlaybackEvent::TrackChanged {
                    track_id: track.id.to_string(),
                });
                if resume {
                    s.local.play();
                    s.set_state(PlaybackState::Playing);
                    Self::start_observation(core, s);
                } else {
                    s.set_state(PlaybackState::Paused);
                }
                core.publish_now_playing(s);
            }
            Err(e) => {
                warn!(error = %e, title = %track.title, "failed to load local track");
                core.recover_from_load_failure(s, &e);
            }
        }
    }

    /// Load the stream queue entry at `index`. Resolution of the signed URL
    /// suspends; the session shows `Loading` until the engine accepts the
    /// item. `resume_override` forces the play flag instead of preserving it.
    async fn load_stream_at(core: &Arc<Self>, index: usize, resume_override: Option<bool>) {
        let (track, resume) = {
            let mut s = core.lock();
            let Some(track) = s.stream_queue.get(index).cloned() else {
                warn!(index, "invalid stream track index");
                return;
            };
            s.stream_queue.jump_to(index);
            let resume = resume_override.unwrap_or_else(|| s.is_playing());

            core.stop_observation_locked(&mut s);
            s.current_track = None;
            s.current_stream_track = Some(track.clone());
            s.set_state(PlaybackState::Loading);
            (track, resume)
        };

        info!(title = %track.title, path = %track.object_path, "resolving signed url");
        match core.resolver.signed_url(&track.object_path).await {
            Ok(url) => {
                let mut s = core.lock();
                // A newer load may have superseded this one during the wait
                if s.current_stream_track.as_ref() != Some(&track)
                    || s.state != PlaybackState::Loading
                {
                    debug!(title = %track.title, "stream load superseded; discarding url");
                    return;
                }

                match s.streaming.load(PlaybackSource::Streaming {
                    url,
                    track: track.clone(),
                }) {
                    Ok(()) => {
                        s.active = ActiveSource::Streaming;
                        s.duration = s.streaming.duration();
                        s.elapsed = Duration::ZERO;
                        s.emit(PlaybackEvent::TrackChanged {
                            track_id: track.id.clone(),
                        });
                        if resume {
                            s.streaming.play();
                            s.set_state(PlaybackState::Playing);
                            Self::start_observation(core, &mut s);
                        } else {
                            s.set_state(PlaybackState::Paused);
                        }
                        core.publish_now_playing(&s);
                    }
                    Err(e) => {
                        warn!(error = %e, title = %track.title, "streaming engine rejected item");
                        core.recover_from_load_failure(&mut s, &e);
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, path = %track.object_path, "signed url resolution failed");
                let mut s = core.lock();
                if s.current_stream_track.as_ref() == Some(&track) {
                    core.recover_from_load_failure(&mut s, &e);
                }
            }
        }
    }

    /// A load failed: log it upstream, surface an error event, and settle in
    /// idle. Never fatal; the next transport command is the retry.
    fn recover_from_load_failure(&self, s: &mut SessionState, error: &PlaybackError) {
        s.active = ActiveSource::None;
        s.current_track = None;
        s.current_stream_track = None;
        s.elapsed = Duration::ZERO;
        s.duration = None;
        s.set_state(PlaybackState::Idle);
        s.emit(PlaybackEvent::Error {
            message: error.to_string(),
        });
        self.publish_now_playing(s);
    }

    fn go_idle_locked(&self, s: &mut SessionState) {
        self.stop_observation_locked(s);
        if let Some(p) = s.active_provider_mut() {
            p.stop();
        }
        s.active = ActiveSource::None;
        s.current_track = None;
        s.current_stream_track = None;
        s.elapsed = Duration::ZERO;
        s.duration = None;
        s.set_state(PlaybackState::Idle);
        self.publish_now_playing(s);
    }

    /// Stop the provider and the loop, reset elapsed time, clear the playing
    /// flag. Queue and cursor are left untouched.
    fn stop_playback_locked(&self, s: &mut SessionState) {
        if let Some(p) = s.active_provider_mut() {
            p.stop();
        }
        self.stop_observation_locked(s);
        s.elapsed = Duration::ZERO;
        if s.active == ActiveSource::None {
            s.set_state(PlaybackState::Idle);
        } else {
            s.set_state(PlaybackState::Paused);
        }
    }
}

/// The playback coordinator.
///
/// Owns exactly one provider per source kind, the play queues, the
/// observation loop, and the now-playing sink. At most one provider is
/// active at any time; switching source kinds tears the old provider's
/// observers down before the new provider's attach.
///
/// Transport methods must be called from within a Tokio runtime (the
/// observation loop and streaming loads are spawned onto it).
pub struct PlaybackCoordinator {
    core: Arc<CoordinatorCore>,
}

impl PlaybackCoordinator {
    /// Create a coordinator from its collaborators.
    pub fn new(
        local: Box<dyn PlaybackProvider>,
        streaming: Box<dyn PlaybackProvider>,
        sink: Arc<dyn NowPlayingSink>,
        resolver: Arc<dyn UrlResolver>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            core: Arc::new(CoordinatorCore {
                session: Mutex::new(SessionState {
                    local,
                    streaming,
                    active: ActiveSource::None,
                    queue: Queue::new(),
                    stream_queue: Queue::new(),
                    album: None,
                    current_track: None,
                    current_stream_track: None,
                    state: PlaybackState::Idle,
                    elapsed: Duration::ZERO,
                    duration: None,
                    observer: None,
                    last_previous_press: None,
                    pending_events: Vec::new(),
                }),
                sink,
                resolver,
                config,
            }),
        }
    }

    // ===== Queue Management =====

    /// Install an album as the local queue (tracks ordered by album index).
    ///
    /// Stops playback and discards the previous queue of either kind along
    /// with its playback position.
    pub fn load_queue(&self, album: &Album) {
        info!(title = %album.title, "loading album queue");
        let mut s = self.core.lock();
        self.core.stop_playback_locked(&mut s);
        s.queue.set_tracks(album.sorted_tracks());
        s.stream_queue.clear();
        s.album = Some(AlbumContext {
            title: album.title.clone(),
            artist: album.artist.clone(),
            artwork: album.artwork.clone(),
        });
        s.current_track = None;
        s.current_stream_track = None;
        s.active = ActiveSource::None;
        s.duration = None;
        s.set_state(PlaybackState::Idle);
        let length = s.queue.len();
        s.emit(PlaybackEvent::QueueChanged { length });
        self.core.publish_now_playing(&s);
    }

    /// Append a track to the end of the local queue.
    pub fn append_to_queue(&self, track: Track) {
        debug!(title = %track.title, "appending track to queue");
        let mut s = self.core.lock();
        s.queue.append(track);
        let length = s.queue.len();
        s.emit(PlaybackEvent::QueueChanged { length });
    }

    /// Replace the local queue contents (e.g. after the user reorders),
    /// keeping the cursor position clamped in range.
    pub fn update_queue_order(&self, tracks: Vec<Track>) {
        debug!(count = tracks.len(), "updating queue order");
        let mut s = self.core.lock();
        s.queue.replace(tracks);
        let length = s.queue.len();
        s.emit(PlaybackEvent::QueueChanged { length });
    }

    /// Install a streaming queue and immediately begin loading its first
    /// entry. The session shows `Loading` until the signed URL resolves and
    /// the engine accepts the item; resolution failure settles back in idle.
    pub async fn load_streaming_queue(&self, tracks: Vec<StreamTrack>) {
        info!(count = tracks.len(), "loading streaming queue");
        let has_first = {
            let mut s = self.core.lock();
            self.core.stop_playback_locked(&mut s);
            s.stream_queue.set_tracks(tracks);
            s.queue.clear();
            s.album = None;
            s.current_track = None;
            s.current_stream_track = None;
            s.active = ActiveSource::None;
            s.duration = None;
            s.set_state(PlaybackState::Idle);
            let length = s.stream_queue.len();
            s.emit(PlaybackEvent::QueueChanged { length });
            !s.stream_queue.is_empty()
        };

        if has_first {
            CoordinatorCore::load_stream_at(&self.core, 0, None).await;
        }
    }

    // ===== Playback Control =====

    /// Load the local queue entry at `index` synchronously, preserving the
    /// current play/pause flag. Out-of-range indices are logged and ignored.
    pub fn load_track_at_index(&self, index: usize) {
        let mut s = self.core.lock();
        let resume = s.is_playing();
        CoordinatorCore::load_local_at(&self.core, &mut s, index, resume);
    }

    /// Toggle play/pause. A no-op (not an error) without an active provider.
    pub fn play_pause(&self) {
        let mut s = self.core.lock();
        if s.active == ActiveSource::None {
            debug!("play_pause ignored; no active provider");
            return;
        }
        if s.is_playing() {
            if let Some(p) = s.active_provider_mut() {
                p.pause();
            }
            s.set_state(PlaybackState::Paused);
            self.core.stop_observation_locked(&mut s);
        } else {
            if let Some(p) = s.active_provider_mut() {
                p.play();
            }
            s.set_state(PlaybackState::Playing);
            CoordinatorCore::start_observation(&self.core, &mut s);
        }
        self.core.publish_now_playing(&s);
    }

    /// Skip forward. Mid-queue this advances one entry, preserving the play
    /// flag. At the last entry the cursor loops to the first entry WITHOUT
    /// auto-playing (restart semantics, kept for compatibility).
    pub async fn skip_to_next(&self) {
        enum Plan {
            LocalAt { index: usize, resume: bool },
            LocalWrap,
            StreamAt { index: usize },
            StreamWrap,
            Stay,
        }

        let plan = {
            let s = self.core.lock();
            if s.current_stream_track.is_some() {
                match s.stream_queue.next_index() {
                    Some(index) => Plan::StreamAt { index },
                    None if !s.stream_queue.is_empty() => Plan::StreamWrap,
                    None => Plan::Stay,
                }
            } else if s.current_track.is_some() {
                match s.queue.next_index() {
                    Some(index) => Plan::LocalAt {
                        index,
                        resume: s.is_playing(),
                    },
                    None if !s.queue.is_empty() => Plan::LocalWrap,
                    None => Plan::Stay,
                }
            } else {
                Plan::Stay
            }
        };

        match plan {
            Plan::LocalAt { index, resume } => {
                let mut s = self.core.lock();
                CoordinatorCore::load_local_at(&self.core, &mut s, index, resume);
            }
            Plan::LocalWrap => {
                let mut s = self.core.lock();
                self.core.stop_playback_locked(&mut s);
                CoordinatorCore::load_local_at(&self.core, &mut s, 0, false);
            }
            Plan::StreamAt { index } => {
                CoordinatorCore::load_stream_at(&self.core, index, None).await;
            }
            Plan::StreamWrap => {
                {
                    let mut s = self.core.lock();
                    self.core.stop_playback_locked(&mut s);
                }
                CoordinatorCore::load_stream_at(&self.core, 0, Some(false)).await;
            }
            Plan::Stay => {}
        }
    }

    /// Skip backward with double-tap semantics: the first press restarts the
    /// current track; a second press within the debounce window moves to the
    /// previous queue entry instead (at the first entry it restarts). The
    /// window is measured from the first press by timestamp comparison, so
    /// there is no delayed-reset race.
    pub async fn skip_to_previous(&self) {
        enum Tap {
            Restart,
            Previous,
        }

        let tap = {
            let mut s = self.core.lock();
            let now = Instant::now();
            let within = s
                .last_previous_press
                .map_or(false, |t| now.duration_since(t) <= self.core.config.previous_debounce);
            if within {
                s.last_previous_press = None;
                Tap::Previous
            } else {
                s.last_previous_press = Some(now);
                Tap::Restart
            }
        };

        match tap {
            Tap::Restart => self.seek_to(Duration::ZERO),
            Tap::Previous => {
                enum Plan {
                    LocalAt { index: usize, resume: bool },
                    StreamAt { index: usize },
                    Restart,
                    Stay,
                }

                let plan = {
                    let s = self.core.lock();
                    if s.current_stream_track.is_some() {
                        match s.stream_queue.previous_index() {
                            Some(index) => Plan::StreamAt { index },
                            None => Plan::Restart,
                        }
                    } else if s.current_track.is_some() {
                        match s.queue.previous_index() {
                            Some(index) => Plan::LocalAt {
                                index,
                                resume: s.is_playing(),
                            },
                            None => Plan::Restart,
                        }
                    } else {
                        Plan::Stay
                    }
                };

                match plan {
                    Plan::LocalAt { index, resume } => {
                        let mut s = self.core.lock();
                        CoordinatorCore::load_local_at(&self.core, &mut s, index, resume);
                    }
                    Plan::StreamAt { index } => {
                        CoordinatorCore::load_stream_at(&self.core, index, None).await;
                    }
                    Plan::Restart => self.seek_to(Duration::ZERO),
                    Plan::Stay => {}
                }
            }
        }
    }

    /// Seek within the current track. The provider clamps to its duration;
    /// the cached elapsed time is read back from the provider and metadata
    /// is republished exactly once.
    pub fn seek_to(&self, position: Duration) {
        let mut s = self.core.lock();
        let sample = s.active_provider_mut().map(|p| {
            p.seek(position);
            (p.position(), p.duration())
        });
        if let Some((elapsed, duration)) = sample {
            s.elapsed = elapsed;
            s.duration = duration;
            self.core.publish_now_playing(&s);
        }
    }

    /// Stop playback: provider stopped, observation cancelled, elapsed time
    /// reset to zero, playing flag cleared. Queue and cursor stay put.
    pub fn stop_playback(&self) {
        let mut s = self.core.lock();
        self.core.stop_playback_locked(&mut s);
        self.core.publish_now_playing(&s);
    }

    /// Stop the observation loop. Idempotent; stopping twice is a no-op.
    pub fn stop_observation(&self) {
        let mut s = self.core.lock();
        self.core.stop_observation_locked(&mut s);
    }

    // ===== Remote Commands =====

    /// Handle a command from the system media surface, reporting per-command
    /// success: Play fails while already playing, Pause fails while not
    /// playing, the rest always succeed.
    pub async fn handle_remote_command(&self, command: RemoteCommand) -> bool {
        debug!(?command, "remote command received");
        match command {
            RemoteCommand::Play => {
                if self.is_playing() {
                    false
                } else {
                    self.play_pause();
                    true
                }
            }
            RemoteCommand::Pause => {
                if self.is_playing() {
                    self.play_pause();
                    true
                } else {
                    false
                }
            }
            RemoteCommand::NextTrack => {
                self.skip_to_next().await;
                true
            }
            RemoteCommand::PreviousTrack => {
                self.skip_to_previous().await;
                true
            }
            RemoteCommand::Seek(position) => {
                self.seek_to(position);
                true
            }
        }
    }

    // ===== State Queries =====

    /// Current session state
    pub fn state(&self) -> PlaybackState {
        self.core.lock().state
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.core.lock().is_playing()
    }

    /// Cached elapsed time of the current track
    pub fn elapsed(&self) -> Duration {
        self.core.lock().elapsed
    }

    /// Cached duration of the current track, when known
    pub fn duration(&self) -> Option<Duration> {
        self.core.lock().duration
    }

    /// Currently loaded local track
    pub fn current_track(&self) -> Option<Track> {
        self.core.lock().current_track.clone()
    }

    /// Currently loaded stream track
    pub fn current_stream_track(&self) -> Option<StreamTrack> {
        self.core.lock().current_stream_track.clone()
    }

    /// Length of the local queue
    pub fn queue_len(&self) -> usize {
        self.core.lock().queue.len()
    }

    /// Length of the streaming queue
    pub fn stream_queue_len(&self) -> usize {
        self.core.lock().stream_queue.len()
    }

    /// Cursor position in whichever queue is active
    pub fn current_index(&self) -> usize {
        let s = self.core.lock();
        match s.active {
            ActiveSource::Streaming => s.stream_queue.current_index(),
            _ => s.queue.current_index(),
        }
    }

    /// Drain queued playback events
    pub fn take_events(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.core.lock().pending_events)
    }
}

impl Drop for PlaybackCoordinator {
    fn drop(&mut self) {
        // The observation task holds its own Arc of the core; invalidating
        // its token is enough for it to wind down on its next cycle.
        if let Ok(mut s) = self.core.session.lock() {
            if let Some(observer) = s.observer.take() {
                observer.alive.store(false, Ordering::SeqCst);
            }
        }
    }
}
