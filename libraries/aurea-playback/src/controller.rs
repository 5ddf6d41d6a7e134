//! Playback controller - core orchestration
//!
//! The single owner and mutator of playback state. UI code reads
//! snapshots and issues commands; the host forwards backend notifications
//! into [`PlaybackController::handle_event`]. Nothing else touches the
//! active backend.

use aurea_core::Track;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::{
    BackendAdapter, BackendKind, ExternalLinkAdapter, NativeAudioAdapter, YouTubeAdapter,
};
use crate::chain::{BackendRoute, ExternalRoute, FallbackChain};
use crate::error::{ErrorKind, PlaybackError};
use crate::events::{BackendEvent, PlayerEvent};
use crate::host::MediaHost;
use crate::points::FibonacciPointSet;

/// Volume applied to a freshly selected track
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Read-only view of the playback state for UI rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    /// Selected track id, if any
    pub track_id: Option<String>,

    /// Kind of the active backend, if one is loaded
    pub active_backend: Option<BackendKind>,

    /// Whether playback is (believed to be) running
    pub is_playing: bool,

    /// Playhead position, seconds; always within [0, duration]
    pub current_time: f64,

    /// Track duration, seconds; 0 when no track is selected
    pub duration: f64,

    /// Volume in [0, 1]
    pub volume: f32,

    /// Whether audio is muted
    pub is_muted: bool,

    /// Most recent unresolved error, if any
    pub last_error: Option<ErrorKind>,

    /// Zero-based index into the fallback chain
    pub attempt_count: usize,

    /// Whether every backend has been tried and failed
    pub chain_exhausted: bool,
}

/// Owns the active backend, the fallback chain, and all playback state
///
/// Single-threaded by design: commands and forwarded backend events are
/// serialized by the host's event loop, so no locking is needed. The
/// safety discipline is "tear down before replace" plus generation
/// tagging, which together guarantee that no stale async completion can
/// mutate state belonging to a superseded track or backend.
pub struct PlaybackController {
    host: Box<dyn MediaHost>,

    // Selection
    track: Option<Track>,
    points: FibonacciPointSet,
    chain: FallbackChain,

    // Active backend
    active: Option<Box<dyn BackendAdapter>>,
    generation: u64,
    backend_ready: bool,
    pending_seek: Option<f64>,

    // Playback state
    play_intent: bool,
    is_playing: bool,
    current_time: f64,
    volume: f32,
    muted: bool,
    last_error: Option<ErrorKind>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a controller over the given host
    pub fn new(host: Box<dyn MediaHost>) -> Self {
        Self {
            host,
            track: None,
            points: FibonacciPointSet::new([]),
            chain: FallbackChain::empty(),
            active: None,
            generation: 0,
            backend_ready: false,
            pending_seek: None,
            play_intent: false,
            is_playing: false,
            current_time: 0.0,
            volume: DEFAULT_VOLUME,
            muted: false,
            last_error: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Read surface =====

    /// Read-only state snapshot for rendering
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            track_id: self.track.as_ref().map(|t| t.id.clone()),
            active_backend: self.active.as_ref().map(|a| a.kind()),
            is_playing: self.is_playing,
            current_time: self.current_time,
            duration: self.duration(),
            volume: self.volume,
            is_muted: self.muted,
            last_error: self.last_error,
            attempt_count: self.chain.attempt(),
            chain_exhausted: self.chain.is_exhausted(),
        }
    }

    /// Drain queued UI events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// The generation stamp the host must attach to forwarded events
    ///
    /// Re-read after every command that can swap the backend.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The selected track
    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    /// Waypoints of the selected track
    pub fn points(&self) -> &FibonacciPointSet {
        &self.points
    }

    /// The waypoint currently within the highlight window, if any
    pub fn highlighted_point(&self) -> Option<f64> {
        self.points
            .as_slice()
            .iter()
            .copied()
            .find(|&p| self.points.is_near(self.current_time, p))
    }

    // ===== Commands =====

    /// Select a track: tear down, rebuild the chain, load the first route
    ///
    /// Does not auto-play. Playback state is rebuilt wholesale; nothing of
    /// the previous track's session survives.
    pub fn select_track(&mut self, track: Track) {
        self.teardown_active();

        self.play_intent = false;
        self.is_playing = false;
        self.current_time = 0.0;
        self.volume = DEFAULT_VOLUME;
        self.muted = false;
        self.last_error = None;
        self.pending_seek = None;

        self.points = FibonacciPointSet::for_track(&track);
        self.chain = FallbackChain::for_track(&track);
        self.push(PlayerEvent::TrackSelected {
            track_id: track.id.clone(),
        });
        self.track = Some(track);

        if self.chain.is_empty() {
            warn!("selected track has no playable route");
            self.exhaust();
            return;
        }
        self.activate_current_route(None);
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            if let Some(adapter) = self.active.as_mut() {
                adapter.pause();
            }
            self.play_intent = false;
            self.set_playing(false);
            return;
        }

        if self.active.is_none() {
            debug!("toggle_play with no active backend");
            return;
        }
        self.play_intent = true;
        self.try_play();
    }

    /// Seek to `seconds`, clamped into [0, duration]
    ///
    /// The reported time updates optimistically; UI responsiveness wins
    /// over waiting for backend confirmation. Backend rejection is logged
    /// and never escalates the chain.
    pub fn seek_to(&mut self, seconds: f64) {
        if seconds.is_nan() {
            warn!("ignoring NaN seek");
            return;
        }
        let target = seconds.clamp(0.0, self.duration());

        self.current_time = target;
        self.push(PlayerEvent::TimeChanged { seconds: target });

        if let Some(adapter) = self.active.as_mut() {
            if let Err(e) = adapter.seek(target) {
                warn!("seek rejected: {e}");
            }
        }
    }

    /// Skip back to the previous waypoint (wrapping) and play
    pub fn skip_to_previous_point(&mut self) {
        match self.points.nearest_before(self.current_time) {
            Ok(point) => self.skip_to(point),
            Err(PlaybackError::EmptyPointSet) => debug!("skip ignored, no points"),
            Err(e) => warn!("skip failed: {e}"),
        }
    }

    /// Skip forward to the next waypoint (wrapping) and play
    pub fn skip_to_next_point(&mut self) {
        match self.points.nearest_after(self.current_time) {
            Ok(point) => self.skip_to(point),
            Err(PlaybackError::EmptyPointSet) => debug!("skip ignored, no points"),
            Err(e) => warn!("skip failed: {e}"),
        }
    }

    /// Set volume in [0, 1]
    ///
    /// Logical volume lives here for every backend; only volume-capable
    /// adapters get it forwarded.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(adapter) = self.active.as_mut() {
            if adapter.supports_volume() {
                adapter.set_volume(self.volume);
            }
        }
        self.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    /// Toggle mute without losing the volume level
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(adapter) = self.active.as_mut() {
            if adapter.supports_volume() {
                adapter.set_muted(self.muted);
            }
        }
        self.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    /// Manually escalate to the next source and play it
    ///
    /// The user-facing "try another source" affordance. Reports
    /// exhaustion when nothing is left to try.
    pub fn request_alternative_source(&mut self) {
        if !self.chain.has_next() {
            debug!("no alternative source available");
            self.push(PlayerEvent::TransientError {
                kind: ErrorKind::ChainExhausted,
            });
            return;
        }

        let from = self.active.as_ref().map(|a| a.kind());
        self.play_intent = true;
        self.pending_seek = Some(self.current_time);
        self.teardown_active();
        self.chain.advance();
        self.activate_current_route(from);
    }

    /// Jump directly to the external backend, without auto-play
    pub fn request_external_backend(&mut self) {
        if matches!(
            self.active.as_ref().map(|a| a.kind()),
            Some(BackendKind::YouTube | BackendKind::ExternalLink)
        ) {
            return;
        }

        let from = self.active.as_ref().map(|a| a.kind());
        let had_external = {
            // Peek without committing the cursor
            let mut probe = self.chain.clone();
            probe.jump_to_external().is_some()
        };
        if !had_external {
            debug!("no external backend for this track");
            self.push(PlayerEvent::TransientError {
                kind: ErrorKind::ChainExhausted,
            });
            return;
        }

        self.play_intent = false;
        self.pending_seek = Some(self.current_time);
        self.last_error = None;
        self.teardown_active();
        self.chain.jump_to_external();
        self.activate_current_route(from);
    }

    /// Release everything; called when the player surface unmounts
    pub fn shutdown(&mut self) {
        self.teardown_active();
        self.play_intent = false;
        self.set_playing(false);
    }

    // ===== Backend event intake =====

    /// Feed a backend notification forwarded by the host
    ///
    /// `generation` is the stamp the host captured when it wired up the
    /// notification source. Deliveries from a superseded backend are
    /// discarded; this is what makes rapid track switching safe.
    pub fn handle_event(&mut self, generation: u64, event: BackendEvent) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale backend event");
            return;
        }
        if self.active.is_none() {
            return;
        }

        match event {
            BackendEvent::Ready => {
                self.backend_ready = true;
                self.apply_pending_seek();
                if self.play_intent && !self.is_playing {
                    self.try_play();
                }
            }
            BackendEvent::TimeUpdate { seconds } => {
                if seconds.is_finite() {
                    self.current_time = seconds.clamp(0.0, self.duration());
                    self.push(PlayerEvent::TimeChanged {
                        seconds: self.current_time,
                    });
                }
            }
            BackendEvent::PollTick => {
                let position = self.active.as_ref().map_or(0.0, |a| a.position());
                if position.is_finite() {
                    self.current_time = position.clamp(0.0, self.duration());
                    self.push(PlayerEvent::TimeChanged {
                        seconds: self.current_time,
                    });
                }
            }
            BackendEvent::PlaybackChanged { playing } => {
                self.set_playing(playing);
            }
            BackendEvent::Ended => {
                self.play_intent = false;
                self.set_playing(false);
                self.current_time = 0.0;
                self.push(PlayerEvent::TimeChanged { seconds: 0.0 });
            }
            BackendEvent::Error { message } => {
                let error = if self.backend_ready {
                    PlaybackError::Play(message)
                } else {
                    PlaybackError::Load(message)
                };
                self.escalate(&error);
            }
        }
    }

    // ===== Internals =====

    fn duration(&self) -> f64 {
        self.track.as_ref().map_or(0.0, |t| t.duration_seconds)
    }

    fn push(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.push(PlayerEvent::StateChanged { playing });
        }
    }

    fn skip_to(&mut self, point: f64) {
        self.seek_to(point);
        // Skipping implies intent to listen
        self.play_intent = true;
        if !self.is_playing {
            self.try_play();
        }
    }

    /// Attempt playback on the active adapter; escalate on rejection
    fn try_play(&mut self) {
        let Some(adapter) = self.active.as_mut() else {
            return;
        };
        match adapter.play(self.host.as_mut()) {
            Ok(()) => {
                self.last_error = None;
                self.set_playing(true);
            }
            Err(e) => {
                self.set_playing(false);
                self.escalate(&e);
            }
        }
    }

    /// Drop the active adapter and invalidate its callbacks
    fn teardown_active(&mut self) {
        if let Some(mut adapter) = self.active.take() {
            adapter.teardown();
        }
        // Invalidate anything still in flight against the old backend
        self.generation = self.generation.wrapping_add(1);
        self.backend_ready = false;
    }

    /// Escalate after a backend failure: tear down, advance, reload
    ///
    /// The last requested position is preserved and restored on the next
    /// backend once it loads.
    fn escalate(&mut self, error: &PlaybackError) {
        let kind = error.kind();
        warn!("backend failed ({error}), escalating");
        self.last_error = Some(kind);
        self.push(PlayerEvent::TransientError { kind });

        let from = self.active.as_ref().map(|a| a.kind());
        self.pending_seek = Some(self.current_time);
        self.teardown_active();
        self.chain.advance();
        self.activate_current_route(from);
    }

    /// Build, load, and wire the route at the chain cursor
    ///
    /// Walks forward over routes that fail to load; ends in exhaustion if
    /// none is left.
    fn activate_current_route(&mut self, from: Option<BackendKind>) {
        loop {
            let Some(route) = self.chain.current().cloned() else {
                self.exhaust();
                return;
            };
            let Some(track) = self.track.clone() else {
                return;
            };

            let mut adapter = build_adapter(&route);
            self.generation = self.generation.wrapping_add(1);
            self.backend_ready = false;

            match adapter.load(&track, self.host.as_mut()) {
                Ok(()) => {
                    if adapter.supports_volume() {
                        adapter.set_volume(self.volume);
                        adapter.set_muted(self.muted);
                    }
                    let to = adapter.kind();
                    self.active = Some(adapter);
                    self.push(PlayerEvent::BackendSwitched { from, to });
                    self.apply_pending_seek();
                    if self.play_intent && !self.is_playing {
                        self.try_play();
                    }
                    return;
                }
                Err(e) => {
                    warn!("route failed to load ({e}), trying next");
                    self.last_error = Some(ErrorKind::Load);
                    self.push(PlayerEvent::TransientError {
                        kind: ErrorKind::Load,
                    });
                    self.chain.advance();
                }
            }
        }
    }

    /// Restore the preserved seek target on the active adapter
    fn apply_pending_seek(&mut self) {
        let Some(target) = self.pending_seek else {
            return;
        };
        let Some(adapter) = self.active.as_mut() else {
            return;
        };
        match adapter.seek(target) {
            Ok(()) => self.pending_seek = None,
            Err(e) => warn!("could not restore seek target: {e}"),
        }
    }

    /// Terminal failure: nothing left to fall back to
    fn exhaust(&mut self) {
        self.last_error = Some(ErrorKind::ChainExhausted);
        self.play_intent = false;
        self.set_playing(false);
        self.push(PlayerEvent::ChainExhausted);
    }
}

/// Construct the adapter for a route
fn build_adapter(route: &BackendRoute) -> Box<dyn BackendAdapter> {
    match route {
        BackendRoute::NativePrimary { url } | BackendRoute::NativeFallback { url } => {
            Box::new(NativeAudioAdapter::new(url.clone()))
        }
        BackendRoute::External(ExternalRoute::Embed { video_id }) => {
            Box::new(YouTubeAdapter::new(video_id.clone()))
        }
        BackendRoute::External(ExternalRoute::Link { url }) => {
            Box::new(ExternalLinkAdapter::new(url.clone()))
        }
    }
}
