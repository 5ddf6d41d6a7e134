//! Playback backends
//!
//! Three interchangeable ways to make sound: the native media element,
//! an embedded video player, and an external deep link. All three sit
//! behind [`BackendAdapter`] so the controller and the fallback chain can
//! swap them without caring which is active.

mod external;
mod native;
mod youtube;

pub use external::{spotify_open_url, ExternalLinkAdapter};
pub use native::NativeAudioAdapter;
pub use youtube::{
    lookup_video_id, resolve_video_id, watch_url, YouTubeAdapter, DEFAULT_VIDEO_ID, POLL_INTERVAL,
};

use aurea_core::Track;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::host::MediaHost;

/// Which kind of backend is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Native media element playing an audio URL
    Native,

    /// Embedded video player, polled for time
    YouTube,

    /// Deep link opened externally; position is UI-only
    ExternalLink,
}

/// Uniform capability interface over the concrete backends
///
/// Adapters translate every backend-level failure into a
/// [`PlaybackError`](crate::PlaybackError) before it reaches the
/// controller. `load` and `play` take the host because that is where
/// backend resources (elements, embeds, timers, windows) come from;
/// everything else operates on resources the adapter already holds.
pub trait BackendAdapter {
    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Prepare the backend for `track`; failure escalates the chain
    fn load(&mut self, track: &Track, host: &mut dyn MediaHost) -> Result<()>;

    /// Start playback; rejection escalates the chain
    fn play(&mut self, host: &mut dyn MediaHost) -> Result<()>;

    /// Pause playback; no-op when not loaded
    fn pause(&mut self);

    /// Move the playhead
    ///
    /// Skipped entirely when the backend already reports a position within
    /// half a second of the target, so repeated UI seeks don't storm the
    /// backend. Rejection is logged by the caller, never escalated.
    fn seek(&mut self, seconds: f64) -> Result<()>;

    /// Backend-reported playhead position, seconds
    fn position(&self) -> f64;

    /// Whether this backend exposes a controllable volume channel
    fn supports_volume(&self) -> bool {
        false
    }

    /// Set volume in [0, 1]; no-op unless `supports_volume`
    fn set_volume(&mut self, _volume: f32) {}

    /// Mute or unmute; no-op unless `supports_volume`
    fn set_muted(&mut self, _muted: bool) {}

    /// Release every backend resource: timers, elements, embed instances
    ///
    /// Idempotent. Must run before another adapter becomes active so two
    /// backends are never simultaneously authoritative.
    fn teardown(&mut self);
}

/// Backends suppress a seek when already within this distance of the
/// target, seconds
pub(crate) const SEEK_EPSILON: f64 = 0.5;
