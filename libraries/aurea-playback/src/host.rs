//! Host ports for the platform's media facilities
//!
//! The playback core never touches a DOM, an iframe API, or a browser
//! window directly. The embedding UI implements these traits over whatever
//! it has (an HTML audio element, an embedded video player object, a
//! window opener), and tests implement them with scripted fakes.
//!
//! Push-style backend notifications (media element `timeupdate`/`ended`/
//! `error`, embed ready/state-change callbacks, poll timer ticks) are not
//! part of these traits: the host forwards them into
//! [`PlaybackController::handle_event`](crate::PlaybackController::handle_event),
//! stamped with the adapter generation it observed when wiring them up.

use std::time::Duration;

use crate::error::Result;

/// Native media element port
///
/// Mirrors the subset of the HTML media element surface the player uses.
pub trait AudioElement {
    /// Point the element at a new source URL
    fn set_source(&mut self, url: &str);

    /// Start playback; rejection here is the primary fallback trigger
    fn play(&mut self) -> Result<()>;

    /// Pause playback; always succeeds once loaded
    fn pause(&mut self);

    /// Move the playhead, seconds
    fn set_position(&mut self, seconds: f64);

    /// Current playhead position, seconds
    fn position(&self) -> f64;

    /// Set volume in [0, 1]
    fn set_volume(&mut self, volume: f32);

    /// Mute or unmute without changing the volume level
    fn set_muted(&mut self, muted: bool);
}

/// Embedded video player port
///
/// The embed exposes no push-based time events; the adapter polls
/// `position` on a timer instead.
pub trait VideoEmbed {
    /// Start playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead, seconds
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Current playhead position, seconds
    fn position(&self) -> f64;
}

/// Handle to a recurring host timer; dropping it cancels the timer
///
/// Adapters hold their guard for as long as they poll and release it on
/// teardown, so a superseded backend can never tick again.
pub trait IntervalGuard {}

/// The platform seam: everything the playback core asks of its host
pub trait MediaHost {
    /// Create a native media element; fails when the platform has none
    fn create_audio(&mut self) -> Result<Box<dyn AudioElement>>;

    /// Instantiate an embedded video player for `video_id`
    ///
    /// Fails when the embed script is unavailable or the container is
    /// missing; the failure is recovered by fallback escalation.
    fn create_video(&mut self, video_id: &str) -> Result<Box<dyn VideoEmbed>>;

    /// Open a URL in a new browsing context
    ///
    /// Never fails locally: launching the link says nothing about whether
    /// the external service actually plays.
    fn open_external(&mut self, url: &str);

    /// Start a recurring timer that delivers
    /// [`BackendEvent::PollTick`](crate::BackendEvent::PollTick) every `period`
    fn start_interval(&mut self, period: Duration) -> Box<dyn IntervalGuard>;
}
