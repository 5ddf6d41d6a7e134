//! Event vocabulary
//!
//! Two directions of traffic around the controller:
//! - [`BackendEvent`]: raw notifications the host forwards from the active
//!   backend (media element events, embed callbacks, poll timer ticks).
//!   Each delivery is stamped with the adapter generation so completions
//!   belonging to a superseded backend are discarded.
//! - [`PlayerEvent`]: notifications the controller emits for the UI,
//!   drained from an internal queue after each command.

use serde::{Deserialize, Serialize};

use crate::backend::BackendKind;
use crate::error::ErrorKind;

/// Raw notification from the active backend, forwarded by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackendEvent {
    /// Backend finished initializing and can accept seeks
    Ready,

    /// Push-based time report (native media `timeupdate`)
    TimeUpdate {
        /// Playhead position, seconds
        seconds: f64,
    },

    /// Backend-side play/pause state change (embed state callback)
    PlaybackChanged {
        /// Whether the backend reports itself playing
        playing: bool,
    },

    /// Poll timer fired; the controller reads the adapter's position
    PollTick,

    /// Track played to its end
    Ended,

    /// Backend failure (load or playback); triggers fallback escalation
    Error {
        /// Backend-reported detail, for logs and notices
        message: String,
    },
}

/// Event emitted by the controller for UI synchronization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A new track was selected and its fallback chain rebuilt
    TrackSelected {
        /// Catalog id of the selected track
        track_id: String,
    },

    /// Play/pause state changed
    StateChanged {
        /// New playing state
        playing: bool,
    },

    /// Playhead moved (seek, skip, backend report, or poll)
    TimeChanged {
        /// Playhead position, seconds
        seconds: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Volume in [0, 1]
        volume: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// The fallback chain switched backends
    BackendSwitched {
        /// Previous backend, if one was active
        from: Option<BackendKind>,
        /// Newly active backend
        to: BackendKind,
    },

    /// A recoverable error occurred; brief, dismissible notice
    TransientError {
        /// Classification of the failure
        kind: ErrorKind,
    },

    /// Every backend failed; persistent, actionable notice
    ChainExhausted,
}
