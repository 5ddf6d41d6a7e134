//! Aurea Playback
//!
//! Backend-agnostic playback control for the Aurea music-analysis player.
//!
//! This crate provides:
//! - Fibonacci point navigation (circular skip-previous/next waypoints)
//! - A uniform adapter interface over three playback backends:
//!   native audio element, embedded video player, external deep link
//! - A deterministic fallback chain that escalates through backends when
//!   one fails to load or play
//! - A playback controller owning all state, driven by UI commands and
//!   host-forwarded backend events
//!
//! # Architecture
//!
//! `aurea-playback` is completely platform-agnostic: no DOM, no iframe
//! API, no browser window. The embedding UI implements the host ports in
//! [`host`] and forwards backend notifications into the controller;
//! tests drive the same seams with scripted fakes.
//!
//! ```text
//! UI surface
//!     commands v           ^ snapshot / events
//! PlaybackController -> BackendAdapter -> host ports (element/embed/link)
//!     ^ escalation on failure
//! FallbackChain (Native primary -> Native fallback -> External)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use aurea_core::catalog;
//! use aurea_playback::{MediaHost, PlaybackController};
//!
//! fn run(host: Box<dyn MediaHost>) {
//!     let mut player = PlaybackController::new(host);
//!
//!     let track = catalog::track_by_id("lateralus").expect("known song").clone();
//!     player.select_track(track);
//!
//!     player.toggle_play();
//!     player.skip_to_next_point(); // jumps to 1:07, the first Fibonacci moment
//!
//!     let snapshot = player.snapshot();
//!     println!(
//!         "{} @ {}",
//!         snapshot.track_id.as_deref().unwrap_or("-"),
//!         aurea_playback::format_time(snapshot.current_time)
//!     );
//! }
//! ```

pub mod backend;
pub mod chain;
mod controller;
mod error;
mod events;
pub mod host;
mod points;

// Public exports
pub use backend::{BackendAdapter, BackendKind};
pub use chain::{fallback_source_url, BackendRoute, ExternalRoute, FallbackChain};
pub use controller::{PlaybackController, PlaybackSnapshot, DEFAULT_VOLUME};
pub use error::{ErrorKind, PlaybackError, Result};
pub use events::{BackendEvent, PlayerEvent};
pub use host::{AudioElement, IntervalGuard, MediaHost, VideoEmbed};
pub use points::{FibonacciPointSet, POINT_EPSILON};

// Timestamp formatting lives with the domain data; re-exported here
// because every player surface needs it
pub use aurea_core::time::format_time;
