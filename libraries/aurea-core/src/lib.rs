//! Aurea Core
//!
//! Domain data and pure math for the Aurea music-analysis player.
//!
//! This crate provides:
//! - **Domain Types**: `Track`, `SongSection`, `TimeSignature`, `ExternalRef`
//! - **Song Catalog**: the static set of analyzed songs, queried by id
//! - **Fibonacci Math**: sequence generation, golden ratio, spiral points
//! - **Analysis Helpers**: derived marker lists and pattern summaries
//!
//! Everything here is stateless and infallible: catalog lookups return
//! `Option`, math functions are total. Playback state and failure handling
//! live in `aurea-playback`.
//!
//! # Example
//!
//! ```rust
//! use aurea_core::catalog;
//! use aurea_core::fibonacci;
//!
//! let track = catalog::track_by_id("lateralus").expect("known song");
//! assert_eq!(track.duration_seconds, 562.0);
//!
//! // The golden-ratio point sits near duration * 0.618
//! let phi = fibonacci::golden_ratio();
//! assert!((track.golden_ratio_point - track.duration_seconds / phi).abs() < 10.0);
//! ```

pub mod analysis;
pub mod catalog;
pub mod fibonacci;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use types::{ExternalRef, SongSection, TimeSignature, Track};
