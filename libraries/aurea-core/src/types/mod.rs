//! Domain types for analyzed songs

mod section;
mod track;

pub use section::{SongSection, TimeSignature};
pub use track::{ExternalRef, Track};
