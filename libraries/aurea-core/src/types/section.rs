/// Structural song analysis types
use serde::{Deserialize, Serialize};

/// A musical time signature, e.g. 5/8 or 13/8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per measure
    pub numerator: u32,

    /// Note value that represents one beat
    pub denominator: u32,
}

impl TimeSignature {
    /// Create a time signature
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl std::fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A named region of a song with its own rhythmic character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSection {
    /// Section name ("Introduction", "Chorus", ...)
    pub name: String,

    /// Section start, seconds from the beginning of the track
    pub start_time: f64,

    /// Section end, seconds from the beginning of the track
    pub end_time: f64,

    /// Dominant time signature of the section
    pub time_signature: TimeSignature,

    /// Whether the section's rhythm follows a Fibonacci pattern
    pub has_fibonacci_pattern: bool,

    /// Analysis notes for display
    pub description: String,
}

impl SongSection {
    /// Section length in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `t` (seconds) falls inside this section
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start_time && t < self.end_time
    }
}
