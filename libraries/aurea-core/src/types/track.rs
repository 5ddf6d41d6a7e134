/// Track domain type
use serde::{Deserialize, Serialize};

use crate::types::{SongSection, TimeSignature};

/// Reference to a track on an external service
///
/// Used by the playback layer when no directly playable audio source works:
/// a YouTube id can back an embedded player, a Spotify URI only a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "service", content = "ref")]
pub enum ExternalRef {
    /// YouTube video id (e.g. "Y7JG63IuaWs")
    YouTube(String),

    /// Spotify URI (e.g. "spotify:track:...")
    Spotify(String),
}

/// An analyzed song
///
/// Immutable for the lifetime of a play session: selecting a different
/// track replaces playback state wholesale rather than mutating this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier within the catalog
    pub id: String,

    /// Track title
    pub title: String,

    /// Album name
    pub album: String,

    /// Release year
    pub year: u32,

    /// Track duration in seconds
    pub duration_seconds: f64,

    /// Time signatures used across the song
    pub time_signatures: Vec<TimeSignature>,

    /// Structural sections with per-section analysis
    pub sections: Vec<SongSection>,

    /// Timestamps (seconds) where Fibonacci patterns occur; strictly
    /// increasing and within [0, duration_seconds]
    pub fibonacci_points: Vec<f64>,

    /// The single golden-ratio timestamp of the song (seconds)
    pub golden_ratio_point: f64,

    /// Mathematical complexity on a 1-10 scale
    pub complexity: u8,

    /// Analysis prose for display
    pub description: String,

    /// Directly playable audio sample URL, if any
    pub primary_audio_url: Option<String>,

    /// External service reference, if any
    pub external_ref: Option<ExternalRef>,
}

impl Track {
    /// The section containing `t` seconds, if any
    pub fn section_at(&self, t: f64) -> Option<&SongSection> {
        self.sections.iter().find(|s| s.contains(t))
    }

    /// How many sections carry a Fibonacci pattern
    pub fn fibonacci_section_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.has_fibonacci_pattern)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> Track {
        Track {
            id: "sample".to_string(),
            title: "Sample".to_string(),
            album: "Album".to_string(),
            year: 2001,
            duration_seconds: 100.0,
            time_signatures: vec![TimeSignature::new(5, 8)],
            sections: vec![
                SongSection {
                    name: "Intro".to_string(),
                    start_time: 0.0,
                    end_time: 40.0,
                    time_signature: TimeSignature::new(5, 8),
                    has_fibonacci_pattern: true,
                    description: String::new(),
                },
                SongSection {
                    name: "Outro".to_string(),
                    start_time: 40.0,
                    end_time: 100.0,
                    time_signature: TimeSignature::new(7, 8),
                    has_fibonacci_pattern: false,
                    description: String::new(),
                },
            ],
            fibonacci_points: vec![40.0],
            golden_ratio_point: 61.8,
            complexity: 5,
            description: String::new(),
            primary_audio_url: None,
            external_ref: None,
        }
    }

    #[test]
    fn section_lookup() {
        let track = sample_track();
        assert_eq!(track.section_at(10.0).unwrap().name, "Intro");
        assert_eq!(track.section_at(40.0).unwrap().name, "Outro");
        assert!(track.section_at(100.0).is_none());
    }

    #[test]
    fn fibonacci_section_count() {
        assert_eq!(sample_track().fibonacci_section_count(), 1);
    }

    #[test]
    fn external_ref_serde_shape() {
        let json = serde_json::to_value(ExternalRef::YouTube("Y7JG63IuaWs".into())).unwrap();
        assert_eq!(json["service"], "youtube");
        assert_eq!(json["ref"], "Y7JG63IuaWs");
    }
}
