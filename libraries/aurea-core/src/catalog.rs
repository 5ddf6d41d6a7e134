//! Static catalog of analyzed songs
//!
//! The catalog is read-only reference data: three Tool songs with their
//! section breakdowns, Fibonacci moments, and golden-ratio points. The
//! playback layer queries it by id and never mutates it.

use std::sync::OnceLock;

use crate::types::{ExternalRef, SongSection, TimeSignature, Track};

static CATALOG: OnceLock<Vec<Track>> = OnceLock::new();

/// All analyzed songs, in display order
pub fn all_tracks() -> &'static [Track] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a song by catalog id
pub fn track_by_id(id: &str) -> Option<&'static Track> {
    all_tracks().iter().find(|t| t.id == id)
}

fn section(
    name: &str,
    start_time: f64,
    end_time: f64,
    signature: (u32, u32),
    has_fibonacci_pattern: bool,
    description: &str,
) -> SongSection {
    SongSection {
        name: name.to_string(),
        start_time,
        end_time,
        time_signature: TimeSignature::new(signature.0, signature.1),
        has_fibonacci_pattern,
        description: description.to_string(),
    }
}

fn build_catalog() -> Vec<Track> {
    vec![
        Track {
            id: "lateralus".to_string(),
            title: "Lateralus".to_string(),
            album: "Lateralus".to_string(),
            year: 2001,
            duration_seconds: 562.0, // 9:22
            time_signatures: vec![
                TimeSignature::new(5, 8),
                TimeSignature::new(8, 8),
                TimeSignature::new(13, 8),
            ],
            sections: vec![
                section(
                    "Introduction",
                    0.0,
                    67.0,
                    (5, 8),
                    true,
                    "The intro builds tension with a 5/8 rhythm, the first Fibonacci number in the song's sequence.",
                ),
                section(
                    "First Verse",
                    67.0,
                    156.0,
                    (8, 8),
                    true,
                    "The verse follows the Fibonacci rhythm structure with syllable counts: 1,1,2,3,5,8,13",
                ),
                section(
                    "Chorus",
                    156.0,
                    232.0,
                    (13, 8),
                    true,
                    "The chorus employs a 13/8 time signature, continuing the Fibonacci sequence from the verse.",
                ),
                section(
                    "Instrumental Bridge",
                    232.0,
                    379.0,
                    (8, 8),
                    true,
                    "This section features spiraling patterns that mirror the mathematical spiral of the Fibonacci sequence.",
                ),
                section(
                    "Climax and Outro",
                    379.0,
                    562.0,
                    (5, 8),
                    true,
                    "Returns to the 5/8 rhythm, creating a circular structure that mirrors the golden spiral.",
                ),
            ],
            fibonacci_points: vec![67.0, 156.0, 232.0, 379.0],
            golden_ratio_point: 347.0, // ~5:47 into the song
            complexity: 10,
            description: "Lateralus is perhaps Tool's most mathematically intricate song, explicitly built around the Fibonacci sequence. The syllable count of the verses follows the sequence (1,1,2,3,5,8,13), and the time signatures cycle through Fibonacci numbers (5/8, 8/8, 13/8). The song's structure itself represents a spiral, mirroring the golden spiral derived from Fibonacci numbers.".to_string(),
            primary_audio_url: Some(
                "https://audio-samples-tool-songs.s3.amazonaws.com/lateralus-sample.mp3".to_string(),
            ),
            external_ref: Some(ExternalRef::Spotify(
                "spotify:track:7tvuLLroI0n6uYBWuFJBDi".to_string(),
            )),
        },
        Track {
            id: "schism".to_string(),
            title: "Schism".to_string(),
            album: "Lateralus".to_string(),
            year: 2001,
            duration_seconds: 403.0, // 6:43
            time_signatures: vec![
                TimeSignature::new(5, 8),
                TimeSignature::new(7, 8),
                TimeSignature::new(3, 8),
            ],
            sections: vec![
                section(
                    "Introduction",
                    0.0,
                    55.0,
                    (5, 8),
                    true,
                    "Opens with a complex 5/8 pattern that establishes mathematical tension.",
                ),
                section(
                    "Verse",
                    55.0,
                    144.0,
                    (7, 8),
                    false,
                    "Shifts to 7/8, creating a mathematical juxtaposition with the Fibonacci-based intro.",
                ),
                section(
                    "Chorus",
                    144.0,
                    188.0,
                    (3, 8),
                    true,
                    "Uses 3/8 time, the fourth number in the Fibonacci sequence.",
                ),
                section(
                    "Bridge",
                    188.0,
                    249.0,
                    (5, 8),
                    true,
                    "Returns to 5/8, continuing the Fibonacci pattern.",
                ),
                section(
                    "Outro",
                    249.0,
                    403.0,
                    (7, 8),
                    false,
                    "Complex outro that weaves between time signatures.",
                ),
            ],
            fibonacci_points: vec![55.0, 144.0, 249.0],
            golden_ratio_point: 249.0, // ~4:09 into the song
            complexity: 8,
            description: "Schism features constantly changing time signatures that create mathematical complexity. While not as explicitly Fibonacci-based as Lateralus, it still incorporates the sequence in its structure and rhythmic patterns. The song's overall composition reflects mathematical division - fitting its lyrical theme of division and separation.".to_string(),
            primary_audio_url: Some(
                "https://audio-samples-tool-songs.s3.amazonaws.com/schism-sample.mp3".to_string(),
            ),
            external_ref: Some(ExternalRef::Spotify(
                "spotify:track:7EAdCXBGwmYQQTM0QpvGP6".to_string(),
            )),
        },
        Track {
            id: "fibonacci".to_string(),
            title: "Forty Six & 2".to_string(),
            album: "\u{c6}nima".to_string(),
            year: 1996,
            duration_seconds: 360.0, // 6:00
            time_signatures: vec![
                TimeSignature::new(3, 4),
                TimeSignature::new(5, 8),
                TimeSignature::new(8, 8),
            ],
            sections: vec![
                section(
                    "Introduction",
                    0.0,
                    89.0,
                    (3, 4),
                    true,
                    "Standard time signature but with rhythmic patterns that follow Fibonacci ratios.",
                ),
                section(
                    "First Section",
                    89.0,
                    177.0,
                    (5, 8),
                    true,
                    "Shifts to 5/8, incorporating the 5th Fibonacci number.",
                ),
                section(
                    "Middle Section",
                    177.0,
                    297.0,
                    (8, 8),
                    true,
                    "Evolves to 8/8, continuing the sequence and building tension.",
                ),
                section(
                    "Climax",
                    297.0,
                    321.0,
                    (5, 8),
                    true,
                    "Returns to 5/8 at precisely the golden ratio point of the song.",
                ),
                section(
                    "Outro",
                    321.0,
                    360.0,
                    (3, 4),
                    true,
                    "Concludes with a return to the original time signature, creating mathematical symmetry.",
                ),
            ],
            fibonacci_points: vec![89.0, 177.0, 297.0, 321.0],
            golden_ratio_point: 222.0, // ~3:42 into the song
            complexity: 9,
            description: "Forty Six & 2 explores mathematical concepts related to human evolution and the Fibonacci sequence. The song references Carl Jung and the concept of 'shadow' integration, with musical structures that mirror mathematical progressions. The rhythmic patterns feature Fibonacci proportions throughout the composition.".to_string(),
            primary_audio_url: Some(
                "https://audio-samples-tool-songs.s3.amazonaws.com/fortysix-and-2-sample.mp3"
                    .to_string(),
            ),
            external_ref: Some(ExternalRef::Spotify(
                "spotify:track:3BJrbV0xWPPkGZ3DC2XQz6".to_string(),
            )),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::golden_ratio;

    #[test]
    fn lookup_by_id() {
        assert_eq!(track_by_id("lateralus").unwrap().title, "Lateralus");
        assert_eq!(track_by_id("fibonacci").unwrap().title, "Forty Six & 2");
        assert!(track_by_id("unknown").is_none());
    }

    #[test]
    fn points_strictly_increasing_and_in_range() {
        for track in all_tracks() {
            let points = &track.fibonacci_points;
            assert!(!points.is_empty(), "{} has no points", track.id);
            assert!(
                points.windows(2).all(|w| w[0] < w[1]),
                "{} points not strictly increasing",
                track.id
            );
            assert!(
                points
                    .iter()
                    .all(|&p| p >= 0.0 && p <= track.duration_seconds),
                "{} points out of range",
                track.id
            );
        }
    }

    #[test]
    fn sections_tile_the_duration() {
        for track in all_tracks() {
            assert_eq!(track.sections[0].start_time, 0.0);
            assert_eq!(
                track.sections.last().unwrap().end_time,
                track.duration_seconds
            );
            assert!(track
                .sections
                .windows(2)
                .all(|w| w[0].end_time == w[1].start_time));
        }
    }

    #[test]
    fn golden_point_near_golden_section() {
        // Hand-analyzed golden points sit near duration / phi, within a
        // musically meaningful tolerance (section boundaries are quantized)
        for track in all_tracks() {
            let ideal = track.duration_seconds / golden_ratio();
            assert!(
                (track.golden_ratio_point - ideal).abs() < 15.0,
                "{}: golden point {} too far from ideal {}",
                track.id,
                track.golden_ratio_point,
                ideal
            );
        }
    }

    #[test]
    fn every_track_has_a_playable_source() {
        for track in all_tracks() {
            assert!(track.primary_audio_url.is_some());
            assert!(track.external_ref.is_some());
        }
    }
}
