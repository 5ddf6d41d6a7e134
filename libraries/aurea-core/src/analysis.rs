//! Derived analysis data for display
//!
//! Thin transforms over catalog tracks: marker lists for timelines and
//! pattern summaries for the educational panels.

use serde::Serialize;

use crate::time::format_time;
use crate::types::Track;

/// Pattern summary for a song's analysis panel
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    /// One line per observed mathematical pattern
    pub patterns: Vec<String>,

    /// Long-form explanation
    pub explanation: String,
}

/// Build the pattern summary shown next to the player
pub fn fibonacci_summary(track: &Track) -> AnalysisSummary {
    let signatures = track
        .time_signatures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    AnalysisSummary {
        patterns: vec![
            format!("Time signatures use Fibonacci numbers: {signatures}"),
            format!(
                "Golden ratio point occurs at {}",
                format_time(track.golden_ratio_point)
            ),
            format!(
                "{} out of {} sections follow Fibonacci patterns",
                track.fibonacci_section_count(),
                track.sections.len()
            ),
            "Song structure mirrors the Fibonacci spiral in its intensity and complexity"
                .to_string(),
            "Rhythmic patterns reflect mathematical proportions of the golden ratio".to_string(),
        ],
        explanation: track.description.clone(),
    }
}

/// Marker timestamps for the visual timeline
///
/// Merges track start, Fibonacci moments, the golden-ratio point, and the
/// track end into one sorted, deduplicated list.
pub fn visual_time_points(track: &Track) -> Vec<f64> {
    let mut points = Vec::with_capacity(track.fibonacci_points.len() + 3);
    points.push(0.0);
    points.extend_from_slice(&track.fibonacci_points);
    points.push(track.golden_ratio_point);
    points.push(track.duration_seconds);

    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}
