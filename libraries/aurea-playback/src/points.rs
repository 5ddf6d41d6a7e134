//! Fibonacci point navigation
//!
//! An ordered set of waypoint timestamps within a track. Skip commands
//! treat the set as circular: skipping past the last point returns to the
//! first, and skipping back from before the first lands on the last.

use aurea_core::Track;
use serde::{Deserialize, Serialize};

use crate::error::{PlaybackError, Result};

/// Highlight window around a point, seconds
///
/// UI code marks a point "active" while the playhead is within this
/// distance of it.
pub const POINT_EPSILON: f64 = 0.5;

/// Ordered, deduplicated waypoint timestamps for one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciPointSet {
    points: Vec<f64>,
}

impl FibonacciPointSet {
    /// Build a point set from raw timestamps
    ///
    /// Non-finite values are dropped; the rest are sorted and deduplicated.
    pub fn new(points: impl IntoIterator<Item = f64>) -> Self {
        let mut points: Vec<f64> = points.into_iter().filter(|p| p.is_finite()).collect();
        points.sort_by(f64::total_cmp);
        points.dedup();
        Self { points }
    }

    /// Build the point set for a track, keeping only in-range timestamps
    pub fn for_track(track: &Track) -> Self {
        let duration = track.duration_seconds;
        Self::new(
            track
                .fibonacci_points
                .iter()
                .copied()
                .filter(|&p| p >= 0.0 && p <= duration),
        )
    }

    /// The largest point strictly before `t`
    ///
    /// Wraps to the last point when `t` is at or before the first one.
    pub fn nearest_before(&self, t: f64) -> Result<f64> {
        let last = self.points.last().ok_or(PlaybackError::EmptyPointSet)?;
        Ok(self
            .points
            .iter()
            .rev()
            .find(|&&p| p < t)
            .copied()
            .unwrap_or(*last))
    }

    /// The smallest point strictly after `t`
    ///
    /// Wraps to the first point when `t` is at or past the last one.
    pub fn nearest_after(&self, t: f64) -> Result<f64> {
        let first = self.points.first().ok_or(PlaybackError::EmptyPointSet)?;
        Ok(self
            .points
            .iter()
            .find(|&&p| p > t)
            .copied()
            .unwrap_or(*first))
    }

    /// Whether `t` is within the highlight window of `point`
    pub fn is_near(&self, t: f64, point: f64) -> bool {
        (t - point).abs() < POINT_EPSILON
    }

    /// The points, sorted ascending
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lateralus_points() -> FibonacciPointSet {
        FibonacciPointSet::new([67.0, 156.0, 232.0, 379.0])
    }

    #[test]
    fn nearest_before_midtrack() {
        let points = lateralus_points();
        assert_eq!(points.nearest_before(200.0).unwrap(), 156.0);
        // A timestamp exactly on a point skips to the previous one
        assert_eq!(points.nearest_before(156.0).unwrap(), 67.0);
    }

    #[test]
    fn nearest_before_wraps_to_last() {
        let points = lateralus_points();
        assert_eq!(points.nearest_before(30.0).unwrap(), 379.0);
        assert_eq!(points.nearest_before(67.0).unwrap(), 379.0);
        assert_eq!(points.nearest_before(0.0).unwrap(), 379.0);
    }

    #[test]
    fn nearest_after_midtrack() {
        let points = lateralus_points();
        assert_eq!(points.nearest_after(200.0).unwrap(), 232.0);
        assert_eq!(points.nearest_after(232.0).unwrap(), 379.0);
    }

    #[test]
    fn nearest_after_wraps_to_first() {
        let points = lateralus_points();
        assert_eq!(points.nearest_after(400.0).unwrap(), 67.0);
        assert_eq!(points.nearest_after(379.0).unwrap(), 67.0);
    }

    #[test]
    fn empty_set_signals_error() {
        let points = FibonacciPointSet::new([]);
        assert!(matches!(
            points.nearest_before(10.0),
            Err(PlaybackError::EmptyPointSet)
        ));
        assert!(matches!(
            points.nearest_after(10.0),
            Err(PlaybackError::EmptyPointSet)
        ));
    }

    #[test]
    fn construction_normalizes() {
        let points = FibonacciPointSet::new([379.0, 67.0, f64::NAN, 67.0, 156.0]);
        assert_eq!(points.as_slice(), &[67.0, 156.0, 379.0]);
    }

    #[test]
    fn for_track_drops_out_of_range() {
        let mut track = aurea_core::catalog::track_by_id("schism").unwrap().clone();
        track.fibonacci_points.push(500.0); // past the 403s duration
        track.fibonacci_points.insert(0, -3.0);

        let points = FibonacciPointSet::for_track(&track);
        assert_eq!(points.as_slice(), &[55.0, 144.0, 249.0]);
    }

    #[test]
    fn highlight_window() {
        let points = lateralus_points();
        assert!(points.is_near(67.3, 67.0));
        assert!(points.is_near(66.6, 67.0));
        assert!(!points.is_near(67.5, 67.0));
    }
}
