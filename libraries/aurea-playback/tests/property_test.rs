//! Property-based tests for waypoint navigation and formatting
//!
//! Uses proptest to verify the circular-navigation and normalization
//! invariants across many random point sets.

use aurea_playback::{format_time, FibonacciPointSet, POINT_EPSILON};
use proptest::prelude::*;

fn arbitrary_points() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..600.0, 1..40)
}

proptest! {
    /// Property: navigation is total on non-empty sets and always lands
    /// on a member
    #[test]
    fn navigation_always_lands_on_a_member(
        points in arbitrary_points(),
        t in -50.0f64..700.0
    ) {
        let set = FibonacciPointSet::new(points);

        let before = set.nearest_before(t).unwrap();
        let after = set.nearest_after(t).unwrap();
        prop_assert!(set.as_slice().contains(&before));
        prop_assert!(set.as_slice().contains(&after));
    }

    /// Property: strictly-previous unless wrapped, strictly-next unless
    /// wrapped; wraparound hits the opposite end exactly
    #[test]
    fn wraparound_at_both_ends(
        points in arbitrary_points(),
        t in -50.0f64..700.0
    ) {
        let set = FibonacciPointSet::new(points);
        let first = *set.as_slice().first().unwrap();
        let last = *set.as_slice().last().unwrap();

        let before = set.nearest_before(t).unwrap();
        if t > first {
            prop_assert!(before < t);
        } else {
            prop_assert_eq!(before, last);
        }

        let after = set.nearest_after(t).unwrap();
        if t < last {
            prop_assert!(after > t);
        } else {
            prop_assert_eq!(after, first);
        }
    }

    /// Property: chaining skips never leaves the set (no way to loop
    /// forever or fall off either end)
    #[test]
    fn chained_skips_stay_in_the_set(
        points in arbitrary_points(),
        t in 0.0f64..600.0
    ) {
        let set = FibonacciPointSet::new(points);

        let back = set.nearest_before(t).unwrap();
        let round = set.nearest_after(back).unwrap();
        prop_assert!(set.as_slice().contains(&round));
    }

    /// Property: construction sorts, deduplicates, and is idempotent
    #[test]
    fn normalization_is_idempotent(points in prop::collection::vec(
        prop_oneof![Just(f64::NAN), 0.0f64..600.0],
        0..40
    )) {
        let set = FibonacciPointSet::new(points);

        prop_assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(set.as_slice().iter().all(|p| p.is_finite()));

        let again = FibonacciPointSet::new(set.as_slice().to_vec());
        prop_assert_eq!(set, again);
    }

    /// Property: formatted timestamps always look like "m:ss" and round
    /// back to the floored second count
    #[test]
    fn format_time_shape(seconds in 0.0f64..36_000.0) {
        let formatted = format_time(seconds);
        let (mins, secs) = formatted.split_once(':').unwrap();

        prop_assert_eq!(secs.len(), 2);
        let mins: u64 = mins.parse().unwrap();
        let secs: u64 = secs.parse().unwrap();
        prop_assert!(secs < 60);
        prop_assert_eq!(mins * 60 + secs, seconds as u64);
    }

    /// Property: the highlight window is symmetric around a point
    #[test]
    fn highlight_window_is_symmetric(
        point in 0.0f64..600.0,
        delta in 0.0f64..0.45
    ) {
        let set = FibonacciPointSet::new([point]);
        prop_assert!(set.is_near(point + delta, point));
        prop_assert!(set.is_near(point - delta, point));

        // Comfortably past the window on either side (margin avoids
        // asserting exactly on the open boundary)
        let outside = delta + POINT_EPSILON + 0.05;
        prop_assert!(!set.is_near(point + outside, point));
        prop_assert!(!set.is_near(point - outside, point));
    }
}
