//! Fibonacci sequence and golden-ratio math
//!
//! Pure functions used by the analysis views and the catalog data. No
//! state, no failure modes; callers treat the outputs as opaque data.

/// A point on the golden spiral, in abstract units centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPoint {
    pub x: f64,
    pub y: f64,
}

/// The golden ratio, (1 + sqrt 5) / 2
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// First `n + 1` Fibonacci numbers, starting 0, 1
pub fn sequence(n: usize) -> Vec<u64> {
    let mut seq = vec![0, 1];
    if n <= 1 {
        seq.truncate(n + 1);
        return seq;
    }

    for i in 2..=n {
        let next = seq[i - 1] + seq[i - 2];
        seq.push(next);
    }
    seq
}

/// Whether `n` is a Fibonacci number
///
/// Uses the perfect-square test: n is Fibonacci iff 5n^2 + 4 or 5n^2 - 4
/// is a perfect square.
pub fn is_fibonacci_number(n: u64) -> bool {
    let five_sq = 5 * n * n;
    is_perfect_square(five_sq + 4) || (five_sq >= 4 && is_perfect_square(five_sq - 4))
}

fn is_perfect_square(n: u64) -> bool {
    let root = (n as f64).sqrt().round() as u64;
    root * root == n
}

/// Whether a time signature has a Fibonacci relationship
pub fn has_fibonacci_time_signature(numerator: u32, denominator: u32) -> bool {
    is_fibonacci_number(u64::from(numerator)) || is_fibonacci_number(u64::from(denominator))
}

/// Sample points along a golden spiral
///
/// `turns` full revolutions with `points_per_turn` samples each. The
/// radius grows by a factor of phi^2 per revolution, scaled down so early
/// turns stay near the origin.
pub fn spiral_points(turns: usize, points_per_turn: usize) -> Vec<SpiralPoint> {
    let phi = golden_ratio();
    let total = turns * points_per_turn;
    let mut points = Vec::with_capacity(total);

    for i in 0..total {
        let angle = (i as f64 / points_per_turn as f64) * std::f64::consts::TAU;
        let radius = phi.powf(2.0 * i as f64 / points_per_turn as f64) / 50.0;
        points.push(SpiralPoint {
            x: angle.cos() * radius,
            y: angle.sin() * radius,
        });
    }

    points
}

/// Fibonacci-proportioned timestamps across a duration
///
/// Splits `duration_seconds` proportionally to the first `max_points`
/// Fibonacci numbers. Useful when a song has no hand-analyzed moments.
pub fn time_intervals(duration_seconds: f64, max_points: usize) -> Vec<f64> {
    let seq = sequence(max_points);
    let total: u64 = seq.iter().sum();
    if total == 0 {
        return vec![0.0; seq.len()];
    }

    seq.iter()
        .map(|&n| (n as f64 / total as f64) * duration_seconds)
        .collect()
}

/// Golden-section split of a length
///
/// Returns the larger-section boundary for horizontal layouts and the
/// smaller one for vertical, matching how the spiral views are framed.
pub fn golden_position(container_size: f64, horizontal: bool) -> f64 {
    let smaller = container_size / golden_ratio();
    if horizontal {
        container_size - smaller
    } else {
        smaller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_prefix() {
        assert_eq!(sequence(0), vec![0]);
        assert_eq!(sequence(1), vec![0, 1]);
        assert_eq!(sequence(7), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn fibonacci_membership() {
        for n in [0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89] {
            assert!(is_fibonacci_number(n), "{n} should be Fibonacci");
        }
        for n in [4, 6, 7, 9, 10, 14, 22, 90] {
            assert!(!is_fibonacci_number(n), "{n} should not be Fibonacci");
        }
    }

    #[test]
    fn tool_time_signatures() {
        // 5/8, 8/8, 13/8 all qualify; 7/8 only via its denominator
        assert!(has_fibonacci_time_signature(5, 8));
        assert!(has_fibonacci_time_signature(13, 8));
        assert!(has_fibonacci_time_signature(7, 8));
        assert!(!has_fibonacci_time_signature(7, 4));
    }

    #[test]
    fn golden_ratio_value() {
        assert!((golden_ratio() - 1.618_033_988_749_895).abs() < 1e-12);
    }

    #[test]
    fn spiral_radius_grows_monotonically() {
        let points = spiral_points(3, 20);
        assert_eq!(points.len(), 60);

        let radii: Vec<f64> = points.iter().map(|p| p.x.hypot(p.y)).collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn time_intervals_span_duration() {
        let intervals = time_intervals(360.0, 8);
        assert_eq!(intervals.len(), 9);
        assert_eq!(intervals[0], 0.0);
        assert!(intervals.iter().all(|&t| (0.0..=360.0).contains(&t)));

        let total: f64 = intervals.iter().sum();
        assert!((total - 360.0).abs() < 1e-9);
    }

    #[test]
    fn golden_position_splits() {
        let larger = golden_position(100.0, true);
        let smaller = golden_position(100.0, false);
        assert!((larger + smaller - 100.0).abs() < 1e-9);
        assert!((smaller / larger - golden_ratio()).abs() < 1e-9);
    }
}
