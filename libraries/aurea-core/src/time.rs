//! Timestamp display formatting

/// Format a timestamp in seconds as "m:ss"
///
/// Whole seconds only; fractional parts are floored. Non-finite or
/// negative inputs format as "0:00" so display code never panics on
/// garbage from a backend.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(562.0), "9:22");
    }

    #[test]
    fn floors_fractional_seconds() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(60.1), "1:00");
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn hour_long_values_keep_minute_units() {
        // The catalog never exceeds ten minutes but the formatter should
        // not break down on long inputs
        assert_eq!(format_time(3600.0), "60:00");
    }
}
