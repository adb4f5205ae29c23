//! Time formatting for the transport display

/// Format a position or duration in seconds as `minutes:seconds`
///
/// Seconds are zero-padded to two digits, minutes are not. Fractional
/// seconds are truncated, so 59.9 renders as `0:59`. Non-finite or
/// negative inputs render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(9.0), "0:09");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(60.999), "1:00");
    }

    #[test]
    fn minutes_unpadded() {
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn garbage_renders_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
