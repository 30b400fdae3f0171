// Format strings shared by the core

/// Local wall-clock rendering: no offset suffix, the zone is carried
/// separately in the snapshot.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const TIME_INPUT_FORMAT: &str = "%H:%M";
pub const DAY_FORMAT: &str = "%A";

/// Format a signed offset delta (in minutes) as hours: `+9h`, `-5h`, or a
/// decimal with trailing zeros trimmed for fractional-hour zones (`+5.75h`).
pub fn format_offset_difference(minutes: i64) -> String {
    if minutes % 60 == 0 {
        format!("{:+}h", minutes / 60)
    } else {
        let hours = minutes as f64 / 60.0;
        let formatted = format!("{hours:+.2}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed}h")
    }
}

#[cfg(test)]
mod tests {
    use super::format_offset_difference;

    #[test]
    fn test_whole_hour_differences() {
        assert_eq!(format_offset_difference(540), "+9h");
        assert_eq!(format_offset_difference(-300), "-5h");
        assert_eq!(format_offset_difference(0), "+0h");
    }

    #[test]
    fn test_fractional_hour_differences() {
        // India (UTC+5:30) relative to UTC
        assert_eq!(format_offset_difference(330), "+5.5h");
        // Nepal (UTC+5:45) relative to UTC, both directions
        assert_eq!(format_offset_difference(345), "+5.75h");
        assert_eq!(format_offset_difference(-345), "-5.75h");
        // Chatham Islands relative to a whole-hour zone
        assert_eq!(format_offset_difference(45), "+0.75h");
    }
}
