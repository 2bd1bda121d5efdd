// Clock label helpers for the week grid.
// Labels are 12-hour clock times with an AM/PM suffix, e.g. "8:00 AM".

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format a minute-of-day as a 12-hour label ("12:30 AM", "7:00 PM").
///
/// Values past midnight wrap around.
pub fn format_minute_label(minute_of_day: u32) -> String {
    let minute = minute_of_day % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| "12:00 AM".to_string())
}

/// Parse a 12-hour label back into a minute-of-day.
pub fn parse_minute_label(label: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(label.trim(), "%I:%M %p").ok()?;
    Some(time.hour() * 60 + time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_morning_and_evening() {
        assert_eq!(format_minute_label(8 * 60), "8:00 AM");
        assert_eq!(format_minute_label(19 * 60 + 30), "7:30 PM");
    }

    #[test]
    fn test_format_midnight_and_noon() {
        assert_eq!(format_minute_label(0), "12:00 AM");
        assert_eq!(format_minute_label(12 * 60), "12:00 PM");
    }

    #[test]
    fn test_format_wraps_past_midnight() {
        assert_eq!(format_minute_label(MINUTES_PER_DAY + 60), "1:00 AM");
    }

    #[test]
    fn test_parse_round_trips_labels() {
        assert_eq!(parse_minute_label("8:00 AM"), Some(480));
        assert_eq!(parse_minute_label("12:00 AM"), Some(0));
        assert_eq!(parse_minute_label("12:30 PM"), Some(750));
        assert_eq!(parse_minute_label("11:00 PM"), Some(23 * 60));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_minute_label(""), None);
        assert_eq!(parse_minute_label("noon"), None);
        assert_eq!(parse_minute_label("25:00 AM"), None);
    }
}
