// Parameterised tests for the labels shown in the schedule setup panel

use fuzzy_planner::models::schedule::{start_minute_or_default, BlockSize, Day};
use fuzzy_planner::utils::time::format_minute_label;
use test_case::test_case;

#[test_case("30 minutes", BlockSize::ThirtyMinutes ; "thirty minutes")]
#[test_case("1 hour", BlockSize::OneHour ; "one hour")]
#[test_case("2 hours", BlockSize::TwoHours ; "two hours")]
#[test_case("90 minutes", BlockSize::OneHour ; "unknown falls back")]
#[test_case("", BlockSize::OneHour ; "empty falls back")]
fn test_block_size_labels(label: &str, expected: BlockSize) {
    assert_eq!(BlockSize::parse_or_default(label), expected);
}

#[test_case(0, "12:00 AM")]
#[test_case(59, "12:59 AM")]
#[test_case(480, "8:00 AM")]
#[test_case(720, "12:00 PM")]
#[test_case(1410, "11:30 PM")]
fn test_minute_labels(minute: u32, expected: &str) {
    assert_eq!(format_minute_label(minute), expected);
}

#[test_case(Some("6:00 AM"), 360 ; "configured")]
#[test_case(Some("06:00 AM"), 360 ; "zero padded")]
#[test_case(Some("breakfast"), 480 ; "invalid")]
#[test_case(None, 480 ; "missing")]
fn test_start_minute(label: Option<&str>, expected: u32) {
    assert_eq!(start_minute_or_default(label), expected);
}

#[test_case(Day::Mon, false)]
#[test_case(Day::Fri, false)]
#[test_case(Day::Sat, true)]
#[test_case(Day::Sun, true)]
fn test_weekend_days(day: Day, expected: bool) {
    assert_eq!(day.is_weekend(), expected);
}
