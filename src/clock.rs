//! Clock Formatting
//!
//! en-US style date and time stamp, e.g. `Nov 13, 2025 | 10:30 PM`.

use chrono::{Local, NaiveDateTime};

/// Format a local date-time for the clock display
pub fn format_stamp(now: &NaiveDateTime) -> String {
    now.format("%b %-d, %Y | %-I:%M %p").to_string()
}

/// Stamp for the current local time
pub fn now_stamp() -> String {
    format_stamp(&Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_evening() {
        assert_eq!(format_stamp(&at(2025, 11, 13, 22, 30)), "Nov 13, 2025 | 10:30 PM");
    }

    #[test]
    fn test_morning_unpadded() {
        assert_eq!(format_stamp(&at(2024, 3, 5, 9, 7)), "Mar 5, 2024 | 9:07 AM");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_stamp(&at(2026, 1, 1, 0, 0)), "Jan 1, 2026 | 12:00 AM");
        assert_eq!(format_stamp(&at(2026, 7, 31, 12, 45)), "Jul 31, 2026 | 12:45 PM");
    }
}
