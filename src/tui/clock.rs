use chrono::{DateTime, Local};

/// Formats the header clock: en-GB short date plus 24-hour time.
pub fn format_header_clock(now: &DateTime<Local>) -> String {
    now.format("%d/%m/%Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_clock_uses_day_first_ordering() {
        let time = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_header_clock(&time), "07/03/2026, 09:05");
    }

    #[test]
    fn test_clock_is_24_hour() {
        let time = Local.with_ymd_and_hms(2026, 11, 20, 17, 45, 0).unwrap();
        assert_eq!(format_header_clock(&time), "20/11/2026, 17:45");
    }
}
