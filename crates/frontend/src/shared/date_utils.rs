/// Utilities for date and time formatting
///
/// Fixture timestamps are ISO 8601 strings; these helpers turn them into
/// display form without parsing into chrono types first.

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-12-14T10:15:00Z" -> "14.12.2024 10:15"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.trim_end_matches('Z');
                let time = time.split('.').next().unwrap_or(time);
                let hhmm = time.rsplit_once(':').map(|(hm, _)| hm).unwrap_or(time);
                return format!("{}.{}.{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15.03.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-12-14T10:15:00Z"), "14.12.2024 10:15");
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2024-12-14T10:15:00Z"), "14.12.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
