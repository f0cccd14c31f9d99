/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Month name for a "YYYY-MM-DD" date, as the backend expects in `month`
/// fields ("JANUARY" .. "DECEMBER"). Falls back to an empty string when the
/// input is not a parseable date.
pub fn month_name(date_str: &str) -> String {
    const MONTHS: [&str; 12] = [
        "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE", "JULY", "AUGUST", "SEPTEMBER",
        "OCTOBER", "NOVEMBER", "DECEMBER",
    ];
    let mut parts = date_str.split('-');
    let _year = parts.next();
    parts
        .next()
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m))
        .map(|m| MONTHS[m - 1].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name("2024-05-10"), "MAY");
        assert_eq!(month_name("2024-12-01"), "DECEMBER");
        assert_eq!(month_name("nonsense"), "");
    }
}
