use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{FolioError, FolioResult};

pub fn date_from_str(s: &str) -> FolioResult<NaiveDate> {
    const FORMATS: &[&str] = &[
        "%Y%m%d",
        "%Y-%m-%d",
        "%Y%m%dT%H%M%S",        // ISO 8601 Basic
        "%Y-%m-%dT%H:%M:%S%.f", // ISO 8601 Extended
    ];

    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        // RFC 3339
        return Ok(datetime.date_naive());
    }

    Err(FolioError::Invalid {
        code: "INVALID_DATE",
        message: format!("Unable to parse date '{s}'"),
    })
}

pub fn datetime_from_str(s: &str) -> FolioResult<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y%m%dT%H%M%S",
    ];

    for format in FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.naive_local());
    }

    if let Ok(date) = date_from_str(s) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(FolioError::Invalid {
        code: "INVALID_DATETIME",
        message: format!("Unable to parse datetime '{s}'"),
    })
}

pub fn date_to_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an ISO date string for display, e.g. "Mar 5, 2025".
/// Unparseable input is shown verbatim.
pub fn display_date(s: &str) -> String {
    match date_from_str(s) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => s.to_string(),
    }
}

pub fn display_datetime(s: &str) -> String {
    match datetime_from_str(s) {
        Ok(datetime) => datetime.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_str() {
        assert_eq!(
            date_to_str(&date_from_str("20231231").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("20231231T235959").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59Z").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59+08:00").unwrap()),
            "2023-12-31"
        );
        assert_eq!(
            date_to_str(&date_from_str("2023-12-31T23:59:59.123456").unwrap()),
            "2023-12-31"
        );
        assert!(date_from_str("invalid-date").is_err());
    }

    #[test]
    fn test_datetime_from_str() {
        assert_eq!(
            datetime_from_str("2025-03-05T14:30:00")
                .unwrap()
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            "2025-03-05 14:30"
        );
        assert_eq!(
            datetime_from_str("2025-03-05T14:30:00.250Z")
                .unwrap()
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            "2025-03-05 14:30"
        );
        assert_eq!(
            datetime_from_str("2025-03-05")
                .unwrap()
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            "2025-03-05 00:00"
        );
        assert!(datetime_from_str("later").is_err());
    }

    #[test]
    fn test_date_to_str() {
        assert_eq!(
            date_to_str(&NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
            "2023-01-01"
        );
        assert_eq!(
            date_to_str(&NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
            "2023-12-31"
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-03-05"), "Mar 5, 2025");
        assert_eq!(display_date("2025-12-31"), "Dec 31, 2025");
        assert_eq!(display_date("TBA"), "TBA");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_display_datetime() {
        assert_eq!(
            display_datetime("2025-03-05T09:05:00Z"),
            "Mar 5, 2025 09:05"
        );
        assert_eq!(display_datetime("unknown"), "unknown");
    }
}
