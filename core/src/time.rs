//! Time related utils.

use chrono::Utc;

/// The date/time type used across the signing code, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into the date stamp used in credential scopes: `20220313`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a time into the compact ISO 8601 form used in request timestamps:
/// `20220313T072004Z`.
///
/// Punctuation and the sub-second fraction are stripped; the first 8
/// characters equal [`format_date`] of the same instant.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime {
        Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(sample()), "20220313");
    }

    #[test]
    fn test_format_iso8601() {
        assert_eq!(format_iso8601(sample()), "20220313T072004Z");
    }

    #[test]
    fn test_date_is_prefix_of_iso8601() {
        let t = sample();
        assert_eq!(format_iso8601(t)[..8], format_date(t));
    }
}
