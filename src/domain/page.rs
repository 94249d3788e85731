use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::configuration::LastmodPrecision;

/// One eligible HTML file resolved to its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// POSIX-style path relative to the site root; unique per run.
    pub relative_path: String,
    /// Absolute canonical URL.
    pub url: String,
    pub last_modified: DateTime<Utc>,
}

/// Render a timestamp for `<lastmod>` in the configured precision.
pub fn format_lastmod(timestamp: DateTime<Utc>, precision: LastmodPrecision) -> String {
    match precision {
        LastmodPrecision::Date => timestamp.format("%Y-%m-%d").to_string(),
        LastmodPrecision::Timestamp => timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_precision_truncates_to_utc_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(format_lastmod(ts, LastmodPrecision::Date), "2024-03-09");
    }

    #[test]
    fn timestamp_precision_carries_explicit_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 0).unwrap();
        assert_eq!(format_lastmod(ts, LastmodPrecision::Timestamp), "2024-03-09T08:05:00+00:00");
    }
}
