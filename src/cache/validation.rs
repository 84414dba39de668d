//! Cache interval parsing and formatting.

use chrono::Duration;

use crate::error::{GitattrError, Result};

/// Parse an expiration interval string like "7d", "24h", "30m", "3600s".
///
/// A bare number is taken as seconds. Negative and out-of-range
/// magnitudes are rejected.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();

    let (number, unit): (&str, fn(i64) -> Option<Duration>) =
        if let Some(days) = ttl.strip_suffix('d') {
            (days, Duration::try_days)
        } else if let Some(hours) = ttl.strip_suffix('h') {
            (hours, Duration::try_hours)
        } else if let Some(mins) = ttl.strip_suffix('m') {
            (mins, Duration::try_minutes)
        } else if let Some(secs) = ttl.strip_suffix('s') {
            (secs, Duration::try_seconds)
        } else {
            // Assume seconds if no suffix
            (ttl.as_str(), Duration::try_seconds)
        };

    let n: i64 = number.parse().map_err(|_| GitattrError::InvalidDuration {
        value: ttl.clone(),
        message: "expected a number with an optional d/h/m/s suffix".into(),
    })?;

    if n < 0 {
        return Err(GitattrError::InvalidDuration {
            value: ttl.clone(),
            message: "interval cannot be negative".into(),
        });
    }

    unit(n).ok_or_else(|| GitattrError::InvalidDuration {
        value: ttl.clone(),
        message: "interval out of range".into(),
    })
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ttl_days() {
        let duration = parse_ttl("7d").unwrap();
        assert_eq!(duration.num_days(), 7);
    }

    #[test]
    fn parse_ttl_hours() {
        let duration = parse_ttl("24h").unwrap();
        assert_eq!(duration.num_hours(), 24);
    }

    #[test]
    fn parse_ttl_minutes() {
        let duration = parse_ttl("30m").unwrap();
        assert_eq!(duration.num_minutes(), 30);
    }

    #[test]
    fn parse_ttl_seconds() {
        let duration = parse_ttl("3600s").unwrap();
        assert_eq!(duration.num_seconds(), 3600);
    }

    #[test]
    fn parse_ttl_no_suffix() {
        let duration = parse_ttl("86400").unwrap();
        assert_eq!(duration.num_seconds(), 86400);
    }

    #[test]
    fn parse_ttl_trims_and_lowercases() {
        let duration = parse_ttl(" 12H ").unwrap();
        assert_eq!(duration.num_hours(), 12);
    }

    #[test]
    fn parse_ttl_zero_is_allowed() {
        let duration = parse_ttl("0").unwrap();
        assert_eq!(duration.num_seconds(), 0);
    }

    #[test]
    fn parse_ttl_rejects_garbage() {
        let err = parse_ttl("soon").unwrap_err();
        assert!(matches!(err, GitattrError::InvalidDuration { .. }));
    }

    #[test]
    fn parse_ttl_rejects_negative() {
        let err = parse_ttl("-5m").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn parse_ttl_rejects_out_of_range_seconds() {
        let err = parse_ttl("9223372036854775807").unwrap_err();
        assert!(matches!(err, GitattrError::InvalidDuration { .. }));
    }

    #[test]
    fn parse_ttl_rejects_out_of_range_days() {
        let err = parse_ttl("200000000000d").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn format_duration_days() {
        assert_eq!(format_duration(Duration::days(7)), "7d");
    }

    #[test]
    fn format_duration_hours() {
        assert_eq!(format_duration(Duration::hours(12)), "12h");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::minutes(30)), "30m");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::seconds(45)), "45s");
    }
}
