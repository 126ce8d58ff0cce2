//! Source of "now" for time-derived record status.
//!
//! # Invariants
//! - Timestamps handed to SQL use [`format_timestamp`], the same layout the
//!   catalogs store, so lexical comparison in SQLite matches time order.

use chrono::{DateTime, SecondsFormat, Utc};

/// Provides the instant a query is evaluated against.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats an instant as stored catalog text, e.g. `2026-10-19T12:00:00Z`.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses stored catalog text back into a UTC instant.
///
/// Any RFC 3339 offset is accepted and normalised to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp, Clock, FixedClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_timestamp_uses_second_precision_and_z_suffix() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap();
        assert_eq!(format_timestamp(instant), "2026-10-19T08:30:05Z");
    }

    #[test]
    fn parse_timestamp_normalises_offsets_to_utc() {
        let parsed = parse_timestamp("2026-10-19T10:30:05+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap());
    }

    #[test]
    fn parse_timestamp_rejects_non_rfc3339_text() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
