//! Elapsed time between two instants.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used by [`delta_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaMode {
    #[default]
    Milliseconds,
    Seconds,
}

impl DeltaMode {
    /// Parses a mode name. Only `"seconds"` selects seconds; anything else,
    /// including unknown names, falls back to milliseconds.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "seconds" => DeltaMode::Seconds,
            _ => DeltaMode::Milliseconds,
        }
    }
}

impl From<&str> for DeltaMode {
    fn from(mode: &str) -> Self {
        Self::parse(mode)
    }
}

impl fmt::Display for DeltaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaMode::Milliseconds => write!(f, "milliseconds"),
            DeltaMode::Seconds => write!(f, "seconds"),
        }
    }
}

/// Returns `end - start` in the requested unit. Negative if `end` is earlier.
pub fn delta_time<Tz1, Tz2>(start: &DateTime<Tz1>, end: &DateTime<Tz2>, mode: DeltaMode) -> f64
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let millis = end.timestamp_millis() - start.timestamp_millis();
    tracing::debug!(delta_ms = millis, %mode, "computed delta time");

    match mode {
        DeltaMode::Seconds => millis as f64 / 1000.0,
        DeltaMode::Milliseconds => millis as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    #[test]
    fn test_mode_parsing() {
        assert_eq!(DeltaMode::parse("seconds"), DeltaMode::Seconds);
        assert_eq!(DeltaMode::parse("milliseconds"), DeltaMode::Milliseconds);
        assert_eq!(DeltaMode::parse("miliseconds"), DeltaMode::Milliseconds);
        assert_eq!(DeltaMode::from("hours"), DeltaMode::Milliseconds);
        assert_eq!(DeltaMode::parse("Seconds"), DeltaMode::Milliseconds);
    }

    #[test]
    fn test_delta_in_both_units() {
        let start = Utc::now();
        let end = start + Duration::milliseconds(2_500);

        assert_eq!(delta_time(&start, &end, DeltaMode::Milliseconds), 2_500.0);
        assert_eq!(delta_time(&start, &end, DeltaMode::Seconds), 2.5);
    }

    #[test]
    fn test_seconds_are_milliseconds_over_thousand() {
        let start = Utc::now();
        for offset in [0, 1, 999, 1_000, 61_234, 86_400_000] {
            let end = start + Duration::milliseconds(offset);
            let ms = delta_time(&start, &end, DeltaMode::Milliseconds);
            let secs = delta_time(&start, &end, DeltaMode::Seconds);
            assert_eq!(secs, ms / 1000.0);
        }
    }

    #[test]
    fn test_negative_delta() {
        let start = Utc::now();
        let end = start - Duration::seconds(3);
        assert_eq!(delta_time(&start, &end, DeltaMode::Seconds), -3.0);
    }

    #[test]
    fn test_delta_across_time_zones() {
        let start = Utc::now();
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let end = (start + Duration::seconds(10)).with_timezone(&offset);
        assert_eq!(delta_time(&start, &end, DeltaMode::Seconds), 10.0);
    }

    #[test]
    fn test_mode_display_and_serde() {
        assert_eq!(DeltaMode::Seconds.to_string(), "seconds");
        assert_eq!(
            serde_json::to_string(&DeltaMode::Milliseconds).unwrap(),
            "\"milliseconds\""
        );
    }
}
