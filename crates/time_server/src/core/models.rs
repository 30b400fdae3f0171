use chrono::{DateTime, TimeZone};
use chrono_tz::OffsetComponents;
use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::utils::{DATETIME_FORMAT, DAY_FORMAT};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Helper function to deserialize and trim optional strings
fn deserialize_trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()))
}

/// A wall-clock view of one instant in one timezone.
///
/// Immutable once built; `timezone` echoes the caller's identifier without
/// normalization and `datetime` carries no offset suffix.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TimeSnapshot {
    /// IANA timezone name as supplied by the caller
    pub timezone: String,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM:SS`
    pub datetime: String,
    /// Full English weekday name in the zone's local calendar
    pub day_of_week: String,
    /// Whether the zone is observing daylight saving time at this instant
    pub is_dst: bool,
}

impl TimeSnapshot {
    /// Render a timezone-aware datetime into a snapshot.
    ///
    /// All calendar fields derive from the single instant carried by `dt`.
    /// DST is read from the tz database rules for that instant rather than
    /// inferred by comparing against a reference date.
    pub fn from_datetime<Tz>(dt: &DateTime<Tz>, timezone_name: &str) -> TimeSnapshot
    where
        Tz: TimeZone,
        Tz::Offset: OffsetComponents,
    {
        let is_dst = dt.offset().dst_offset().num_seconds() != 0;

        TimeSnapshot {
            timezone: timezone_name.to_string(),
            datetime: dt.naive_local().format(DATETIME_FORMAT).to_string(),
            day_of_week: dt.naive_local().format(DAY_FORMAT).to_string(),
            is_dst,
        }
    }
}

/// One instant rendered in two zones, plus their offset delta.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ConversionResult {
    /// The given time expressed in the source zone
    pub source: TimeSnapshot,
    /// The same instant expressed in the target zone
    pub target: TimeSnapshot,
    /// Signed offset delta target minus source, e.g. `+9h` or `-5.75h`
    pub time_difference: String,
}

/// Request to get current time in a timezone
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCurrentTimeRequest {
    /// IANA timezone name (e.g., 'America/New_York', 'Europe/London').
    /// Defaults to the server's configured timezone when omitted.
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub timezone: Option<String>,
}

/// Request to convert time between timezones
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertTimeRequest {
    /// Source IANA timezone name. Defaults to the server's configured
    /// timezone when omitted.
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub source_timezone: Option<String>,
    /// Time to convert in 24-hour format (HH:MM)
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub time: String,
    /// Target IANA timezone name. Defaults to the server's configured
    /// timezone when omitted.
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    pub target_timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = TimeSnapshot {
            timezone: "UTC".to_string(),
            datetime: "2024-01-01T12:00:00".to_string(),
            day_of_week: "Monday".to_string(),
            is_dst: false,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"timezone\":\"UTC\""));
        assert!(json.contains("\"day_of_week\":\"Monday\""));
        assert!(json.contains("\"is_dst\":false"));
    }

    #[test]
    fn test_snapshot_from_datetime_has_no_offset_suffix() {
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        let dt = tz.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let snapshot = TimeSnapshot::from_datetime(&dt, "Asia/Tokyo");

        assert_eq!(snapshot.datetime, "2024-01-15T12:00:00");
        assert_eq!(snapshot.day_of_week, "Monday");
        assert!(!snapshot.is_dst);
    }

    #[test]
    fn test_snapshot_echoes_timezone_name() {
        let tz: Tz = "UTC".parse().unwrap();
        let dt = tz.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        // Etc/UTC would be the normalized form; the caller's spelling wins
        let snapshot = TimeSnapshot::from_datetime(&dt, "UTC");
        assert_eq!(snapshot.timezone, "UTC");
    }

    #[test]
    fn test_request_trimming() {
        let json = r#"{"timezone": "   Africa/Cairo   "}"#;
        let request: GetCurrentTimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.timezone.as_deref(), Some("Africa/Cairo"));

        let json = r#"{
            "source_timezone": "  America/New_York  ",
            "time": "  14:30  ",
            "target_timezone": "   Europe/London   "
        }"#;
        let request: ConvertTimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.source_timezone.as_deref(), Some("America/New_York"));
        assert_eq!(request.time, "14:30");
        assert_eq!(request.target_timezone.as_deref(), Some("Europe/London"));
    }

    #[test]
    fn test_omitted_timezones_deserialize_as_none() {
        let request: GetCurrentTimeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.timezone.is_none());

        let request: ConvertTimeRequest = serde_json::from_str(r#"{"time": "09:00"}"#).unwrap();
        assert!(request.source_timezone.is_none());
        assert!(request.target_timezone.is_none());
        assert_eq!(request.time, "09:00");
    }
}
