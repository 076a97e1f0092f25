//! Date and timezone conversion for expiration fields and API timestamps.
//!
//! The expiration picker works in the user's local time (`YYYY-MM-DDTHH:MM`),
//! the API speaks UTC. These helpers convert between the two and parse the
//! timestamps the API sends back, which may or may not carry an offset.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use serde::{Deserialize, Deserializer, Serializer};

/// Format produced for the expiration picker.
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used when listing timestamps in tables.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Errors raised while converting user-facing dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("unrecognised date/time '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidFormat(String),

    #[error("'{0}' does not exist in the local timezone")]
    NonexistentLocalTime(String),

    #[error("invalid API timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Parses picker input in `tz` and converts it to UTC.
///
/// A bare date (`YYYY-MM-DD`) means the end of that day. When a DST change
/// makes the local time ambiguous the earlier instant wins; a time skipped
/// by DST is rejected.
///
/// # Errors
///
/// Returns [`DateTimeError::InvalidFormat`] when no known format matches and
/// [`DateTimeError::NonexistentLocalTime`] for skipped local times.
pub fn local_input_to_utc<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Utc>, DateTimeError> {
    let input = input.trim();
    let naive = parse_naive_input(input)
        .ok_or_else(|| DateTimeError::InvalidFormat(input.to_string()))?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(DateTimeError::NonexistentLocalTime(input.to_string())),
    }
}

fn parse_naive_input(input: &str) -> Option<NaiveDateTime> {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(23, 59, 0))
        })
}

/// Renders a UTC instant as picker input in `tz`.
pub fn utc_to_local_input<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(LOCAL_INPUT_FORMAT).to_string()
}

/// Renders a UTC instant as the ISO string sent to the API.
pub fn to_utc_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Renders a UTC instant for tables and cards in `tz`.
pub fn format_display<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Parses a timestamp returned by the API.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00Z`, `...+02:00`) and naive ISO
/// values (`2024-05-01T12:00:00.123456`), which the API emits in UTC.
///
/// # Errors
///
/// Returns [`DateTimeError::InvalidTimestamp`] for anything else.
pub fn parse_api_timestamp(value: &str) -> Result<DateTime<Utc>, DateTimeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| DateTimeError::InvalidTimestamp(value.to_string()))
}

/// Serde adapter for required API timestamps.
pub fn deserialize_api_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_api_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional API timestamps (`null` or absent → `None`).
pub fn deserialize_optional_api_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_api_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// Serde adapter writing optional timestamps with [`to_utc_iso`]; `None` is `null`.
pub fn serialize_optional_api_timestamp<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) => serializer.serialize_some(&to_utc_iso(*instant)),
        None => serializer.serialize_none(),
    }
}
