//! Timestamps as they appear in ADDS responses.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Format of every time in an ADDS response, always UTC.
pub const ADDS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse an ADDS timestamp, e.g. `2017-04-01T18:53:00Z`.
pub fn parse_adds_time(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), ADDS_TIME_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Used with `#[serde(deserialize_with)]`; a bad time fails the whole record.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_adds_time(&text).map_err(|err| {
        serde::de::Error::custom(format!("invalid time '{}': {}", text, err))
    })
}
