//! In-movie offset formatting and parsing.
//!
//! Offsets are durations measured from the start of the movie and travel
//! as `HH:MM:SS.mmm` strings in transfer records.

use std::time::Duration;

use crate::error::{ModelError, ModelResult};

/// Format an offset as `HH:MM:SS.mmm`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use phraseclip_models::format_offset;
/// assert_eq!(format_offset(Duration::from_secs(5)), "00:00:05.000");
/// assert_eq!(format_offset(Duration::from_millis(500)), "00:00:00.500");
/// ```
pub fn format_offset(offset: Duration) -> String {
    let total_secs = offset.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = offset.subsec_millis();

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Parse an `HH:MM:SS.mmm` offset string (milliseconds optional).
pub fn parse_offset(value: &str) -> ModelResult<Duration> {
    let invalid = || ModelError::InvalidOffset(value.to_string());

    let mut parts = value.split(':');
    let (hours, minutes, rest) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(invalid()),
    };

    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;

    let (seconds, millis) = match rest.split_once('.') {
        Some((s, ms)) => {
            if ms.len() != 3 {
                return Err(invalid());
            }
            (
                s.parse::<u64>().map_err(|_| invalid())?,
                ms.parse::<u64>().map_err(|_| invalid())?,
            )
        }
        None => (rest.parse::<u64>().map_err(|_| invalid())?, 0),
    };

    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    let total_millis = ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis;
    Ok(Duration::from_millis(total_millis))
}

/// Serde adapter serializing a `Duration` offset as `HH:MM:SS.mmm`.
pub mod offset_string {
    use std::time::Duration;

    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(offset: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_offset(*offset))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_offset(&raw).map_err(D::Error::custom)
    }
}
