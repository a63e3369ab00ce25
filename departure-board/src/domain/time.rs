//! Departure timestamps and their display format.
//!
//! MVG reports departure times as Unix seconds, but the field is loosely
//! typed: it may also be the literal `"Unknown"`, arbitrary text, or a
//! fractional number. [`DepartureTime`] keeps whatever was received so it
//! can be passed through untouched, and formats it for display without
//! ever failing.

use std::fmt;

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

/// Display format for departure times, e.g. `2023-11-14 23:13:20`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sentinel used when no departure time is known.
pub const UNKNOWN_TIME: &str = "Unknown";

/// A departure time as reported by the provider.
///
/// Serializes back to exactly the JSON value it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartureTime {
    /// Unix timestamp in seconds.
    Unix(i64),
    /// Integer too large for [`DepartureTime::Unix`]; kept exactly so it
    /// can be shown as received.
    Unsigned(u64),
    /// Fractional Unix timestamp in seconds.
    Fractional(f64),
    /// Any textual value, including the `"Unknown"` sentinel.
    Text(String),
}

impl DepartureTime {
    /// The `"Unknown"` sentinel.
    pub fn unknown() -> Self {
        DepartureTime::Text(UNKNOWN_TIME.to_string())
    }

    /// Whether this is the `"Unknown"` sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, DepartureTime::Text(s) if s == UNKNOWN_TIME)
    }

    /// Format in the given time zone.
    ///
    /// Timestamps chrono cannot represent, and text other than the sentinel,
    /// fall back to their string form.
    pub fn format_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            DepartureTime::Unix(secs) => {
                format_timestamp_in(*secs, tz).unwrap_or_else(|| secs.to_string())
            }
            DepartureTime::Unsigned(secs) => i64::try_from(*secs)
                .ok()
                .and_then(|secs| format_timestamp_in(secs, tz))
                .unwrap_or_else(|| secs.to_string()),
            DepartureTime::Fractional(secs) => {
                let whole = secs.floor();
                let in_range =
                    whole.is_finite() && whole >= i64::MIN as f64 && whole < i64::MAX as f64;
                in_range
                    .then(|| format_timestamp_in(whole as i64, tz))
                    .flatten()
                    .unwrap_or_else(|| secs.to_string())
            }
            DepartureTime::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartureTime::Unix(secs) => write!(f, "{secs}"),
            DepartureTime::Unsigned(secs) => write!(f, "{secs}"),
            DepartureTime::Fractional(secs) => write!(f, "{secs}"),
            DepartureTime::Text(text) => f.write_str(text),
        }
    }
}

/// Format a Unix timestamp with [`TIME_FORMAT`] in the given time zone.
///
/// Returns `None` if the timestamp is out of chrono's range.
pub fn format_timestamp_in<Tz>(secs: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    tz.timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(TIME_FORMAT).to_string())
}

/// Format an optional departure time for display in `tz`.
///
/// A missing time is displayed as `"Unknown"`.
pub fn format_departure_time_in<Tz>(time: Option<&DepartureTime>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match time {
        Some(time) => time.format_in(tz),
        None => UNKNOWN_TIME.to_string(),
    }
}
