//! Departure records: the provider's raw shape and the display projection.

use std::fmt;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::time::{DepartureTime, format_departure_time_in};

/// Placeholder for missing textual fields in the display projection.
const UNKNOWN: &str = "Unknown";

/// A departure exactly as the provider reported it.
///
/// Every field the pipeline reads is optional; defaults are applied only
/// when projecting into a [`DisplayDeparture`]. Keys the pipeline does not
/// interpret are kept in `extra`, and absent keys stay absent when
/// serialized, so a `RawDeparture` round-trips to the provider's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDeparture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DepartureTime>,

    /// Delay in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,

    /// MVG sends platforms as numbers; they are kept as text.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,

    /// Provider keys with no meaning to the pipeline (`planned`, `icon`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawDeparture {
    /// Create a departure with just a line and destination.
    pub fn new(line: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            line: Some(line.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, transport_type: impl Into<String>) -> Self {
        self.transport_type = Some(transport_type.into());
        self
    }

    /// Set the departure time to a Unix timestamp in seconds.
    pub fn with_time(mut self, secs: i64) -> Self {
        self.time = Some(DepartureTime::Unix(secs));
        self
    }

    pub fn with_departure_time(mut self, time: DepartureTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_delay(mut self, delay: i64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = Some(cancelled);
        self
    }

    /// The destination, or `""` if absent.
    pub fn destination_str(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }

    /// Project into the display shape, formatting times in local time.
    pub fn to_display(&self) -> DisplayDeparture {
        self.to_display_in(&Local)
    }

    /// Project into the display shape, formatting times in `tz`.
    pub fn to_display_in<Tz>(&self, tz: &Tz) -> DisplayDeparture
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        DisplayDeparture {
            line: self.line.clone().unwrap_or_default(),
            transport_type: self
                .transport_type
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            destination: self
                .destination
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            formatted_time: format_departure_time_in(self.time.as_ref(), tz),
            raw_time: self.time.clone(),
            delay: self.delay.unwrap_or(0),
            platform: self.platform.clone(),
            cancelled: self.cancelled.unwrap_or(false),
        }
    }
}

/// Accept a string, a number, or null, keeping non-null values as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A departure ready for display.
///
/// JSON field names follow the public API: the formatted time is `time`
/// and the provider's value is `time_raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDeparture {
    pub line: String,

    #[serde(rename = "type")]
    pub transport_type: String,

    pub destination: String,

    /// `YYYY-MM-DD HH:MM:SS` in local time, or `"Unknown"`.
    #[serde(rename = "time")]
    pub formatted_time: String,

    #[serde(rename = "time_raw")]
    pub raw_time: Option<DepartureTime>,

    /// Delay in minutes.
    pub delay: i64,

    pub platform: Option<String>,

    pub cancelled: bool,
}

impl DisplayDeparture {
    /// How late this departure is running.
    pub fn delay_severity(&self) -> DelaySeverity {
        DelaySeverity::from_minutes(self.delay)
    }

    /// Badge text: "On Time" or "+N min".
    pub fn delay_label(&self) -> String {
        match self.delay_severity() {
            DelaySeverity::OnTime => "On Time".to_string(),
            _ => format!("+{} min", self.delay),
        }
    }
}

/// Delay bucket used for the delay badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelaySeverity {
    /// No delay. Early departures count as on time.
    OnTime,
    /// Up to three minutes late.
    Minor,
    /// More than three minutes late.
    Major,
}

impl DelaySeverity {
    /// Upper bound (inclusive) for a minor delay, in minutes.
    pub const MINOR_MAX_MINS: i64 = 3;

    /// Classify a delay in minutes.
    pub fn from_minutes(delay: i64) -> Self {
        if delay <= 0 {
            DelaySeverity::OnTime
        } else if delay <= Self::MINOR_MAX_MINS {
            DelaySeverity::Minor
        } else {
            DelaySeverity::Major
        }
    }

    /// CSS class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            DelaySeverity::OnTime => "delay-none",
            DelaySeverity::Minor => "delay-warning",
            DelaySeverity::Major => "delay-danger",
        }
    }
}
