//! MVG API response DTOs.
//!
//! These map directly to the `bgw-pt/v3` JSON responses. Nearly every
//! field is optional because MVG omits keys freely.

use serde::Deserialize;
use serde_json::Value;

/// Location type for stations in `/locations` responses.
pub const STATION_LOCATION_TYPE: &str = "STATION";

/// An entry in the `/locations` search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    /// `STATION`, `ADDRESS`, `POI`, ...
    #[serde(rename = "type")]
    pub location_type: String,

    /// Global station identifier, e.g. `de:09162:350`. Only set for stations.
    pub global_id: Option<String>,

    pub name: Option<String>,

    /// Locality, e.g. `München`.
    pub place: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

impl LocationDto {
    /// Whether this location is a station.
    pub fn is_station(&self) -> bool {
        self.location_type == STATION_LOCATION_TYPE
    }
}

/// An entry in the `/departures` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureDto {
    /// Timetabled departure, milliseconds since the epoch.
    pub planned_departure_time: Option<i64>,

    /// Whether real-time data is available for this departure.
    pub realtime: Option<bool>,

    pub delay_in_minutes: Option<i64>,

    /// Expected departure, milliseconds since the epoch.
    pub realtime_departure_time: Option<i64>,

    /// `BUS`, `UBAHN`, `TRAM`, ...
    pub transport_type: Option<String>,

    /// Line label, e.g. `180`.
    pub label: Option<String>,

    pub destination: Option<String>,

    pub cancelled: Option<bool>,

    /// Usually a number, occasionally text.
    pub platform: Option<Value>,

    /// Service messages attached to this departure.
    pub messages: Option<Vec<Value>>,
}
