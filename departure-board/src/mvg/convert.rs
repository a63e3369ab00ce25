//! Conversion from MVG DTOs to domain types.
//!
//! Departures are reshaped into the flat record the rest of the crate
//! passes around: times in seconds, `label` as `line`, and transport type
//! codes replaced by display names.

use serde_json::{Map, Value};

use crate::domain::{DepartureTime, RawDeparture, StationInfo};

use super::types::{DepartureDto, LocationDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Pick the first station out of a `/locations` search response.
pub fn first_station(locations: &[LocationDto]) -> Option<&LocationDto> {
    locations.iter().find(|l| l.is_station())
}

/// Convert a station location.
pub fn convert_location(location: &LocationDto) -> Result<StationInfo, ConversionError> {
    let id = location
        .global_id
        .clone()
        .ok_or(ConversionError::MissingField("globalId"))?;

    Ok(StationInfo {
        id,
        name: location.name.clone().unwrap_or_default(),
        place: location.place.clone().unwrap_or_default(),
    })
}

/// Convert a departure.
///
/// Never fails: every field of the result is optional.
pub fn convert_departure(dto: &DepartureDto) -> RawDeparture {
    let mut extra = Map::new();

    if let Some(planned) = dto.planned_departure_time {
        extra.insert("planned".to_string(), Value::from(planned / 1000));
    }
    if let Some(realtime) = dto.realtime {
        extra.insert("realtime".to_string(), Value::from(realtime));
    }
    if let Some(code) = dto.transport_type.as_deref()
        && let Some(icon) = transport_icon(code)
    {
        extra.insert("icon".to_string(), Value::from(icon));
    }
    if let Some(messages) = &dto.messages {
        extra.insert("messages".to_string(), Value::from(messages.clone()));
    }

    let time = dto
        .realtime_departure_time
        .or(dto.planned_departure_time)
        .map(|ms| DepartureTime::Unix(ms / 1000));

    let platform = dto.platform.as_ref().and_then(|p| match p {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    });

    RawDeparture {
        line: dto.label.clone(),
        transport_type: dto
            .transport_type
            .as_deref()
            .map(|code| transport_name(code).to_string()),
        destination: dto.destination.clone(),
        time,
        delay: Some(dto.delay_in_minutes.unwrap_or(0)),
        platform,
        cancelled: Some(dto.cancelled.unwrap_or(false)),
        extra,
    }
}

/// Display name for an MVG transport type code.
///
/// Unknown codes are returned unchanged.
pub fn transport_name(code: &str) -> &str {
    match code {
        "BAHN" => "Bahn",
        "SBAHN" => "S-Bahn",
        "UBAHN" => "U-Bahn",
        "TRAM" => "Tram",
        "BUS" => "Bus",
        "REGIONAL_BUS" => "Regionalbus",
        "SEV" => "SEV",
        "SCHIFF" => "Schiff",
        other => other,
    }
}

/// Material Design icon name for an MVG transport type code.
fn transport_icon(code: &str) -> Option<&'static str> {
    match code {
        "BAHN" => Some("mdi-train"),
        "SBAHN" => Some("mdi-subway-variant"),
        "UBAHN" => Some("mdi-subway"),
        "TRAM" => Some("mdi-tram"),
        "BUS" | "REGIONAL_BUS" => Some("mdi-bus"),
        "SEV" => Some("mdi-taxi"),
        "SCHIFF" => Some("mdi-ferry"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departure_json() -> &'static str {
        r#"{
            "plannedDepartureTime": 1699999880000,
            "realtime": true,
            "delayInMinutes": 2,
            "realtimeDepartureTime": 1700000000000,
            "transportType": "BUS",
            "label": "180",
            "divaId": "19180",
            "network": "swm",
            "trainType": "",
            "destination": "Berduxstraße",
            "cancelled": false,
            "sev": false,
            "platform": 2,
            "messages": [],
            "bannerHash": "",
            "occupancy": "LOW",
            "stopPointGlobalId": "de:09162:350:3:3"
        }"#
    }

    #[test]
    fn converts_departure() {
        let dto: DepartureDto = serde_json::from_str(departure_json()).unwrap();
        let raw = convert_departure(&dto);

        assert_eq!(raw.line.as_deref(), Some("180"));
        assert_eq!(raw.transport_type.as_deref(), Some("Bus"));
        assert_eq!(raw.destination.as_deref(), Some("Berduxstraße"));
        assert_eq!(raw.time, Some(DepartureTime::Unix(1_700_000_000)));
        assert_eq!(raw.delay, Some(2));
        assert_eq!(raw.platform.as_deref(), Some("2"));
        assert_eq!(raw.cancelled, Some(false));
        assert_eq!(raw.extra.get("planned"), Some(&Value::from(1_699_999_880_i64)));
        assert_eq!(raw.extra.get("icon"), Some(&Value::from("mdi-bus")));
        assert_eq!(raw.extra.get("realtime"), Some(&Value::from(true)));
    }

    #[test]
    fn falls_back_to_planned_time() {
        let dto: DepartureDto =
            serde_json::from_str(r#"{"plannedDepartureTime": 1700000000000, "label": "180"}"#)
                .unwrap();
        let raw = convert_departure(&dto);

        assert_eq!(raw.time, Some(DepartureTime::Unix(1_700_000_000)));
        assert_eq!(raw.delay, Some(0));
        assert_eq!(raw.cancelled, Some(false));
        assert_eq!(raw.platform, None);
        assert_eq!(raw.transport_type, None);
    }

    #[test]
    fn missing_times_stay_missing() {
        let dto: DepartureDto = serde_json::from_str(r#"{"label": "180"}"#).unwrap();
        assert_eq!(convert_departure(&dto).time, None);
    }

    #[test]
    fn transport_names() {
        assert_eq!(transport_name("UBAHN"), "U-Bahn");
        assert_eq!(transport_name("REGIONAL_BUS"), "Regionalbus");
        assert_eq!(transport_name("HOVERCRAFT"), "HOVERCRAFT");
    }

    #[test]
    fn picks_first_station() {
        let locations: Vec<LocationDto> = serde_json::from_str(
            r#"[
                {"type": "POI", "name": "Olympiastadion", "place": "München"},
                {"type": "STATION", "globalId": "de:09162:350", "name": "Olympiazentrum", "place": "München"},
                {"type": "STATION", "globalId": "de:09162:360", "name": "Olympiapark West", "place": "München"}
            ]"#,
        )
        .unwrap();

        let station = first_station(&locations).unwrap();
        let info = convert_location(station).unwrap();
        assert_eq!(info, StationInfo::new("de:09162:350", "Olympiazentrum", "München"));
    }

    #[test]
    fn station_without_id_is_rejected() {
        let location: LocationDto =
            serde_json::from_str(r#"{"type": "STATION", "name": "Nowhere"}"#).unwrap();
        assert!(matches!(
            convert_location(&location),
            Err(ConversionError::MissingField("globalId"))
        ));
    }

    #[test]
    fn no_station_in_results() {
        let locations: Vec<LocationDto> =
            serde_json::from_str(r#"[{"type": "ADDRESS", "name": "Somewhere 1"}]"#).unwrap();
        assert!(first_station(&locations).is_none());
    }
}
