//! Result envelopes returned to the presentation adapters.
//!
//! An envelope is either a board or an error, never both. Serialized, the
//! two are told apart only by the presence of an `error` key.

use serde::Serialize;

use crate::domain::{DisplayDeparture, RawDeparture};

/// Success or failure of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(T),
    Failure(ErrorEnvelope),
}

impl<T> Envelope<T> {
    /// Whether this is an error envelope.
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Failure(_))
    }

    /// The user-facing error message, if this is an error envelope.
    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(failure) => Some(&failure.error),
        }
    }

    /// The board, if this is a success envelope.
    pub fn success(&self) -> Option<&T> {
        match self {
            Envelope::Success(board) => Some(board),
            Envelope::Failure(_) => None,
        }
    }
}

/// Error envelope: `{error, station_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub station_name: String,
}

/// Formatted board, for people.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartureBoard {
    pub station_name: String,
    pub station_id: String,
    pub place: String,
    pub line_number: String,
    pub direction: String,
    pub departures: Vec<DisplayDeparture>,
    /// Local time of the fetch, `YYYY-MM-DD HH:MM:SS`.
    pub last_update: String,
}

/// Raw board, for automation: departures in the provider's own shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawBoard {
    pub station_name: String,
    pub station_id: String,
    pub place: String,
    pub line_number: String,
    pub direction: String,
    pub departures: Vec<RawDeparture>,
    /// Unix time of the fetch, in seconds.
    pub last_update_timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> DepartureBoard {
        DepartureBoard {
            station_name: "Olympiazentrum".into(),
            station_id: "de:09162:350".into(),
            place: "München".into(),
            line_number: "180".into(),
            direction: "Berduxstraße".into(),
            departures: vec![],
            last_update: "2023-11-14 23:13:20".into(),
        }
    }

    #[test]
    fn success_has_no_error_key() {
        let envelope = Envelope::Success(board());
        assert!(!envelope.is_error());
        assert!(envelope.error().is_none());

        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["station_id"], "de:09162:350");
        assert_eq!(json["departures"], serde_json::json!([]));
    }

    #[test]
    fn failure_is_error_and_station_only() {
        let envelope: Envelope<DepartureBoard> = Envelope::Failure(ErrorEnvelope {
            error: "Could not find station 'X'".into(),
            station_name: "X".into(),
        });
        assert!(envelope.is_error());
        assert!(envelope.success().is_none());

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Could not find station 'X'",
                "station_name": "X",
            })
        );
    }

    #[test]
    fn raw_board_reports_timestamp() {
        let envelope = Envelope::Success(RawBoard {
            station_name: "Olympiazentrum".into(),
            station_id: "de:09162:350".into(),
            place: "München".into(),
            line_number: "180".into(),
            direction: "Berduxstraße".into(),
            departures: vec![RawDeparture::new("180", "Berduxstraße")],
            last_update_timestamp: 1_700_000_000,
        });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["last_update_timestamp"], 1_700_000_000);
        assert!(json.get("last_update").is_none());
        assert_eq!(
            json["departures"][0],
            serde_json::json!({"line": "180", "destination": "Berduxstraße"})
        );
    }
}
