//! Askama templates for the HTML board.

use askama::Template;

use crate::domain::DisplayDeparture;
use crate::pipeline::{BoardConfig, DepartureBoard, Envelope};

/// Live board page served at `/`.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub board: BoardView,
}

/// Standalone snapshot page written by the static site generator.
#[derive(Template)]
#[template(path = "static_board.html")]
pub struct StaticBoardTemplate {
    pub board: BoardView,
    pub generated_at: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Board view model.
///
/// When `error` is set, only `station_name`, `line_number` and `direction`
/// are meaningful.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub station_name: String,
    pub line_number: String,
    pub direction: String,
    pub error: Option<String>,
    pub station_id: String,
    pub place: String,
    pub last_update: String,
    pub departures: Vec<DepartureView>,
}

impl BoardView {
    /// Create from a pipeline envelope.
    ///
    /// `config` supplies the line and direction for error envelopes, which
    /// carry only the station name.
    pub fn from_envelope(envelope: &Envelope<DepartureBoard>, config: &BoardConfig) -> Self {
        match envelope {
            Envelope::Success(board) => Self {
                station_name: board.station_name.clone(),
                line_number: board.line_number.clone(),
                direction: board.direction.clone(),
                error: None,
                station_id: board.station_id.clone(),
                place: board.place.clone(),
                last_update: board.last_update.clone(),
                departures: board
                    .departures
                    .iter()
                    .map(DepartureView::from_departure)
                    .collect(),
            },
            Envelope::Failure(failure) => Self {
                station_name: failure.station_name.clone(),
                line_number: config.line.clone(),
                direction: config.direction.clone(),
                error: Some(failure.error.clone()),
                station_id: String::new(),
                place: String::new(),
                last_update: String::new(),
                departures: Vec::new(),
            },
        }
    }
}

/// Departure card view model.
#[derive(Debug, Clone)]
pub struct DepartureView {
    pub line: String,
    pub transport_type: String,
    pub destination: String,
    pub time: String,
    pub delay_label: String,
    pub delay_class: &'static str,
    /// Only set when the provider sent a non-empty platform.
    pub platform: Option<String>,
    pub cancelled: bool,
}

impl DepartureView {
    /// Create from a display departure.
    pub fn from_departure(departure: &DisplayDeparture) -> Self {
        Self {
            line: departure.line.clone(),
            transport_type: departure.transport_type.clone(),
            destination: departure.destination.clone(),
            time: departure.formatted_time.clone(),
            delay_label: departure.delay_label(),
            delay_class: departure.delay_severity().css_class(),
            platform: departure.platform.clone().filter(|p| !p.is_empty()),
            cancelled: departure.cancelled,
        }
    }
}
