//! Mock MVG client for testing without network access.
//!
//! Serves a fixed station and departure list, either built in code or
//! loaded from a JSON fixture file, as if they were live API responses.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::domain::{RawDeparture, StationInfo};
use crate::pipeline::TransitProvider;

use super::error::MvgError;

/// Fixture file layout.
#[derive(Debug, Deserialize)]
struct Fixture {
    station: Option<StationInfo>,
    #[serde(default)]
    departures: Vec<RawDeparture>,
}

/// A canned API failure.
#[derive(Debug, Clone)]
struct Failure {
    status: u16,
    message: String,
}

impl Failure {
    fn to_error(&self) -> MvgError {
        MvgError::Api {
            status: self.status,
            message: self.message.clone(),
        }
    }
}

/// Mock MVG client that serves canned data.
///
/// Station search matches case-insensitively on a substring of the
/// station name, loosely like the real search.
#[derive(Debug, Clone, Default)]
pub struct MockMvgClient {
    station: Option<StationInfo>,
    departures: Vec<RawDeparture>,
    station_failure: Option<Failure>,
    departures_failure: Option<Failure>,
    calls: Arc<AtomicUsize>,
}

impl MockMvgClient {
    /// A mock that knows no stations and no departures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mock from a JSON fixture file.
    ///
    /// The file holds `{"station": {...} | null, "departures": [...]}` with
    /// departures in the same shape the raw endpoint serves.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MvgError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MvgError::Fixture {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let fixture: Fixture = serde_json::from_str(&json).map_err(|e| MvgError::Fixture {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

        Ok(Self {
            station: fixture.station,
            departures: fixture.departures,
            ..Self::default()
        })
    }

    /// Serve this station from station search.
    pub fn with_station(mut self, station: StationInfo) -> Self {
        self.station = Some(station);
        self
    }

    /// Serve these departures for the configured station.
    pub fn with_departures(mut self, departures: Vec<RawDeparture>) -> Self {
        self.departures = departures;
        self
    }

    /// Make station search fail with an API error.
    pub fn failing_station_search(mut self, status: u16, message: impl Into<String>) -> Self {
        self.station_failure = Some(Failure {
            status,
            message: message.into(),
        });
        self
    }

    /// Make departure listing fail with an API error.
    pub fn failing_departures(mut self, status: u16, message: impl Into<String>) -> Self {
        self.departures_failure = Some(Failure {
            status,
            message: message.into(),
        });
        self
    }

    /// Number of upstream calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TransitProvider for MockMvgClient {
    async fn find_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = &self.station_failure {
            return Err(failure.to_error());
        }

        let query = name.to_lowercase();
        Ok(self
            .station
            .as_ref()
            .filter(|s| !query.is_empty() && s.name.to_lowercase().contains(&query))
            .cloned())
    }

    async fn departures(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = &self.departures_failure {
            return Err(failure.to_error());
        }

        match &self.station {
            Some(station) if station.id == station_id => {
                Ok(self.departures.iter().take(limit).cloned().collect())
            }
            _ => Err(MvgError::Api {
                status: 404,
                message: format!("No mock data for station {station_id}"),
            }),
        }
    }
}
