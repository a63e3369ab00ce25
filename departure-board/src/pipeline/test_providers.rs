//! Providers that misbehave in ways [`MockMvgClient`](crate::mvg::MockMvgClient)
//! cannot.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{RawDeparture, StationInfo};
use crate::mvg::MvgError;

use super::TransitProvider;

/// Resolves every name to Olympiazentrum, then panics listing departures.
pub(crate) struct PanickingProvider;

impl TransitProvider for PanickingProvider {
    async fn find_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        Ok(Some(StationInfo::new("de:09162:350", name, "München")))
    }

    async fn departures(
        &self,
        _station_id: &str,
        _limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        panic!("departure feed exploded")
    }
}

/// Resolves every name to a station without an id, and counts departure
/// requests.
#[derive(Default)]
pub(crate) struct IdlessStationProvider {
    fetches: AtomicUsize,
}

impl IdlessStationProvider {
    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl TransitProvider for IdlessStationProvider {
    async fn find_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        Ok(Some(StationInfo::new("", name, "München")))
    }

    async fn departures(
        &self,
        _station_id: &str,
        _limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }
}
