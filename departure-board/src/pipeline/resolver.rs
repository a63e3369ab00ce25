//! Station name resolution.

use tracing::debug;

use crate::domain::StationInfo;

use super::error::PipelineError;
use super::provider::TransitProvider;

/// Maps a station name to the provider's station record.
///
/// Makes exactly one upstream call per resolution and never retries.
pub struct StationResolver<'a, P: TransitProvider> {
    provider: &'a P,
}

impl<'a, P: TransitProvider> StationResolver<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Resolve `station_name`.
    ///
    /// A search with no result is [`PipelineError::StationNotFound`]; a
    /// provider failure is [`PipelineError::Upstream`].
    pub async fn resolve(&self, station_name: &str) -> Result<StationInfo, PipelineError> {
        match self.provider.find_station(station_name).await? {
            Some(station) => {
                debug!(
                    station = station_name,
                    station_id = %station.id,
                    place = %station.place,
                    "resolved station"
                );
                Ok(station)
            }
            None => Err(PipelineError::StationNotFound {
                station_name: station_name.to_string(),
            }),
        }
    }
}
