//! The upstream transit-data provider seam.

use std::future::Future;

use crate::domain::{RawDeparture, StationInfo};
use crate::mvg::MvgError;

/// Source of station and departure data.
///
/// Implemented by [`crate::mvg::MvgClient`] for the live API and by
/// [`crate::mvg::MockMvgClient`] for tests and offline development.
pub trait TransitProvider: Send + Sync {
    /// Look up a station by free-text name.
    ///
    /// Returns `Ok(None)` when the provider has no match.
    fn find_station(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<StationInfo>, MvgError>> + Send;

    /// List up to `limit` upcoming departures at a station, in the
    /// provider's order.
    fn departures(
        &self,
        station_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RawDeparture>, MvgError>> + Send;
}
