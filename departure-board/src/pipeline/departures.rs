//! The departure pipeline: resolve the station, fetch its departures,
//! filter them to the configured line and direction, and project them
//! for display.
//!
//! Each invocation walks
//! `Resolving → Fetching → Filtering → Done`, or stops at the first
//! failure. Whatever happens, the caller gets an [`Envelope`]: failures
//! (including panics inside the pipeline) are logged with their detail and
//! collapsed into an error envelope with a generic message. Nothing is
//! kept between invocations.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use chrono::{Local, TimeZone, Utc};
use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::domain::{RawDeparture, StationInfo, TIME_FORMAT};

use super::config::BoardConfig;
use super::envelope::{DepartureBoard, Envelope, RawBoard};
use super::error::PipelineError;
use super::filter::DepartureFilter;
use super::provider::TransitProvider;
use super::resolver::StationResolver;

/// Where an invocation is, for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Fetching,
    Filtering,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolving => "resolving",
            Stage::Fetching => "fetching",
            Stage::Filtering => "filtering",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Produces departure boards for one configured station, line and
/// direction.
///
/// Shared freely between concurrent requests: it holds only the provider
/// and the immutable config.
pub struct DeparturePipeline<P: TransitProvider> {
    provider: P,
    config: BoardConfig,
}

impl<P: TransitProvider> DeparturePipeline<P> {
    pub fn new(provider: P, config: BoardConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve the configured station.
    pub async fn resolve_station(&self) -> Result<StationInfo, PipelineError> {
        StationResolver::new(&self.provider)
            .resolve(&self.config.station_name)
            .await
    }

    /// Fetch up to `limit` departures, unfiltered.
    pub async fn fetch_all(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, PipelineError> {
        Ok(self.provider.departures(station_id, limit).await?)
    }

    /// Fetch up to `limit` departures and keep those `filter` matches.
    ///
    /// The limit applies before filtering, so fewer than `limit` (possibly
    /// zero) departures come back. Provider order is preserved.
    pub async fn fetch_and_filter(
        &self,
        station_id: &str,
        filter: &DepartureFilter,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, PipelineError> {
        let departures = self.fetch_all(station_id, limit).await?;
        Ok(apply_filter(filter, departures))
    }

    /// Resolve the configured station and fetch its departures, unfiltered.
    ///
    /// Runs under the same guards as the boards: a panic, or a station
    /// without an id, is reported as [`PipelineError::Unexpected`]. Failures
    /// are logged before being returned.
    pub async fn station_departures(
        &self,
    ) -> Result<(StationInfo, Vec<RawDeparture>), PipelineError> {
        let outcome = guarded(self.resolve_and_fetch()).await;
        if let Err(err) = &outcome {
            log_failure(err);
        }
        outcome
    }

    /// Build the formatted board, with times in local time.
    pub async fn board(&self) -> Envelope<DepartureBoard> {
        self.board_in(&Local).await
    }

    /// Build the formatted board, with times in `tz`.
    pub async fn board_in<Tz>(&self, tz: &Tz) -> Envelope<DepartureBoard>
    where
        Tz: TimeZone + Sync,
        Tz::Offset: fmt::Display,
    {
        let outcome = guarded(async {
            let (station, matching) = self.matching_departures().await?;
            let departures: Vec<_> = matching.iter().map(|d| d.to_display_in(tz)).collect();
            let last_update = Utc::now().with_timezone(tz).format(TIME_FORMAT).to_string();

            info!(
                station_id = %station.id,
                departures = departures.len(),
                "departure board ready"
            );

            Ok::<_, PipelineError>(DepartureBoard {
                station_name: self.config.station_name.clone(),
                station_id: station.id,
                place: station.place,
                line_number: self.config.line.clone(),
                direction: self.config.direction.clone(),
                departures,
                last_update,
            })
        })
        .await;

        self.finish(outcome)
    }

    /// Build the raw board: matching departures exactly as the provider
    /// sent them.
    pub async fn raw_board(&self) -> Envelope<RawBoard> {
        let outcome = guarded(async {
            let (station, departures) = self.matching_departures().await?;

            info!(
                station_id = %station.id,
                departures = departures.len(),
                "raw departure board ready"
            );

            Ok::<_, PipelineError>(RawBoard {
                station_name: self.config.station_name.clone(),
                station_id: station.id,
                place: station.place,
                line_number: self.config.line.clone(),
                direction: self.config.direction.clone(),
                departures,
                last_update_timestamp: Utc::now().timestamp(),
            })
        })
        .await;

        self.finish(outcome)
    }

    /// Resolve, fetch and filter: the steps both board shapes share.
    async fn matching_departures(
        &self,
    ) -> Result<(StationInfo, Vec<RawDeparture>), PipelineError> {
        let (station, departures) = self.resolve_and_fetch().await?;
        Ok((station, apply_filter(&self.config.filter(), departures)))
    }

    async fn resolve_and_fetch(
        &self,
    ) -> Result<(StationInfo, Vec<RawDeparture>), PipelineError> {
        debug!(
            stage = %Stage::Resolving,
            station = %self.config.station_name,
            "resolving station"
        );
        let station = self.resolve_station().await?;

        if station.id.is_empty() {
            return Err(PipelineError::Unexpected {
                message: format!("station '{}' resolved without an id", station.name),
            });
        }

        debug!(
            stage = %Stage::Fetching,
            station_id = %station.id,
            limit = self.config.limit,
            "fetching departures"
        );
        let departures = self.fetch_all(&station.id, self.config.limit).await?;

        Ok((station, departures))
    }

    /// Turn an outcome into an envelope, logging any failure.
    fn finish<T>(&self, outcome: Result<T, PipelineError>) -> Envelope<T> {
        match outcome {
            Ok(board) => {
                debug!(stage = %Stage::Done, "pipeline finished");
                Envelope::Success(board)
            }
            Err(err) => {
                log_failure(&err);
                Envelope::Failure(err.to_envelope(&self.config.station_name))
            }
        }
    }
}

fn apply_filter(filter: &DepartureFilter, departures: Vec<RawDeparture>) -> Vec<RawDeparture> {
    let total = departures.len();
    let matching = filter.apply(departures);

    debug!(
        stage = %Stage::Filtering,
        total,
        matching = matching.len(),
        line = filter.line(),
        direction = filter.direction(),
        "filtered departures"
    );

    matching
}

fn log_failure(err: &PipelineError) {
    match err {
        PipelineError::StationNotFound { .. } => {
            warn!(error = %err, "station lookup returned no match")
        }
        PipelineError::Upstream(_) => {
            error!(error = %err, "failed to retrieve data from MVG")
        }
        PipelineError::Unexpected { .. } => {
            error!(error = %err, "unexpected pipeline failure")
        }
    }
}

/// Run `fut`, converting a panic into [`PipelineError::Unexpected`].
async fn guarded<T, F>(fut: F) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T, PipelineError>>,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            Err(PipelineError::Unexpected {
                message: panic_message(panic.as_ref()),
            })
        })
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("panic: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("panic: {message}")
    } else {
        "panic with non-string payload".to_string()
    }
}
