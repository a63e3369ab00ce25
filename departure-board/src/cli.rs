//! Command-line configuration shared by the binaries.
//!
//! Every option can also be set through an environment variable, so the
//! same binaries work from a shell, a container or a CI job.

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::domain::{RawDeparture, StationInfo};
use crate::mvg::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MockMvgClient, MvgClient, MvgConfig, MvgError,
};
use crate::pipeline::{
    BoardConfig, DEFAULT_DIRECTION, DEFAULT_LIMIT, DEFAULT_LINE, DEFAULT_STATION,
    DeparturePipeline, TransitProvider,
};

/// Which departures to show and where to get them from.
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Station to watch
    #[arg(long, env = "BOARD_STATION", default_value = DEFAULT_STATION)]
    pub station: String,

    /// Line label to keep (exact match)
    #[arg(long, env = "BOARD_LINE", default_value = DEFAULT_LINE)]
    pub line: String,

    /// Fragment that must appear in the destination
    #[arg(long, env = "BOARD_DIRECTION", default_value = DEFAULT_DIRECTION)]
    pub direction: String,

    /// Number of departures to request before filtering
    #[arg(long, env = "BOARD_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// MVG API base URL
    #[arg(long, env = "MVG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub mvg_base_url: String,

    /// Timeout for each MVG request, in seconds
    #[arg(long, env = "MVG_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Serve canned data from this fixture file instead of calling MVG
    #[arg(long, env = "MVG_MOCK_FILE")]
    pub mock_file: Option<PathBuf>,
}

impl BoardArgs {
    /// The board configuration these arguments describe.
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new(&self.station, &self.line, &self.direction).with_limit(self.limit)
    }

    /// The provider these arguments select.
    pub fn provider(&self) -> Result<Provider, MvgError> {
        match &self.mock_file {
            Some(path) => Ok(Provider::Mock(MockMvgClient::from_file(path)?)),
            None => {
                let config = MvgConfig::new()
                    .with_base_url(&self.mvg_base_url)
                    .with_timeout(self.timeout_secs);
                Ok(Provider::Live(MvgClient::new(config)?))
            }
        }
    }

    /// Build the pipeline.
    pub fn pipeline(&self) -> Result<DeparturePipeline<Provider>, MvgError> {
        Ok(DeparturePipeline::new(self.provider()?, self.board_config()))
    }
}

/// The live API or a fixture, chosen at startup.
#[derive(Debug, Clone)]
pub enum Provider {
    Live(MvgClient),
    Mock(MockMvgClient),
}

impl TransitProvider for Provider {
    async fn find_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        match self {
            Provider::Live(client) => client.find_station(name).await,
            Provider::Mock(client) => client.find_station(name).await,
        }
    }

    async fn departures(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        match self {
            Provider::Live(client) => client.departures(station_id, limit).await,
            Provider::Mock(client) => client.departures(station_id, limit).await,
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Logs go to stderr
/// so they never mix with a binary's own output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
