//! MVG HTTP client.
//!
//! Provides async methods for the two MVG endpoints the board needs:
//! station search and departure listing.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{RawDeparture, StationInfo};
use crate::pipeline::TransitProvider;

use super::convert::{convert_departure, convert_location, first_station};
use super::error::MvgError;
use super::types::{DepartureDto, LocationDto, STATION_LOCATION_TYPE};

/// Default base URL for the MVG API.
pub const DEFAULT_BASE_URL: &str = "https://www.mvg.de/api/bgw-pt/v3";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header.
const DEFAULT_USER_AGENT: &str = concat!("departure-board/", env!("CARGO_PKG_VERSION"));

/// Configuration for the MVG client.
#[derive(Debug, Clone)]
pub struct MvgConfig {
    /// Base URL for the API (defaults to production MVG)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl MvgConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for MvgConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MVG API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MvgClient {
    http: reqwest::Client,
    base_url: String,
}

impl MvgClient {
    /// Create a new MVG client with the given configuration.
    pub fn new(config: MvgConfig) -> Result<Self, MvgError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| MvgError::Api {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for a station by name.
    ///
    /// Returns the first station MVG suggests, or `None` if the search
    /// yields no stations.
    pub async fn search_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        let url = format!("{}/locations", self.base_url);
        let locations: Vec<LocationDto> = self
            .get_json(
                &url,
                &[("query", name), ("locationTypes", STATION_LOCATION_TYPE)],
            )
            .await?;

        debug!(query = name, results = locations.len(), "station search");

        match first_station(&locations) {
            Some(location) => Ok(Some(convert_location(location)?)),
            None => Ok(None),
        }
    }

    /// List up to `limit` upcoming departures at a station.
    ///
    /// Departures are returned in MVG's order (ascending by time).
    pub async fn get_departures(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        let url = format!("{}/departures", self.base_url);
        let limit = limit.to_string();
        let departures: Vec<DepartureDto> = self
            .get_json(
                &url,
                &[
                    ("globalId", station_id),
                    ("limit", limit.as_str()),
                    ("offsetInMinutes", "0"),
                ],
            )
            .await?;

        Ok(departures.iter().map(convert_departure).collect())
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MvgError> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MvgError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MvgError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MvgError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitProvider for MvgClient {
    async fn find_station(&self, name: &str) -> Result<Option<StationInfo>, MvgError> {
        self.search_station(name).await
    }

    async fn departures(
        &self,
        station_id: &str,
        limit: usize,
    ) -> Result<Vec<RawDeparture>, MvgError> {
        self.get_departures(station_id, limit).await
    }
}
