//! MVG (Münchner Verkehrsgesellschaft) API client.
//!
//! This module provides an HTTP client for the public MVG `bgw-pt/v3`
//! API, which serves station search and live departures for Munich
//! public transport, plus a mock with the same interface.
//!
//! Key characteristics of the API:
//! - Stations are identified by global IDs such as `de:09162:350`
//! - Departure times are milliseconds since the epoch
//! - Transport types are codes (`BUS`, `UBAHN`) rather than display names

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MvgClient, MvgConfig};
pub use convert::{
    ConversionError, convert_departure, convert_location, first_station, transport_name,
};
pub use error::MvgError;
pub use mock::MockMvgClient;
pub use types::{DepartureDto, LocationDto};
