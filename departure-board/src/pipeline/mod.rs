//! Departure retrieval, filtering and projection.
//!
//! This module is the core of the crate. The web server, the static site
//! generator and the console checker all call into [`DeparturePipeline`]
//! and differ only in how they render its [`Envelope`].

mod config;
mod departures;
mod envelope;
mod error;
mod filter;
mod provider;
mod resolver;

#[cfg(test)]
pub(crate) mod test_providers;

pub use config::{BoardConfig, DEFAULT_DIRECTION, DEFAULT_LIMIT, DEFAULT_LINE, DEFAULT_STATION};
pub use departures::{DeparturePipeline, Stage};
pub use envelope::{DepartureBoard, Envelope, ErrorEnvelope, RawBoard};
pub use error::{PipelineError, UNEXPECTED_FAILURE_MESSAGE, UPSTREAM_FAILURE_MESSAGE};
pub use filter::DepartureFilter;
pub use provider::TransitProvider;
pub use resolver::StationResolver;
