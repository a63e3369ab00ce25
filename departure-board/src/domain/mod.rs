//! Domain types for the departure board.
//!
//! Stations and departures as the rest of the crate sees them. Provider
//! DTOs are converted into these in [`crate::mvg`].

mod departure;
mod station;
mod time;

pub use departure::{DelaySeverity, DisplayDeparture, RawDeparture};
pub use station::StationInfo;
pub use time::{
    DepartureTime, TIME_FORMAT, UNKNOWN_TIME, format_departure_time_in, format_timestamp_in,
};
