//! MVG bus departure board.
//!
//! Shows live departures of one bus line in one direction at a fixed
//! Munich station (by default: line 180 at Olympiazentrum towards
//! Berduxstraße), as a web page, as JSON, or as a static HTML snapshot.

pub mod cli;
pub mod domain;
pub mod mvg;
pub mod pipeline;
pub mod static_site;
pub mod survey;
pub mod web;
