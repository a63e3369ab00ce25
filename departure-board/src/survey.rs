//! Console report of the departure board.
//!
//! Unlike the web and static views, the console report also helps when
//! nothing matches: it lists the first few unfiltered departures so the
//! line or direction setting can be checked against what MVG reports.

use std::fmt::Write;

use crate::domain::{DisplayDeparture, StationInfo};
use crate::pipeline::{DeparturePipeline, PipelineError, TransitProvider};

/// How many unfiltered departures to list when nothing matches.
pub const SAMPLE_LIMIT: usize = 10;

const RULE_WIDTH: usize = 70;

/// Everything the console report shows.
#[derive(Debug, Clone)]
pub struct Survey {
    pub station: StationInfo,
    pub line: String,
    pub direction: String,
    pub matching: Vec<DisplayDeparture>,
    /// First departures of the unfiltered batch; empty when something
    /// matched.
    pub sample: Vec<DisplayDeparture>,
}

impl Survey {
    /// Resolve, fetch once and split the batch into matches and a sample.
    pub async fn gather<P: TransitProvider>(
        pipeline: &DeparturePipeline<P>,
    ) -> Result<Self, PipelineError> {
        let config = pipeline.config();
        let (station, all) = pipeline.station_departures().await?;

        let filter = config.filter();
        let matching: Vec<_> = all
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.to_display())
            .collect();

        let sample = if matching.is_empty() {
            all.iter().take(SAMPLE_LIMIT).map(|d| d.to_display()).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            station,
            line: config.line.clone(),
            direction: config.direction.clone(),
            matching,
            sample,
        })
    }

    /// Render the report as plain text.
    pub fn render(&self) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "Station ID for {}: {}", self.station.name, self.station.id);
        let _ = writeln!(out, "Place: {}", self.station.place);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Filtering for line {} in direction {}:",
            self.line, self.direction
        );
        let _ = writeln!(out, "{rule}");

        for departure in &self.matching {
            let _ = writeln!(out, "Line: {}", departure.line);
            let _ = writeln!(out, "Type: {}", departure.transport_type);
            let _ = writeln!(out, "Destination: {}", departure.destination);
            let _ = writeln!(out, "Departure Time: {}", departure.formatted_time);
            let _ = writeln!(out, "Delay: {} minutes", departure.delay);
            if departure.cancelled {
                let _ = writeln!(out, "Cancelled");
            }
            let _ = writeln!(out, "{rule}");
        }

        if self.matching.is_empty() {
            let _ = writeln!(
                out,
                "No departures found for line {} in direction {}",
                self.line, self.direction
            );
            if !self.sample.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "All available departures:");
                for departure in &self.sample {
                    let _ = writeln!(
                        out,
                        "Line {}: {} at {}",
                        departure.line, departure.destination, departure.formatted_time
                    );
                }
            }
        }

        out
    }
}

/// Render a pipeline failure for the console.
pub fn render_failure(err: &PipelineError) -> String {
    let hint = match err {
        PipelineError::StationNotFound { .. } => "Please verify the station name and try again.",
        PipelineError::Upstream(_) => "Please check your internet connection and try again.",
        PipelineError::Unexpected { .. } => "Please try again later.",
    };
    format!("Error: {}\n{}\n", err.user_message(), hint)
}
