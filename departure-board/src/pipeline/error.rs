//! Pipeline error types.
//!
//! Every failure the pipeline can hit is one of three kinds. Each carries
//! enough detail for the logs, but only [`PipelineError::user_message`]
//! ever reaches a caller.

use crate::mvg::MvgError;

use super::envelope::ErrorEnvelope;

/// Shown when the transit-data provider fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to retrieve data from MVG API. Please try again later.";

/// Shown for any other failure.
pub const UNEXPECTED_FAILURE_MESSAGE: &str =
    "An unexpected error occurred. Please try again later.";

/// Why a board could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Station search returned nothing
    #[error("station '{station_name}' not found")]
    StationNotFound { station_name: String },

    /// The provider errored or timed out
    #[error("upstream failure: {0}")]
    Upstream(#[from] MvgError),

    /// Anything else
    #[error("unexpected failure: {message}")]
    Unexpected { message: String },
}

impl PipelineError {
    /// The message safe to show to users.
    ///
    /// Only station-not-found mentions anything specific, and then only the
    /// name that was queried.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::StationNotFound { station_name } => {
                format!("Could not find station '{station_name}'")
            }
            PipelineError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            PipelineError::Unexpected { .. } => UNEXPECTED_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Collapse into the error envelope for the configured station.
    pub fn to_envelope(&self, station_name: &str) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.user_message(),
            station_name: station_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let err = PipelineError::StationNotFound {
            station_name: "Nonexistentstation".into(),
        };
        assert_eq!(
            err.user_message(),
            "Could not find station 'Nonexistentstation'"
        );

        let err = PipelineError::Upstream(MvgError::Api {
            status: 500,
            message: "secret stack trace".into(),
        });
        assert_eq!(err.user_message(), UPSTREAM_FAILURE_MESSAGE);
        assert!(err.to_string().contains("secret stack trace"));

        let err = PipelineError::Unexpected {
            message: "boom".into(),
        };
        assert_eq!(err.user_message(), UNEXPECTED_FAILURE_MESSAGE);
    }

    #[test]
    fn envelope_hides_detail() {
        let err = PipelineError::Upstream(MvgError::RateLimited);
        let envelope = err.to_envelope("Olympiazentrum");

        assert_eq!(envelope.error, UPSTREAM_FAILURE_MESSAGE);
        assert_eq!(envelope.station_name, "Olympiazentrum");
        assert!(!envelope.error.contains("rate limited"));
    }
}
