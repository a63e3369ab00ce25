//! MVG client error types.

use super::convert::ConversionError;

/// Errors from talking to the MVG API (or a stand-in for it).
#[derive(Debug, thiserror::Error)]
pub enum MvgError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by MVG API")]
    RateLimited,

    /// Response parsed but could not be converted to domain types
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Mock fixture could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
