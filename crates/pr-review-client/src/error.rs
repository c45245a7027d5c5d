use thiserror::Error;

/// Errors returned by [`crate::ReviewApi`] calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot carry path segments
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status code
    #[error("HTTP {status}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
