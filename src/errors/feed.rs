//! Errors raised while fetching or decoding a feed

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport-level failure, including timeouts
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Local feed file could not be read
    #[error("Failed to read feed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid JSON
    #[error("Malformed feed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is JSON but not a GeoJSON FeatureCollection
    #[error("Not a GeoJSON FeatureCollection: {0}")]
    NotAFeatureCollection(String),

    /// Feed location is neither an http(s) URL nor a usable file path
    #[error("Unsupported feed location: {0}")]
    UnsupportedLocation(String),
}

impl FeedError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FeedError::Http { .. } => "HTTP_ERROR",
            FeedError::Status { .. } => "BAD_STATUS",
            FeedError::Io { .. } => "IO_ERROR",
            FeedError::Json(_) => "MALFORMED_PAYLOAD",
            FeedError::NotAFeatureCollection(_) => "NOT_A_FEATURE_COLLECTION",
            FeedError::UnsupportedLocation(_) => "UNSUPPORTED_LOCATION",
        }
    }
}
