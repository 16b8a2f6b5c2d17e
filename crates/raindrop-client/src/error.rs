//! Error types for the Raindrop HTTP client

use thiserror::Error;

/// Errors that can occur when talking to the Raindrop REST API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("API returned status {status} for {endpoint}")]
    Status { status: u16, endpoint: &'static str },

    /// Response body was not the expected JSON
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// HTTP status code, when the server answered with an error status
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_) | ApiError::InvalidConfig(_) => None,
        }
    }
}

/// Errors returned by a bookmark fetch
///
/// A missing API key is kept apart from every other failure so hosts can
/// show a dedicated message for it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured
    #[error("No API Key Specified")]
    MissingApiKey,

    /// Any transport, status or parse failure
    #[error("Raindrop API Error: {0}")]
    Api(#[from] ApiError),
}

impl FetchError {
    /// HTTP status code carried by the underlying failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::MissingApiKey => None,
            FetchError::Api(e) => e.status(),
        }
    }
}

/// Result type for Raindrop API operations
pub type Result<T> = std::result::Result<T, ApiError>;
